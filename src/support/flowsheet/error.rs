use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::StreamId;

/// Errors raised while connecting or recomputing a [`Device`](super::Device).
///
/// All of these indicate a mis-built flowsheet rather than a transient fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DeviceError {
    /// Every input port is already connected.
    #[error("input stream limit reached: device accepts {capacity} inputs")]
    InputCapacityExceeded { capacity: usize },

    /// Every output port is already connected.
    #[error("output stream limit reached: device accepts {capacity} outputs")]
    OutputCapacityExceeded { capacity: usize },

    /// Outputs were recomputed before all ports were connected.
    #[error(
        "missing streams: {inputs} of {expected_inputs} inputs and \
         {outputs} of {expected_outputs} outputs connected"
    )]
    MissingStreams {
        expected_inputs: usize,
        inputs: usize,
        expected_outputs: usize,
        outputs: usize,
    },

    /// A handle does not belong to the arena it was used with.
    #[error("stream {0:?} is not in this arena")]
    UnknownStream(StreamId),

    /// A mass flow was negative or not a number.
    #[error("invalid mass flow")]
    InvalidMassFlow(#[from] ConstraintError),
}
