use super::{DeviceError, StreamArena, StreamId};

/// A unit with a fixed number of input and output streams.
///
/// Implementors own their connections as [`StreamId`] handles and compute
/// output flows from input flows in [`Device::update_outputs`]. Connections
/// are append-only and kept in connection order.
pub trait Device {
    /// Maximum number of input streams.
    fn input_capacity(&self) -> usize;

    /// Maximum number of output streams.
    fn output_capacity(&self) -> usize;

    /// Connected input streams, in connection order.
    fn inputs(&self) -> &[StreamId];

    /// Connected output streams, in connection order.
    fn outputs(&self) -> &[StreamId];

    /// Connects an input stream.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::InputCapacityExceeded`] if every input is taken.
    fn add_input(&mut self, stream: StreamId) -> Result<(), DeviceError>;

    /// Connects an output stream.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::OutputCapacityExceeded`] if every output is taken.
    fn add_output(&mut self, stream: StreamId) -> Result<(), DeviceError>;

    /// Recomputes the mass flows of the output streams.
    ///
    /// Only output streams are written. On error, no stream is modified.
    ///
    /// # Errors
    ///
    /// Returns a [`DeviceError`] if the device is not fully connected or a
    /// handle is not in `streams`.
    fn update_outputs(&self, streams: &mut StreamArena) -> Result<(), DeviceError>;
}
