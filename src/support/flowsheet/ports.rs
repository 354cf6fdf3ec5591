use thiserror::Error;

use super::StreamId;

/// Returned by [`Ports::connect`] when every slot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all {capacity} ports are connected")]
pub struct PortsFull {
    pub capacity: usize,
}

/// An ordered list of at most `N` stream handles.
///
/// Connection order is preserved: the first stream connected is at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ports<const N: usize> {
    connected: Vec<StreamId>,
}

impl<const N: usize> Ports<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            connected: Vec::with_capacity(N),
        }
    }

    /// Appends a stream to the next free slot.
    ///
    /// # Errors
    ///
    /// Returns [`PortsFull`] if `N` streams are already connected.
    pub fn connect(&mut self, stream: StreamId) -> Result<(), PortsFull> {
        if self.connected.len() >= N {
            return Err(PortsFull { capacity: N });
        }
        self.connected.push(stream);
        Ok(())
    }

    /// Returns all `N` handles, or `None` while any slot is still empty.
    #[must_use]
    pub fn complete(&self) -> Option<[StreamId; N]> {
        self.connected.as_slice().try_into().ok()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[StreamId] {
        &self.connected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.connected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connected.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.connected.len() == N
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for Ports<N> {
    fn default() -> Self {
        Self::new()
    }
}
