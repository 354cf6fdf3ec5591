use uom::si::f64::MassRate;

use super::{DeviceError, Stream, StreamNamer};

/// Handle to a [`Stream`] stored in a [`StreamArena`].
///
/// A handle is only meaningful for the arena that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamId(usize);

impl StreamId {
    /// Returns the position of the stream within its arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every stream in a flowsheet.
///
/// Streams are never removed, so a handle stays valid for the life of the arena.
#[derive(Debug, Clone, Default)]
pub struct StreamArena {
    streams: Vec<Stream>,
    namer: StreamNamer,
}

impl StreamArena {
    /// Creates an empty arena whose streams are named `s1`, `s2`, …
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena that names streams with the given namer.
    #[must_use]
    pub fn with_namer(namer: StreamNamer) -> Self {
        Self {
            streams: Vec::new(),
            namer,
        }
    }

    /// Adds a new zero-flow stream named by the arena's namer.
    pub fn create(&mut self) -> StreamId {
        let name = self.namer.next_name();
        self.insert(Stream::new(name))
    }

    /// Adds a caller-built stream.
    pub fn insert(&mut self, stream: Stream) -> StreamId {
        let id = StreamId(self.streams.len());
        self.streams.push(stream);
        id
    }

    #[must_use]
    pub fn get(&self, id: StreamId) -> Option<&Stream> {
        self.streams.get(id.0)
    }

    #[must_use]
    pub fn get_mut(&mut self, id: StreamId) -> Option<&mut Stream> {
        self.streams.get_mut(id.0)
    }

    /// Returns the mass flow rate of a stream.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnknownStream`] if `id` was not issued by this arena.
    pub fn mass_flow(&self, id: StreamId) -> Result<MassRate, DeviceError> {
        self.get(id)
            .map(Stream::mass_flow)
            .ok_or(DeviceError::UnknownStream(id))
    }

    /// Sets the mass flow rate of a stream.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnknownStream`] for a foreign handle, or
    /// [`DeviceError::InvalidMassFlow`] if `mass_flow` is negative or `NaN`.
    pub fn set_mass_flow(&mut self, id: StreamId, mass_flow: MassRate) -> Result<(), DeviceError> {
        let stream = self.get_mut(id).ok_or(DeviceError::UnknownStream(id))?;
        stream.set_mass_flow(mass_flow)?;
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Iterates over every stream in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (StreamId, &Stream)> {
        self.streams
            .iter()
            .enumerate()
            .map(|(index, stream)| (StreamId(index), stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;
    use uom::si::mass_rate::kilogram_per_second;

    #[test]
    fn created_streams_are_named_in_order() {
        let mut streams = StreamArena::new();
        let first = streams.create();
        let second = streams.create();

        assert_eq!(streams.get(first).unwrap().name(), "s1");
        assert_eq!(streams.get(second).unwrap().name(), "s2");
        assert_eq!(streams.len(), 2);
    }

    #[test]
    fn inserted_streams_keep_their_names() {
        let mut streams = StreamArena::with_namer(StreamNamer::with_prefix("x"));
        let feed = streams.insert(Stream::new("feed"));
        let other = streams.create();

        let names: Vec<_> = streams.iter().map(|(_, s)| s.name().to_owned()).collect();
        assert_eq!(names, ["feed", "x1"]);
        assert_eq!(feed.index(), 0);
        assert_eq!(other.index(), 1);
    }

    #[test]
    fn foreign_handle_is_reported() {
        let mut issuer = StreamArena::new();
        issuer.create();
        let foreign = issuer.create();

        let mut streams = StreamArena::new();
        streams.create();

        assert_eq!(
            streams.mass_flow(foreign),
            Err(DeviceError::UnknownStream(foreign))
        );
    }

    #[test]
    fn negative_flow_is_rejected() {
        let mut streams = StreamArena::new();
        let id = streams.create();

        let result = streams.set_mass_flow(id, MassRate::new::<kilogram_per_second>(-1.0));

        assert_eq!(
            result,
            Err(DeviceError::InvalidMassFlow(ConstraintError::Negative))
        );
        assert_eq!(
            streams.mass_flow(id),
            Ok(MassRate::new::<kilogram_per_second>(0.0))
        );
    }
}
