//! Streams and the device contract.
//!
//! A flowsheet is a set of [`Stream`]s connected to devices. Streams are
//! owned by a [`StreamArena`]; devices keep [`StreamId`] handles into it and
//! never own a stream themselves. Whoever holds the arena decides how long the
//! streams live.
//!
//! - **Streams**: [`Stream`], named by a [`StreamNamer`]
//! - **Storage**: [`StreamArena`], [`StreamId`]
//! - **Connections**: [`Ports`], a fixed-capacity ordered list of handles
//! - **Devices**: the [`Device`] trait and its [`DeviceError`]

mod arena;
mod device;
mod error;
mod naming;
mod ports;
mod stream;

pub use arena::{StreamArena, StreamId};
pub use device::Device;
pub use error::DeviceError;
pub use naming::StreamNamer;
pub use ports::{Ports, PortsFull};
pub use stream::Stream;
