//! # Twine Flowsheet
//!
//! Process stream and unit-operation models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Unit operations that compute outlet streams from inlet streams.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Streams and devices
//!
//! Streams live in a [`support::flowsheet::StreamArena`] owned by the caller.
//! Devices hold [`support::flowsheet::StreamId`] handles into that arena and
//! write their outlet flows back through it when recomputed:
//!
//! ```
//! use twine_flowsheet::models::separation::Absorber;
//! use twine_flowsheet::support::flowsheet::{Device, StreamArena};
//! use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
//!
//! # fn main() -> Result<(), twine_flowsheet::support::flowsheet::DeviceError> {
//! let mut streams = StreamArena::new();
//! let feed = streams.create();
//! let solvent = streams.create();
//! let gas = streams.create();
//! let liquid = streams.create();
//!
//! streams.set_mass_flow(feed, MassRate::new::<kilogram_per_second>(10.0))?;
//! streams.set_mass_flow(solvent, MassRate::new::<kilogram_per_second>(15.0))?;
//!
//! let mut absorber = Absorber::new();
//! absorber.add_input(feed)?;
//! absorber.add_input(solvent)?;
//! absorber.add_output(gas)?;
//! absorber.add_output(liquid)?;
//! absorber.update_outputs(&mut streams)?;
//!
//! let gas_flow = streams.mass_flow(gas)?.get::<kilogram_per_second>();
//! assert!((gas_flow - 7.5).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! Note: Only utilities in [`support`] are shared across models. Model-specific
//! helpers remain private to their model's module.

pub mod models;
pub mod support;
