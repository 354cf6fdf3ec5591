//! Separation unit models.
//!
//! This module contains units that divide combined inlet flow between
//! several outlets.

pub mod absorber;

pub use absorber::{Absorber, AbsorberModel};
