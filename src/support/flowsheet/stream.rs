use std::fmt;

use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// A named carrier of a single mass flow rate.
///
/// New streams start with zero flow.
/// The flow is guaranteed to be non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    name: String,
    mass_flow: Constrained<MassRate, NonNegative>,
}

impl Stream {
    /// Creates a zero-flow stream with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mass_flow: NonNegative::zero(),
        }
    }

    /// Returns the stream's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the stream.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the stream's mass flow rate.
    #[must_use]
    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow.into_inner()
    }

    /// Sets the stream's mass flow rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `mass_flow` is negative or `NaN`.
    /// The stream is left unchanged in that case.
    pub fn set_mass_flow(&mut self, mass_flow: MassRate) -> ConstraintResult<()> {
        self.mass_flow = NonNegative::new(mass_flow)?;
        Ok(())
    }

    /// Sets the stream's mass flow rate from a pre-validated value.
    pub fn set_constrained_mass_flow(&mut self, mass_flow: Constrained<MassRate, NonNegative>) {
        self.mass_flow = mass_flow;
    }

    /// Writes a one-line summary of the stream to standard output.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stream {} flow = {} kg/s",
            self.name,
            self.mass_flow().get::<kilogram_per_second>()
        )
    }
}
