//! Fixed-ratio outlet split for the absorber.

use uom::si::f64::MassRate;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative};

/// Share of the combined inlet flow leaving through the first outlet.
pub(super) const FIRST_OUTLET_FRACTION: f64 = 0.3;

/// Share of the combined inlet flow leaving through the second outlet.
pub(super) const SECOND_OUTLET_FRACTION: f64 = 0.7;

type Flow = Constrained<MassRate, NonNegative>;

/// Combines both inlet flows and divides the total 30/70 between the outlets.
///
/// # Errors
///
/// Fails only if the combined flow is not a number, which cannot happen for
/// finite non-negative inlets.
pub(super) fn split(inlets: [Flow; 2]) -> ConstraintResult<[Flow; 2]> {
    let total = inlets.into_iter().sum::<Flow>().into_inner();
    Ok([
        NonNegative::new(total * FIRST_OUTLET_FRACTION)?,
        NonNegative::new(total * SECOND_OUTLET_FRACTION)?,
    ])
}
