//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants enforced at construction time.
//! - [`flowsheet`]: Streams, stream handles, and the [`flowsheet::Device`] contract.

pub mod constraint;
pub mod flowsheet;
