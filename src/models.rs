//! Public flowsheet models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `separation`)
//! based on an opinionated taxonomy.
//!
//! # Model structure
//!
//! Each model lives in its own module. Its outlet calculation lives in an
//! internal `core` submodule that is **not** re-exported. The stateful
//! [`Device`](crate::support::flowsheet::Device) implementation and the
//! stateless [`twine_core::Model`] adapter are both thin wrappers that
//! delegate to that core.

pub mod separation;
