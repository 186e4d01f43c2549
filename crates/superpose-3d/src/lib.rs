#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for superposition operations.
pub mod error;

/// Weighted rigid-body superposition of point sets.
pub mod fit;

/// Linear algebra utilities.
pub mod linalg;

/// Point set reductions and alignment metrics.
pub mod ops;

/// Rotation matrix constructors.
pub mod transforms;

pub(crate) mod utils;

pub use error::SuperposeError;
pub use fit::{superimpose, superimpose_flat};
