/// An error type for superposition operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SuperposeError {
    /// Error when two index-aligned inputs differ in length.
    #[error("Input lengths disagree ({0} vs {1})")]
    DimensionMismatch(usize, usize),

    /// Error when a weight is negative or no weight is strictly positive.
    #[error("Weights must be non-negative with at least one positive entry")]
    InvalidWeights,

    /// Error when a flat coordinate buffer does not hold 3 components per point.
    #[error("Coordinate buffer length ({0}) is not a multiple of 3")]
    InvalidPointSet(usize),

    /// Error when a rotation axis has zero magnitude.
    #[error("Cannot build a rotation matrix around a zero-length axis")]
    InvalidRotationAxis,
}
