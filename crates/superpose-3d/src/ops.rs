use crate::error::SuperposeError;

/// Compute the weighted centroid of a point set.
///
/// Points with zero weight do not influence the result. Weights enter the
/// reduction as `sum(w_i * p_i) / sum(w_i)`.
///
/// # Arguments
///
/// * `points` - A set of points.
/// * `weights` - A non-negative weight per point, aligned index-for-index.
///
/// # Returns
///
/// The weighted average position of the point set.
///
/// # Errors
///
/// * [`SuperposeError::DimensionMismatch`] when the inputs differ in length.
/// * [`SuperposeError::InvalidWeights`] when a weight is negative or no
///   weight is strictly positive.
///
/// Example:
///
/// ```
/// use superpose_3d::ops::weighted_centroid;
///
/// let points = vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
/// let centroid = weighted_centroid(&points, &[1.0, 1.0]).unwrap();
/// assert_eq!(centroid, [1.0, 0.0, 0.0]);
/// ```
pub fn weighted_centroid(
    points: &[[f64; 3]],
    weights: &[f64],
) -> Result<[f64; 3], SuperposeError> {
    if points.len() != weights.len() {
        return Err(SuperposeError::DimensionMismatch(
            points.len(),
            weights.len(),
        ));
    }

    let mut acc = [0.0; 3];
    let mut weight_sum = 0.0;
    for (point, &weight) in points.iter().zip(weights.iter()) {
        if weight < 0.0 {
            return Err(SuperposeError::InvalidWeights);
        }
        acc[0] += weight * point[0];
        acc[1] += weight * point[1];
        acc[2] += weight * point[2];
        weight_sum += weight;
    }

    if weight_sum <= 0.0 {
        return Err(SuperposeError::InvalidWeights);
    }

    Ok([
        acc[0] / weight_sum,
        acc[1] / weight_sum,
        acc[2] / weight_sum,
    ])
}

/// Compute the squared Euclidean distance between two points.
pub fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

/// Compute the weighted root-mean-square deviation between two point sets.
///
/// The deviation is `sqrt(sum(w_i * d_i^2) / sum(w_i))` where `d_i` is the
/// distance between corresponding points.
///
/// # Arguments
///
/// * `a` - A set of points.
/// * `b` - Another set of points, in one-to-one correspondence with `a`.
/// * `weights` - A non-negative weight per point pair.
///
/// # Returns
///
/// The weighted RMSD between the two sets.
///
/// # Errors
///
/// * [`SuperposeError::DimensionMismatch`] when the inputs differ in length.
/// * [`SuperposeError::InvalidWeights`] when a weight is negative or no
///   weight is strictly positive.
pub fn weighted_rmsd(
    a: &[[f64; 3]],
    b: &[[f64; 3]],
    weights: &[f64],
) -> Result<f64, SuperposeError> {
    if a.len() != b.len() {
        return Err(SuperposeError::DimensionMismatch(a.len(), b.len()));
    }
    if a.len() != weights.len() {
        return Err(SuperposeError::DimensionMismatch(a.len(), weights.len()));
    }

    let mut acc = 0.0;
    let mut weight_sum = 0.0;
    for ((pa, pb), &weight) in a.iter().zip(b.iter()).zip(weights.iter()) {
        if weight < 0.0 {
            return Err(SuperposeError::InvalidWeights);
        }
        acc += weight * squared_distance(pa, pb);
        weight_sum += weight;
    }

    if weight_sum <= 0.0 {
        return Err(SuperposeError::InvalidWeights);
    }

    Ok((acc / weight_sum).sqrt())
}
