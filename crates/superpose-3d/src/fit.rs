use crate::error::SuperposeError;
use crate::linalg::transform_points3d;
use crate::ops::weighted_centroid;
use crate::utils;

/// Rigidly superimpose a point set onto a reference set.
///
/// Computes the weighted Kabsch fit: both sets are translated to their
/// weighted centroids, the optimal rotation is extracted from the SVD of the
/// cross-covariance matrix, and the moving set is returned rotated and
/// translated into the reference frame. Weights enter the centroid reduction
/// only, never the covariance sum.
///
/// The returned set minimizes the sum of squared distances to `reference`
/// over all rotations. No determinant correction is applied, so in
/// configurations whose best orthogonal map is a reflection the fit carries
/// an improper rotation; degenerate configurations (repeated or zero
/// singular values) inherit the sign ambiguity of the underlying SVD.
///
/// # Arguments
///
/// * `moving` - The point set to transform.
/// * `reference` - The target point set, in one-to-one correspondence
///   with `moving`.
/// * `weights` - A non-negative weight per point pair, with at least one
///   strictly positive entry.
///
/// # Returns
///
/// The transformed `moving` points, expressed in the reference frame.
///
/// # Errors
///
/// * [`SuperposeError::DimensionMismatch`] when the point sets or the weight
///   vector differ in length.
/// * [`SuperposeError::InvalidWeights`] when a weight is negative or no
///   weight is strictly positive.
///
/// Example:
///
/// ```
/// use superpose_3d::superimpose;
///
/// let moving = vec![[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [-1.0, 1.0, 0.0]];
/// let reference = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]];
/// let weights = vec![1.0, 1.0, 1.0];
///
/// let fitted = superimpose(&moving, &reference, &weights).unwrap();
/// for (point, point_ref) in fitted.iter().zip(reference.iter()) {
///     for (val, val_ref) in point.iter().zip(point_ref.iter()) {
///         assert!((val - val_ref).abs() < 1e-6);
///     }
/// }
/// ```
pub fn superimpose(
    moving: &[[f64; 3]],
    reference: &[[f64; 3]],
    weights: &[f64],
) -> Result<Vec<[f64; 3]>, SuperposeError> {
    if moving.len() != reference.len() {
        return Err(SuperposeError::DimensionMismatch(
            moving.len(),
            reference.len(),
        ));
    }
    if moving.len() != weights.len() {
        return Err(SuperposeError::DimensionMismatch(
            moving.len(),
            weights.len(),
        ));
    }

    // weighted centroids; rejects negative and all-zero weights
    let moving_mean = weighted_centroid(moving, weights)?;
    let reference_mean = weighted_centroid(reference, weights)?;

    // translate both sets to their centroids
    let moving_centered: Vec<[f64; 3]> = moving
        .iter()
        .map(|point| sub3(point, &moving_mean))
        .collect();
    let reference_centered: Vec<[f64; 3]> = reference
        .iter()
        .map(|point| sub3(point, &reference_mean))
        .collect();

    // cross-covariance C = m'^T * r', an unweighted sum of outer products
    let mut cov = faer::Mat::<f64>::zeros(3, 3);
    for (point_m, point_r) in moving_centered.iter().zip(reference_centered.iter()) {
        for i in 0..3 {
            for j in 0..3 {
                cov.write(i, j, cov.read(i, j) + point_m[i] * point_r[j]);
            }
        }
    }

    // C = U * S * V^T with singular values in descending order
    let svd = cov.svd();
    let rotation_mat = svd.v() * svd.u().transpose();

    let mut rotation = [[0.0; 3]; 3];
    for (i, row) in rotation.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = rotation_mat.read(i, j);
        }
    }

    log::debug!("fitted rotation determinant: {}", det33(&rotation));

    // rotate the centered moving set, then translate onto the reference centroid
    let mut fitted = vec![[0.0; 3]; moving.len()];
    transform_points3d(&moving_centered, &rotation, &reference_mean, &mut fitted)?;

    Ok(fitted)
}

/// Flat-buffer variant of [`superimpose`].
///
/// Accepts stride-3 coordinate buffers laid out as `[x0, y0, z0, x1, ...]`
/// and returns the fitted coordinates in the same layout.
///
/// # Errors
///
/// In addition to the [`superimpose`] errors:
///
/// * [`SuperposeError::InvalidPointSet`] when a coordinate buffer length is
///   not a multiple of 3.
pub fn superimpose_flat(
    moving: &[f64],
    reference: &[f64],
    weights: &[f64],
) -> Result<Vec<f64>, SuperposeError> {
    let moving_points = utils::buffer_as_points(moving)?;
    let reference_points = utils::buffer_as_points(reference)?;

    let fitted = superimpose(moving_points, reference_points, weights)?;
    Ok(fitted.into_iter().flatten().collect())
}

fn sub3(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn det33(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}
