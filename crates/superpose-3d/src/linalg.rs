use crate::error::SuperposeError;
use crate::utils;

/// Apply a rigid transform `R * p + t` to a set of points.
///
/// # Arguments
///
/// * `src_points` - A set of points to be transformed.
/// * `rotation` - A 3x3 row-major rotation matrix.
/// * `translation` - A translation vector.
/// * `dst_points` - A pre-allocated slice to store the transformed points.
///
/// PRECONDITION: dst_points is pre-allocated with the same length as src_points.
///
/// Example:
///
/// ```
/// use superpose_3d::linalg::transform_points3d;
///
/// let src_points = vec![[1.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let translation = [0.0, 0.0, 1.0];
/// let mut dst_points = vec![[0.0; 3]; src_points.len()];
/// transform_points3d(&src_points, &rotation, &translation, &mut dst_points).unwrap();
/// assert_eq!(dst_points[0], [1.0, 0.0, 1.0]);
/// ```
pub fn transform_points3d(
    src_points: &[[f64; 3]],
    rotation: &[[f64; 3]; 3],
    translation: &[f64; 3],
    dst_points: &mut [[f64; 3]],
) -> Result<(), SuperposeError> {
    if src_points.len() != dst_points.len() {
        return Err(SuperposeError::DimensionMismatch(
            src_points.len(),
            dst_points.len(),
        ));
    }

    let rotation_mat = utils::mat33_to_faer_mat(rotation);
    let points_in_src = utils::points_to_faer_mat(src_points);
    let mut points_in_dst = utils::points_to_faer_mat_mut(dst_points);

    // points_in_dst = R * src^T, one column per transformed point
    faer::linalg::matmul::matmul(
        &mut points_in_dst,
        rotation_mat,
        points_in_src.transpose(),
        None,
        1.0,
        faer::Parallelism::None,
    );

    for mut col in points_in_dst.col_iter_mut() {
        col.write(0, col.read(0) + translation[0]);
        col.write(1, col.read(1) + translation[1]);
        col.write(2, col.read(2) + translation[2]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_points3d_identity() -> Result<(), SuperposeError> {
        let src_points = vec![[2.0, 2.0, 2.0], [3.0, 4.0, 5.0]];
        let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let translation = [0.0, 0.0, 0.0];
        let mut dst_points = vec![[0.0; 3]; src_points.len()];
        transform_points3d(&src_points, &rotation, &translation, &mut dst_points)?;

        assert_eq!(dst_points, src_points);
        Ok(())
    }

    #[test]
    fn test_transform_points3d_rotation_translation() -> Result<(), SuperposeError> {
        // quarter turn about z, then a shift along x
        let src_points = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let rotation = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let translation = [1.0, 0.0, 0.0];
        let mut dst_points = vec![[0.0; 3]; src_points.len()];
        transform_points3d(&src_points, &rotation, &translation, &mut dst_points)?;

        let expected = [[1.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        for (point, point_expected) in dst_points.iter().zip(expected.iter()) {
            for (val, val_expected) in point.iter().zip(point_expected.iter()) {
                assert_relative_eq!(val, val_expected, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_transform_points3d_rejects_length_mismatch() {
        let src_points = vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let mut dst_points = vec![[0.0; 3]; 1];
        assert_eq!(
            transform_points3d(&src_points, &rotation, &[0.0; 3], &mut dst_points).unwrap_err(),
            SuperposeError::DimensionMismatch(2, 1)
        );
    }
}
