use crate::error::SuperposeError;

/// Compute the rotation matrix for a rotation of `angle` radians about `axis`.
///
/// The axis does not need to be normalized; it is scaled to unit length
/// internally.
///
/// # Arguments
///
/// * `axis` - The axis of rotation.
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
///
/// The 3x3 row-major rotation matrix.
///
/// # Errors
///
/// * [`SuperposeError::InvalidRotationAxis`] when the axis has zero magnitude.
///
/// Example:
///
/// ```
/// use superpose_3d::transforms::axis_angle_to_rotation_matrix;
///
/// let rotation =
///     axis_angle_to_rotation_matrix(&[0.0, 0.0, 1.0], std::f64::consts::PI).unwrap();
/// assert!((rotation[0][0] + 1.0).abs() < 1e-12);
/// ```
pub fn axis_angle_to_rotation_matrix(
    axis: &[f64; 3],
    angle: f64,
) -> Result<[[f64; 3]; 3], SuperposeError> {
    let magnitude = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if magnitude < 1e-10 {
        return Err(SuperposeError::InvalidRotationAxis);
    }
    let (x, y, z) = (axis[0] / magnitude, axis[1] / magnitude, axis[2] / magnitude);

    // Rodrigues: R = I + sin(angle) * K + (1 - cos(angle)) * K^2,
    // with K the skew-symmetric matrix of the unit axis
    let k = [[0.0, -z, y], [z, 0.0, -x], [-y, x, 0.0]];
    let (s, c) = angle.sin_cos();

    let mut rotation = [[0.0; 3]; 3];
    for (i, row) in rotation.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            let k2 = k[i][0] * k[0][j] + k[i][1] * k[1][j] + k[i][2] * k[2][j];
            *val = s * k[i][j] + (1.0 - c) * k2;
            if i == j {
                *val += 1.0;
            }
        }
    }

    Ok(rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axis_angle_quarter_turn_x() -> Result<(), SuperposeError> {
        let rotation =
            axis_angle_to_rotation_matrix(&[1.0, 0.0, 0.0], std::f64::consts::PI / 2.0)?;
        let expected = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
        for (row, row_expected) in rotation.iter().zip(expected.iter()) {
            for (val, val_expected) in row.iter().zip(row_expected.iter()) {
                assert_relative_eq!(val, val_expected, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_axis_angle_normalizes_axis() -> Result<(), SuperposeError> {
        let rotation_unit =
            axis_angle_to_rotation_matrix(&[0.0, 0.0, 1.0], 0.25)?;
        let rotation_scaled =
            axis_angle_to_rotation_matrix(&[0.0, 0.0, 10.0], 0.25)?;
        for (row_a, row_b) in rotation_unit.iter().zip(rotation_scaled.iter()) {
            for (a, b) in row_a.iter().zip(row_b.iter()) {
                assert_relative_eq!(a, b, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_axis_angle_is_orthogonal() -> Result<(), SuperposeError> {
        let rotation = axis_angle_to_rotation_matrix(&[0.3, -0.4, 0.85], 1.3)?;
        // R^T * R must be the identity
        for i in 0..3 {
            for j in 0..3 {
                let dot = (0..3).map(|k| rotation[k][i] * rotation[k][j]).sum::<f64>();
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(dot, expected, epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_axis_angle_rejects_zero_axis() {
        assert_eq!(
            axis_angle_to_rotation_matrix(&[0.0, 0.0, 0.0], 1.0).unwrap_err(),
            SuperposeError::InvalidRotationAxis
        );
    }
}
