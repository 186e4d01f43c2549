use crate::error::SuperposeError;

/// Borrow a slice of 3D points as an Nx3 faer matrix view.
pub(crate) fn points_to_faer_mat(points: &[[f64; 3]]) -> faer::MatRef<'_, f64> {
    // SAFETY: [[f64; 3]] is a contiguous run of len * 3 f64 values
    let points_slice =
        unsafe { std::slice::from_raw_parts(points.as_ptr() as *const f64, points.len() * 3) };
    faer::mat::from_row_major_slice(points_slice, points.len(), 3)
}

/// Borrow a mutable slice of 3D points as a 3xN faer matrix view, one column per point.
pub(crate) fn points_to_faer_mat_mut(points: &mut [[f64; 3]]) -> faer::MatMut<'_, f64> {
    let num_points = points.len();
    // SAFETY: [[f64; 3]] is a contiguous run of len * 3 f64 values
    let points_slice = unsafe {
        std::slice::from_raw_parts_mut(points.as_mut_ptr() as *mut f64, num_points * 3)
    };
    faer::mat::from_column_major_slice_mut(points_slice, 3, num_points)
}

/// Borrow a 3x3 row-major array as a faer matrix view.
pub(crate) fn mat33_to_faer_mat(mat: &[[f64; 3]; 3]) -> faer::MatRef<'_, f64> {
    // SAFETY: [[f64; 3]; 3] is a contiguous run of 9 f64 values
    let mat_slice = unsafe { std::slice::from_raw_parts(mat.as_ptr() as *const f64, 9) };
    faer::mat::from_row_major_slice(mat_slice, 3, 3)
}

/// Reinterpret a flat stride-3 coordinate buffer as a slice of 3D points.
///
/// Fails with [`SuperposeError::InvalidPointSet`] when the buffer length is
/// not a multiple of 3.
pub(crate) fn buffer_as_points(buffer: &[f64]) -> Result<&[[f64; 3]], SuperposeError> {
    if buffer.len() % 3 != 0 {
        return Err(SuperposeError::InvalidPointSet(buffer.len()));
    }
    // SAFETY: the length is a multiple of 3 and [f64; 3] has the same layout
    // and alignment as three consecutive f64 values
    Ok(unsafe {
        std::slice::from_raw_parts(buffer.as_ptr() as *const [f64; 3], buffer.len() / 3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_to_faer_mat() {
        let points = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let mat = points_to_faer_mat(&points);
        assert_eq!(mat.nrows(), 2);
        assert_eq!(mat.ncols(), 3);
        assert_eq!(mat.read(0, 0), 1.0);
        assert_eq!(mat.read(0, 2), 3.0);
        assert_eq!(mat.read(1, 1), 5.0);
    }

    #[test]
    fn test_mat33_to_faer_mat() {
        let mat = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let view = mat33_to_faer_mat(&mat);
        for (i, row) in mat.iter().enumerate() {
            for (j, val) in row.iter().enumerate() {
                assert_eq!(view.read(i, j), *val);
            }
        }
    }

    #[test]
    fn test_buffer_as_points() -> Result<(), SuperposeError> {
        let buffer = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let points = buffer_as_points(&buffer)?;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], [1.0, 2.0, 3.0]);
        assert_eq!(points[1], [4.0, 5.0, 6.0]);
        Ok(())
    }

    #[test]
    fn test_buffer_as_points_ragged() {
        let buffer = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            buffer_as_points(&buffer).unwrap_err(),
            SuperposeError::InvalidPointSet(4)
        );
    }
}
