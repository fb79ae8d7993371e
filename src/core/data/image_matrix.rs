use thiserror::Error;

/// Escape-time iteration count of a single pixel.
pub type PixelResult = u32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageMatrixError {
    #[error("expected {expected} rows, got {actual}")]
    RowCountMismatch { expected: u32, actual: usize },
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: u32,
        actual: usize,
    },
}

/// Iteration counts of a whole image, stored row-major with row 0 first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMatrix {
    width: u32,
    height: u32,
    data: Vec<PixelResult>,
}

impl ImageMatrix {
    pub fn from_rows(
        width: u32,
        height: u32,
        rows: Vec<Vec<PixelResult>>,
    ) -> Result<Self, ImageMatrixError> {
        if rows.len() != height as usize {
            return Err(ImageMatrixError::RowCountMismatch {
                expected: height,
                actual: rows.len(),
            });
        }

        let mut data = Vec::with_capacity(width as usize * height as usize);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width as usize {
                return Err(ImageMatrixError::RowWidthMismatch {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[PixelResult]> {
        if y >= self.height {
            return None;
        }

        let start = y as usize * self.width as usize;
        Some(&self.data[start..start + self.width as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[PixelResult]> {
        self.data.chunks_exact(self.width as usize)
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<PixelResult> {
        if x >= self.width {
            return None;
        }

        self.row(y).map(|row| row[x as usize])
    }

    /// Row-major view of every pixel.
    #[must_use]
    pub fn as_slice(&self) -> &[PixelResult] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> ImageMatrix {
        ImageMatrix::from_rows(3, 2, vec![vec![0, 1, 2], vec![10, 11, 12]]).unwrap()
    }

    #[test]
    fn test_from_rows_keeps_row_order() {
        let matrix = sample_matrix();

        assert_eq!(matrix.width(), 3);
        assert_eq!(matrix.height(), 2);
        assert_eq!(matrix.row(0), Some(&[0, 1, 2][..]));
        assert_eq!(matrix.row(1), Some(&[10, 11, 12][..]));
        assert_eq!(matrix.as_slice(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let matrix = sample_matrix();
        let rows: Vec<&[u32]> = matrix.rows().collect();

        assert_eq!(rows, vec![&[0, 1, 2][..], &[10, 11, 12][..]]);
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let matrix = sample_matrix();

        assert_eq!(matrix.get(2, 1), Some(12));
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(0, 2), None);
        assert_eq!(matrix.row(2), None);
    }

    #[test]
    fn test_row_count_mismatch() {
        let result = ImageMatrix::from_rows(3, 3, vec![vec![0, 1, 2]]);

        assert_eq!(
            result,
            Err(ImageMatrixError::RowCountMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_row_width_mismatch() {
        let result = ImageMatrix::from_rows(3, 2, vec![vec![0, 1, 2], vec![0, 1]]);

        assert_eq!(
            result,
            Err(ImageMatrixError::RowWidthMismatch {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }
}
