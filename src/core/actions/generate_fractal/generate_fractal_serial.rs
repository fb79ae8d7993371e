use std::ops::Range;

use crate::core::actions::generate_fractal::errors::{GenerateFractalError, compute_row_guarded};
use crate::core::actions::generate_fractal::ports::row_task::RowTask;
use crate::core::data::image_matrix::PixelResult;

/// Every row of `task`, top to bottom, on the calling thread.
pub fn generate_fractal_serial<T: RowTask>(
    task: &T,
) -> Result<Vec<Vec<PixelResult>>, GenerateFractalError<T::Failure>> {
    generate_rows_serial(task, 0..task.height())
}

pub(crate) fn generate_rows_serial<T: RowTask>(
    task: &T,
    rows: Range<u32>,
) -> Result<Vec<Vec<PixelResult>>, GenerateFractalError<T::Failure>> {
    rows.map(|y| compute_row_guarded(task, y)).collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_serial_rows_in_order() {
        let task = StubSuccessTask {
            width: 3,
            height: 4,
        };

        let rows = generate_fractal_serial(&task).unwrap();

        assert_eq!(
            rows,
            vec![
                vec![0, 1, 2],
                vec![1000, 1001, 1002],
                vec![2000, 2001, 2002],
                vec![3000, 3001, 3002],
            ]
        );
    }

    #[test]
    fn test_serial_subrange() {
        let task = StubSuccessTask {
            width: 1,
            height: 10,
        };

        let rows = generate_rows_serial(&task, 3..5).unwrap();

        assert_eq!(rows, vec![vec![3000], vec![4000]]);
    }

    #[test]
    fn test_serial_propagates_row_failure() {
        let task = StubFailureTask {
            height: 5,
            failing_row: 3,
        };

        let result = generate_fractal_serial(&task);

        assert!(matches!(
            result,
            Err(GenerateFractalError::Row { row: 3, .. })
        ));
    }

    #[test]
    fn test_serial_reports_panicking_row() {
        let task = StubPanickingTask {
            height: 5,
            panicking_row: 2,
        };

        match generate_fractal_serial(&task) {
            Err(GenerateFractalError::RowPanicked { row, message }) => {
                assert_eq!(row, 2);
                assert_eq!(message, "row 2 exploded");
            }
            other => panic!("expected RowPanicked, got {other:?}"),
        }
    }
}
