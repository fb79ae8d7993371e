use std::any::Any;
use std::error::Error;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::core::actions::generate_fractal::ports::row_task::RowTask;
use crate::core::data::image_matrix::PixelResult;

#[derive(Debug, Error)]
pub enum GenerateFractalError<E: Error + 'static> {
    #[error("row {row} failed: {source}")]
    Row {
        row: u32,
        #[source]
        source: E,
    },
    #[error("row {row} panicked: {message}")]
    RowPanicked { row: u32, message: String },
    #[error("worker for rows {}..{} panicked: {message}", .rows.start, .rows.end)]
    WorkerPanicked { rows: Range<u32>, message: String },
    #[error("could not build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Computes one row, turning both task errors and panics into a
/// [`GenerateFractalError`] that names the row.
pub(crate) fn compute_row_guarded<T: RowTask>(
    task: &T,
    y: u32,
) -> Result<Vec<PixelResult>, GenerateFractalError<T::Failure>> {
    match panic::catch_unwind(AssertUnwindSafe(|| task.compute_row(y))) {
        Ok(Ok(row)) => Ok(row),
        Ok(Err(source)) => Err(GenerateFractalError::Row { row: y, source }),
        Err(payload) => Err(GenerateFractalError::RowPanicked {
            row: y,
            message: panic_message(payload.as_ref()),
        }),
    }
}
