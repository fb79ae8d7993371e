use std::error::Error;
use std::ops::Range;

use thiserror::Error;

use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::data::image_matrix::ImageMatrixError;

/// Failure of one scheduled computation. Never retried by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("worker failed on row {row}: {message}")]
    WorkerFailure { row: u32, message: String },
    #[error("worker for rows {}..{} failed: {message}", .rows.start, .rows.end)]
    BandFailure { rows: Range<u32>, message: String },
    #[error("could not start worker pool: {message}")]
    Pool { message: String },
    #[error("could not assemble image: {0}")]
    Assembly(#[from] ImageMatrixError),
}

impl<E: Error + 'static> From<GenerateFractalError<E>> for ScheduleError {
    fn from(err: GenerateFractalError<E>) -> Self {
        match err {
            GenerateFractalError::Row { row, source } => Self::WorkerFailure {
                row,
                message: source.to_string(),
            },
            GenerateFractalError::RowPanicked { row, message } => {
                Self::WorkerFailure { row, message }
            }
            GenerateFractalError::WorkerPanicked { rows, message } => {
                Self::BandFailure { rows, message }
            }
            GenerateFractalError::Pool(err) => Self::Pool {
                message: err.to_string(),
            },
        }
    }
}
