use std::error::Error;

use crate::core::data::image_matrix::PixelResult;

/// One image row is the unit of work handed to a worker.
///
/// Implementations must be pure with respect to `y`: computing the same row
/// twice, or on another thread, gives the same values.
pub trait RowTask {
    type Failure: Error + Send + 'static;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn compute_row(&self, y: u32) -> Result<Vec<PixelResult>, Self::Failure>;
}
