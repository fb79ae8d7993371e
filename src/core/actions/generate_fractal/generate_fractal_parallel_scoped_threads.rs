use std::num::NonZeroUsize;
use std::thread;

use crate::core::actions::generate_fractal::errors::{GenerateFractalError, panic_message};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_rows_serial;
use crate::core::actions::generate_fractal::ports::row_task::RowTask;
use crate::core::data::image_matrix::PixelResult;
use crate::core::util::calculate_row_bands::{calculate_bands_in_rows, row_band};

/// Splits the rows into one contiguous band per worker and computes each band
/// on its own scoped OS thread. Bands are joined in band order, so the output
/// is row ordered.
pub fn generate_fractal_parallel_scoped_threads<T>(
    task: &T,
    workers: NonZeroUsize,
) -> Result<Vec<Vec<PixelResult>>, GenerateFractalError<T::Failure>>
where
    T: RowTask + Sync,
{
    let rows = task.height();
    let total_bands = calculate_bands_in_rows(workers, rows);

    thread::scope(
        |scope| -> Result<Vec<Vec<PixelResult>>, GenerateFractalError<T::Failure>> {
            let handles: Vec<_> = (0..total_bands)
                .map(|band| {
                    let band_rows = row_band(band, total_bands, rows);
                    let worker_rows = band_rows.clone();
                    let handle = scope.spawn(move || generate_rows_serial(task, worker_rows));

                    (band_rows, handle)
                })
                .collect();

            let mut results = Vec::with_capacity(rows as usize);

            for (band_rows, handle) in handles {
                let band = handle
                    .join()
                    .map_err(|payload| GenerateFractalError::WorkerPanicked {
                        rows: band_rows,
                        message: panic_message(payload.as_ref()),
                    })??;
                results.extend(band);
            }

            Ok(results)
        },
    )
}
