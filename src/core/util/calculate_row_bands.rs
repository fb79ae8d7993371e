use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of contiguous row bands to split `rows` into for `workers` threads.
/// Never more bands than rows, never zero bands for a non-empty image.
#[must_use]
pub fn calculate_bands_in_rows(workers: NonZeroUsize, rows: u32) -> u32 {
    let workers = u32::try_from(workers.get()).unwrap_or(u32::MAX);

    workers.min(rows)
}

/// Row range of band `band` out of `total_bands`. Leftover rows go to the
/// leading bands, so band heights differ by at most one.
#[must_use]
pub fn row_band(band: u32, total_bands: u32, rows: u32) -> Range<u32> {
    debug_assert!(band < total_bands);

    let base = rows / total_bands;
    let remainder = rows % total_bands;
    let start = band * base + band.min(remainder);
    let height = base + u32::from(band < remainder);

    start..start + height
}
