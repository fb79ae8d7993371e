use std::convert::Infallible;

use crate::core::actions::generate_fractal::ports::row_task::RowTask;
use crate::core::data::complex::Complex;
use crate::core::data::image_matrix::PixelResult;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// `|z| >= 2` means the orbit has escaped.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z <- z² + c` from `z = 0` and returns the number of steps taken
/// before `|z|` reached 2, or `cap` when it never did.
#[must_use]
pub fn escape_time(c: Complex, cap: IterationCap) -> PixelResult {
    let max_iterations = cap.get();
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z.square() + c;
        iteration += 1;
    }

    iteration
}

/// Escape times for every pixel of row `y`, left to right.
#[must_use]
pub fn compute_row(y: u32, viewport: &Viewport, cap: IterationCap) -> Vec<PixelResult> {
    (0..viewport.width())
        .map(|x| escape_time(pixel_to_complex_coords(x, y, viewport), cap))
        .collect()
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotRowTask {
    viewport: Viewport,
    cap: IterationCap,
}

impl MandelbrotRowTask {
    #[must_use]
    pub fn new(viewport: Viewport, cap: IterationCap) -> Self {
        Self { viewport, cap }
    }
}

impl RowTask for MandelbrotRowTask {
    type Failure = Infallible;

    fn width(&self) -> u32 {
        self.viewport.width()
    }

    fn height(&self) -> u32 {
        self.viewport.height()
    }

    fn compute_row(&self, y: u32) -> Result<Vec<PixelResult>, Self::Failure> {
        Ok(compute_row(y, &self.viewport, self.cap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: u32) -> IterationCap {
        IterationCap::new(n).unwrap()
    }

    #[test]
    fn test_origin_never_escapes() {
        assert_eq!(escape_time(Complex::ZERO, cap(100)), 100);
    }

    #[test]
    fn test_far_point_escapes_after_one_iteration() {
        for max in [1, 2, 100, 10_000] {
            assert_eq!(escape_time(Complex::new(2.0, 2.0), cap(max)), 1);
        }
    }

    #[test]
    fn test_cardioid_neck_is_inside() {
        assert_eq!(escape_time(Complex::new(-0.75, 0.0), cap(100)), 100);
    }

    #[test]
    fn test_period_two_bulb_is_inside() {
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), cap(500)), 500);
    }

    #[test]
    fn test_point_just_outside_escapes_before_cap() {
        // 0.26 lies just right of the cusp at 0.25.
        let count = escape_time(Complex::new(0.26, 0.0), cap(1000));

        assert!(count > 1 && count < 1000, "got {count}");
    }

    #[test]
    fn test_cap_of_one_bounds_every_point() {
        assert_eq!(escape_time(Complex::ZERO, cap(1)), 1);
        assert_eq!(escape_time(Complex::new(-1.5, 0.5), cap(1)), 1);
    }

    #[test]
    fn test_centre_of_classic_view_is_inside() {
        let viewport = Viewport::new(-2.5, 1.0, -1.0, 1.0, 800, 500).unwrap();
        let row = compute_row(250, &viewport, cap(100));

        assert_eq!(row.len(), 800);
        assert_eq!(row[400], 100);
    }

    #[test]
    fn test_row_values_stay_within_cap() {
        let viewport = Viewport::new(-2.5, 1.0, -1.0, 1.0, 64, 40).unwrap();

        for y in 0..viewport.height() {
            assert!(compute_row(y, &viewport, cap(50)).iter().all(|&n| n <= 50));
        }
    }

    #[test]
    fn test_row_task_matches_free_function() {
        let viewport = Viewport::new(-2.0, 1.0, -1.5, 1.5, 30, 20).unwrap();
        let task = MandelbrotRowTask::new(viewport, cap(64));

        assert_eq!(task.width(), 30);
        assert_eq!(task.height(), 20);
        assert_eq!(
            task.compute_row(7).unwrap(),
            compute_row(7, &viewport, cap(64))
        );
    }
}
