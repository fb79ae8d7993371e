use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Linear map from pixel `(x, y)` to the complex plane.
///
/// Pixel 0 lands on the lower bound; pixel `width` would land on the upper
/// bound, so the last column stops one step short of it.
#[must_use]
pub fn pixel_to_complex_coords(pixel_x: u32, pixel_y: u32, viewport: &Viewport) -> Complex {
    debug_assert!(pixel_x < viewport.width() && pixel_y < viewport.height());

    let origin = viewport.top_left();
    let real =
        origin.real + f64::from(pixel_x) * viewport.region_width() / f64::from(viewport.width());
    let imag =
        origin.imag + f64::from(pixel_y) * viewport.region_height() / f64::from(viewport.height());

    Complex { real, imag }
}
