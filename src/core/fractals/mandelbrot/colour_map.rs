use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::image_matrix::PixelResult;
use crate::core::data::iteration_cap::IterationCap;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax { iterations: u32, max_iterations: u32 },
}

/// Polynomial palette over log-compressed iteration counts.
///
/// Escape times cluster near zero, so `t = ln(count) / ln(cap)` spreads the
/// low counts across the palette. Points inside the set are black.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LogPolynomialColourMap {
    max_iterations: u32,
}

impl LogPolynomialColourMap {
    #[must_use]
    pub fn new(cap: IterationCap) -> Self {
        Self {
            max_iterations: cap.get(),
        }
    }

    fn log_scale(&self, iterations: u32) -> f64 {
        if iterations == 0 {
            return 0.0;
        }

        f64::from(iterations).ln() / f64::from(self.max_iterations).ln()
    }
}

impl ColourMap for LogPolynomialColourMap {
    type Failure = MandelbrotColourMapError;

    fn map(&self, iterations: PixelResult) -> Result<Colour, Self::Failure> {
        if iterations > self.max_iterations {
            return Err(MandelbrotColourMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        let t = self.log_scale(iterations);
        let u = 1.0 - t;

        Ok(Colour {
            r: (9.0 * u * t * t * t * 255.0) as u8,
            g: (15.0 * u * u * t * t * 255.0) as u8,
            b: (8.5 * u * u * u * t * 255.0) as u8,
        })
    }
}
