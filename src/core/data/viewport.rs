use serde::Serialize;
use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("complex region must have positive, finite size: {width}x{height}")]
    InvalidRegion { width: f64, height: f64 },
    #[error("pixel dimensions must be positive: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("scaling {height} rows by {factor} overflows")]
    DimensionsOverflow { height: u32, factor: u32 },
}

/// A rectangular region of the complex plane sampled on a `width` x `height`
/// pixel grid.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportError> {
        let region_width = xmax - xmin;
        let region_height = ymax - ymin;

        if !(region_width > 0.0 && region_width.is_finite())
            || !(region_height > 0.0 && region_height.is_finite())
        {
            return Err(ViewportError::InvalidRegion {
                width: region_width,
                height: region_height,
            });
        }

        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidDimensions { width, height });
        }

        Ok(Self {
            xmin,
            xmax,
            ymin,
            ymax,
            width,
            height,
        })
    }

    /// Same complex bounds and width, `factor` times as many rows. The pixel
    /// count (and so the work) grows linearly with `factor`.
    pub fn scale_height(&self, factor: u32) -> Result<Self, ViewportError> {
        let height = self
            .height
            .checked_mul(factor)
            .ok_or(ViewportError::DimensionsOverflow {
                height: self.height,
                factor,
            })?;

        Self::new(self.xmin, self.xmax, self.ymin, self.ymax, self.width, height)
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        Complex::new(self.xmin, self.ymin)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        Complex::new(self.xmax, self.ymax)
    }

    #[must_use]
    pub fn region_width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn region_height(&self) -> f64 {
        self.ymax - self.ymin
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
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
