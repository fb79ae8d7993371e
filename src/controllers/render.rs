use std::path::Path;
use std::time::Duration;

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::image_matrix::ImageMatrix;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colour_map::LogPolynomialColourMap;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderConfig;

/// Computes one image and hands it to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    /// Returns the iteration matrix and the time the computation took.
    pub fn generate(
        &mut self,
        config: &RenderConfig,
    ) -> Result<(ImageMatrix, Duration), Box<dyn std::error::Error>> {
        let viewport = config.viewport()?;
        let cap = config.cap()?;
        let scheduler = config.scheduler();

        info!(
            width = viewport.width(),
            height = viewport.height(),
            max_iterations = cap.get(),
            mode = %config.mode,
            "rendering mandelbrot set"
        );

        let run = scheduler.run(&viewport, cap)?;
        let colour_map = LogPolynomialColourMap::new(cap);
        self.buffer = Some(generate_pixel_buffer(&run.matrix, &colour_map)?);

        Ok((run.matrix, run.elapsed))
    }

    /// Does nothing before the first successful [`Self::generate`].
    pub fn write(&self, filepath: &Path) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?;
            info!(path = %filepath.display(), "image written");
        }

        Ok(())
    }
}
