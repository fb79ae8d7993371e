use std::error::Error;

use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::image_matrix::ImageMatrix;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError<E: Error + 'static> {
    #[error("colour map error: {0}")]
    ColourMap(#[source] E),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Maps every iteration count of `matrix` to a colour, keeping row order.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    matrix: &ImageMatrix,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    let mut buffer: PixelBufferData = Vec::with_capacity(matrix.as_slice().len() * 3);

    for &value in matrix.as_slice() {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(
        matrix.width(),
        matrix.height(),
        buffer,
    )?)
}
