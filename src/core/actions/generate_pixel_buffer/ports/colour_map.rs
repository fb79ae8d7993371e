use std::error::Error;

use crate::core::data::colour::Colour;
use crate::core::data::image_matrix::PixelResult;

pub trait ColourMap {
    type Failure: Error + 'static;

    fn map(&self, value: PixelResult) -> Result<Colour, Self::Failure>;
}
