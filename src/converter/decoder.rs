use image::RgbaImage;

use crate::converter::ConvertError;

/// Read only access to a decoded grid of 8 bit RGBA pixels
pub trait RgbaPixels {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Returns the `[r, g, b, a]` channels of the pixel at column `x`, row `y`
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];
}

/// Turns the raw bytes of an image file into a pixel grid
pub trait SpriteDecoder {
    type Pixels: RgbaPixels;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Pixels, ConvertError>;
}

impl RgbaPixels for RgbaImage {
    fn width(&self) -> u32 {
        return self.dimensions().0;
    }

    fn height(&self) -> u32 {
        return self.dimensions().1;
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        return self.get_pixel(x, y).0;
    }
}

/// Decoder backed by the `image` crate, the format is guessed from the file contents
pub struct ImageCrateDecoder;

impl SpriteDecoder for ImageCrateDecoder {
    type Pixels = RgbaImage;

    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, ConvertError> {
        let img = image::load_from_memory(bytes).map_err(ConvertError::decode)?;
        return Ok(img.to_rgba8());
    }
}
