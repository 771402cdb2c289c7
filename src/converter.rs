pub mod decoder;
pub mod render;

mod converterror;
pub use converterror::ConvertError as ConvertError;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use decoder::{ImageCrateDecoder, RgbaPixels, SpriteDecoder};

/// Width and height, in pixels, of every sprite
pub const SPRITE_SIZE: u32 = 16;

/// Pixels with an alpha value at or above this are 'on'
pub const ALPHA_THRESHOLD: u8 = 128;

/// One row of a sprite, the leftmost pixel is held in the most significant bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowMask(pub u16);

impl RowMask {
    pub fn is_on(&self, x: u32) -> bool {
        return self.0 & Self::column_bit(x) != 0;
    }

    pub fn set_on(&mut self, x: u32) {
        self.0 |= Self::column_bit(x);
    }

    fn column_bit(x: u32) -> u16 {
        assert!(x < SPRITE_SIZE, "column out of range");
        return 0x8000 >> x;
    }
}

impl fmt::Display for RowMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018b}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub file_name: String,
    pub rows: [RowMask; SPRITE_SIZE as usize],
}

/// Thresholds the alpha channel of a 16x16 pixel grid into row masks, top row first
pub fn masks_from_pixels<P: RgbaPixels>(pixels: &P) -> Result<[RowMask; SPRITE_SIZE as usize], ConvertError> {
    if pixels.width() != SPRITE_SIZE || pixels.height() != SPRITE_SIZE {
        return Err(ConvertError::SizeMismatch{
            width: pixels.width(),
            height: pixels.height(),
        });
    }

    let mut rows = [RowMask::default(); SPRITE_SIZE as usize];
    for (y, row) in (0..SPRITE_SIZE).zip(rows.iter_mut()) {
        for x in 0..SPRITE_SIZE {
            let [_, _, _, alpha] = pixels.rgba(x, y);
            if alpha >= ALPHA_THRESHOLD {
                row.set_on(x);
            }
        }
    }

    return Ok(rows);
}

fn read_image_file(path: &Path) -> Result<Vec<u8>, ConvertError> {
    let fp = File::open(path).map_err(ConvertError::decode)?;

    let mut bytes = Vec::new();
    BufReader::new(fp).read_to_end(&mut bytes).map_err(ConvertError::decode)?;

    return Ok(bytes);
}

/// Converts the image at `path` using the given decoder
pub fn convert_with<D: SpriteDecoder>(path: &Path, decoder: &D) -> Result<ConversionResult, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    // the file handle is dropped inside read_image_file, before decoding starts
    let bytes = read_image_file(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    let pixels = decoder.decode(&bytes)?;
    log::debug!("decoded image of {}x{}", pixels.width(), pixels.height());

    let rows = masks_from_pixels(&pixels)?;

    let file_name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    };

    return Ok(ConversionResult{file_name, rows});
}

/// Converts the image at `path`, decoding it with the `image` crate
pub fn convert(path: &Path) -> Result<ConversionResult, ConvertError> {
    return convert_with(path, &ImageCrateDecoder);
}
