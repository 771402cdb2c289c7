use std::error::Error;
use std::path::PathBuf;

use crate::converter::SPRITE_SIZE;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("File not found at '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("An error occurred while processing the image: {0}")]
    Decode(#[source] Box<dyn Error + Send + Sync>),

    #[error("Image must be exactly {size}x{size} pixels. Image size is currently {width}x{height}.",
            size = SPRITE_SIZE)]
    SizeMismatch {
        width: u32,
        height: u32,
    },
}

impl ConvertError {
    pub fn decode<E>(err: E) -> Self
        where E: Into<Box<dyn Error + Send + Sync>>,
    {
        return ConvertError::Decode(err.into());
    }
}
