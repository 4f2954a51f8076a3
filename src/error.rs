use image::ImageError;
use std::{error::Error, fmt, io};

/// An error occured while loading or analyzing a sprite sheet.
#[derive(Debug)]
pub enum SheetError {
    /// The analysis was configured with invalid values, e.g., a tile size
    /// of zero. String contains detailed message.
    InvalidInput(String),
    /// The image data could not be decoded.
    Decode(ImageError),
    /// An IO error occured while opening an image or writing a report.
    IoError(io::Error),
}

impl From<io::Error> for SheetError {
    fn from(err: io::Error) -> Self {
        SheetError::IoError(err)
    }
}

impl From<ImageError> for SheetError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(err) => SheetError::IoError(err),
            err => SheetError::Decode(err),
        }
    }
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SheetError::Decode(err) => write!(f, "Could not decode image: {}", err),
            SheetError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for SheetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SheetError::Decode(err) => Some(err),
            SheetError::IoError(err) => Some(err),
            SheetError::InvalidInput(_) => None,
        }
    }
}
