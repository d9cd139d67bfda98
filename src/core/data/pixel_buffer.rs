use crate::core::data::raster_size::RasterSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    SizeMismatch {
        expected_bytes: usize,
        actual_bytes: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected_bytes,
                actual_bytes,
            } => {
                write!(
                    f,
                    "buffer size {} does not match raster size {}",
                    actual_bytes, expected_bytes
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// A full-raster frame of packed RGB bytes in row-major order, the currency
/// between the render pipeline and the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: RasterSize,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    pub fn from_data(size: RasterSize, buffer: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected_bytes = size.pixel_count() * 3;

        if expected_bytes != buffer.len() {
            return Err(PixelBufferError::SizeMismatch {
                expected_bytes,
                actual_bytes: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> RasterSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }
}
