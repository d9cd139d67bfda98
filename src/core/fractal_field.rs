//! The composite owning the view state and the per-pixel iteration cache.

use crate::core::actions::colourise_field::colourise_field::colourise_field;
use crate::core::actions::evaluate_field::evaluate_field::evaluate_field;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::palette::PaletteOffset;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::palette_map::OffsetPalette;
use crate::core::util::plane_map::pixel_to_complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FractalFieldError {
    PixelOutsideRaster { pixel: Point, raster: RasterSize },
    ZeroZoomFactor,
    Viewport(ViewportError),
}

impl fmt::Display for FractalFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideRaster { pixel, raster } => {
                write!(
                    f,
                    "pixel ({}, {}) outside the {}x{} raster",
                    pixel.x,
                    pixel.y,
                    raster.width(),
                    raster.height()
                )
            }
            Self::ZeroZoomFactor => {
                write!(f, "zoom factor must be at least 1")
            }
            Self::Viewport(err) => {
                write!(f, "zoomed viewport is degenerate: {}", err)
            }
        }
    }
}

impl Error for FractalFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for FractalFieldError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// One instance drives the whole session: it owns the viewport, the palette
/// offset and the iteration cache, and every frame the window shows comes
/// out of one of its operations.
///
/// Full evaluation walks the raster once and overwrites the cache;
/// recolouring replays the cache through a fresh palette without evaluating
/// anything.
#[derive(Debug)]
pub struct FractalField {
    viewport: Viewport,
    default_viewport: Viewport,
    field: IterationField,
    palette: PaletteOffset,
    algorithm: MandelbrotAlgorithm,
}

impl FractalField {
    pub fn new(
        raster: RasterSize,
        default_viewport: Viewport,
        max_iterations: u32,
        palette: PaletteOffset,
    ) -> Result<Self, MandelbrotError> {
        Ok(Self {
            viewport: default_viewport,
            default_viewport,
            field: IterationField::new(raster),
            palette,
            algorithm: MandelbrotAlgorithm::new(max_iterations)?,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.field.size()
    }

    #[must_use]
    pub fn palette(&self) -> PaletteOffset {
        self.palette
    }

    #[must_use]
    pub fn count_at(&self, pixel: Point) -> u32 {
        self.field.count_at(pixel)
    }

    /// Re-evaluates every pixel under the current viewport and returns the
    /// coloured frame.
    pub fn evaluate_full(&mut self) -> PixelBuffer {
        evaluate_field(self.viewport, &self.algorithm, &mut self.field);
        self.colourise()
    }

    /// Swaps the palette offset and replays the cached counts through it.
    /// The iteration cache is read, never written.
    pub fn recolour(&mut self, palette: PaletteOffset) -> PixelBuffer {
        self.palette = palette;
        self.colourise()
    }

    /// Restores the default whole-set view and re-evaluates.
    pub fn reset_viewport(&mut self) -> PixelBuffer {
        self.viewport = self.default_viewport;
        self.evaluate_full()
    }

    /// Re-centers the view on the clicked pixel with both spans divided by
    /// `zoom_factor`, then re-evaluates.
    pub fn zoom_at(
        &mut self,
        pixel: Point,
        zoom_factor: u32,
    ) -> Result<PixelBuffer, FractalFieldError> {
        if zoom_factor == 0 {
            return Err(FractalFieldError::ZeroZoomFactor);
        }

        let raster = self.field.size();
        if !raster.contains(pixel) {
            return Err(FractalFieldError::PixelOutsideRaster { pixel, raster });
        }

        let center = pixel_to_complex(pixel, raster, self.viewport);
        let half_real = self.viewport.real_span() / (2.0 * f64::from(zoom_factor));
        let half_imag = self.viewport.imag_span() / (2.0 * f64::from(zoom_factor));

        // Fails once the span shrinks below double precision around the
        // center, the depth limit of this evaluator.
        self.viewport = Viewport::new(
            center.real - half_real,
            center.real + half_real,
            center.imag - half_imag,
            center.imag + half_imag,
        )?;

        Ok(self.evaluate_full())
    }

    fn colourise(&self) -> PixelBuffer {
        colourise_field(&self.field, &OffsetPalette::new(self.palette))
    }
}
