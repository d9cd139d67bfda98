//! Application layer translating user gestures into field operations.

use crate::core::data::palette::PaletteOffset;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::fractal_field::FractalField;
use crate::core::fractals::mandelbrot::config::default_viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use log::warn;
use rand::Rng;

/// Each click shrinks the visible rectangle to half its width and height,
/// centered on the clicked point.
pub const ZOOM_FACTOR: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExplorerCommand {
    ResetView,
    RegeneratePalette,
    ZoomAt(Point),
}

/// Owns the field and the RNG behind palette regeneration. The RNG is a
/// type parameter so tests can drive the controller with a seeded one.
pub struct ExplorerController<R: Rng> {
    field: FractalField,
    rng: R,
}

impl<R: Rng> ExplorerController<R> {
    /// Starts a session with a randomly drawn palette, viewing the whole
    /// set.
    pub fn new(
        raster: RasterSize,
        mut rng: R,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        let palette = PaletteOffset::random(&mut rng);
        let field = FractalField::new(raster, default_viewport(), max_iterations, palette)?;

        Ok(Self { field, rng })
    }

    /// Renders the frame shown before any input arrives.
    pub fn initial_frame(&mut self) -> PixelBuffer {
        self.field.evaluate_full()
    }

    /// Applies a command and returns the frame to draw, or `None` when the
    /// command had no effect (a click that landed outside the raster).
    pub fn handle(&mut self, command: ExplorerCommand) -> Option<PixelBuffer> {
        match command {
            ExplorerCommand::ResetView => Some(self.field.reset_viewport()),
            ExplorerCommand::RegeneratePalette => {
                let palette = PaletteOffset::random(&mut self.rng);
                Some(self.field.recolour(palette))
            }
            ExplorerCommand::ZoomAt(pixel) => match self.field.zoom_at(pixel, ZOOM_FACTOR) {
                Ok(frame) => Some(frame),
                Err(err) => {
                    warn!("ignoring zoom: {err}");
                    None
                }
            },
        }
    }

    #[must_use]
    pub fn field(&self) -> &FractalField {
        &self.field
    }
}
