mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::controllers::explorer::{ExplorerCommand, ExplorerController, ZOOM_FACTOR};
pub use crate::controllers::ports::frame_presenter::FramePresenterPort;
pub use crate::core::data::palette::PaletteOffset;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_size::RasterSize;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractal_field::FractalField;
pub use crate::core::fractals::mandelbrot::config::{MAX_ITERATIONS, default_viewport};

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
