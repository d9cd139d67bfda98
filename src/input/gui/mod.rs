//! GUI input adapter: a winit window over the pixels framebuffer.

mod app;

pub use app::run_gui;
