pub mod actions;
pub mod data;
pub mod fractal_field;
pub mod fractals;
pub mod util;
