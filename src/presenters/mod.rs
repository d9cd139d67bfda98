//! Presentation adapters turning rendered frames into visible output.

pub mod pixels;
