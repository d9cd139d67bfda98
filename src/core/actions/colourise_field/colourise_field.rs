use crate::core::actions::colourise_field::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Produces a full frame from cached counts alone. This is the recolour
/// path: it never evaluates a point and never maps a coordinate.
#[must_use]
pub fn colourise_field<M: ColourMap>(field: &IterationField, map: &M) -> PixelBuffer {
    let mut buffer: Vec<u8> = Vec::with_capacity(field.size().pixel_count() * 3);

    for &count in field.counts() {
        let Colour { r, g, b } = map.colour_of(count);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    PixelBuffer::from_data(field.size(), buffer)
        .expect("one colour per cached count fills the raster exactly")
}
