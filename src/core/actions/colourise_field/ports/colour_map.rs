use crate::core::data::colour::Colour;

/// Maps a cached escape iteration count to a display colour.
///
/// Total by design: every count has a colour, so recolouring a cached field
/// can never fail.
pub trait ColourMap {
    fn colour_of(&self, count: u32) -> Colour;
}
