use crate::core::actions::colourise_field::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::PaletteOffset;

/// Contrast of the colour bands: each escape iteration shifts every channel
/// by this many steps.
pub const RGB_SCALE: u8 = 2;

/// Colour policy for cached escape counts: points inside the set are flat
/// black, escaped points fade from white with the count, shifted per channel
/// by the palette offset.
///
/// Channel arithmetic wraps modulo 256 rather than clamping, so deep bands
/// cycle back through the palette instead of saturating.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OffsetPalette {
    offset: PaletteOffset,
}

impl OffsetPalette {
    #[must_use]
    pub fn new(offset: PaletteOffset) -> Self {
        Self { offset }
    }
}

impl ColourMap for OffsetPalette {
    fn colour_of(&self, count: u32) -> Colour {
        if count == 0 {
            return Colour::BLACK;
        }

        let banded = (count as u8).wrapping_mul(RGB_SCALE);

        Colour {
            r: 255u8.wrapping_sub(banded).wrapping_sub(self.offset.r),
            g: 255u8.wrapping_sub(banded).wrapping_sub(self.offset.g),
            b: 255u8.wrapping_sub(banded).wrapping_sub(self.offset.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_the_set_is_black() {
        let palette = OffsetPalette::new(PaletteOffset { r: 10, g: 20, b: 30 });

        assert_eq!(palette.colour_of(0), Colour::BLACK);
    }

    #[test]
    fn test_first_escape_band_without_offset() {
        let palette = OffsetPalette::new(PaletteOffset::default());

        assert_eq!(
            palette.colour_of(1),
            Colour {
                r: 253,
                g: 253,
                b: 253
            }
        );
    }

    #[test]
    fn test_offset_shifts_each_channel_independently() {
        let palette = OffsetPalette::new(PaletteOffset { r: 3, g: 13, b: 53 });

        assert_eq!(
            palette.colour_of(1),
            Colour {
                r: 250,
                g: 240,
                b: 200
            }
        );
    }

    #[test]
    fn test_channel_arithmetic_wraps_modulo_256() {
        // 255 - 2·1 - 255 = -2, which wraps to 254.
        let wrapped_by_offset = OffsetPalette::new(PaletteOffset { r: 255, g: 0, b: 0 });
        // 2·130 = 260 ≡ 4, so the channel is 251 rather than pinned at 0.
        let wrapped_by_count = OffsetPalette::new(PaletteOffset::default());

        assert_eq!(wrapped_by_offset.colour_of(1).r, 254);
        assert_eq!(wrapped_by_count.colour_of(130).r, 251);
    }

    #[test]
    fn test_deep_counts_wrap_through_the_byte_range() {
        // 300 truncates to 44, 2·44 = 88, 255 - 88 = 167.
        let palette = OffsetPalette::new(PaletteOffset::default());

        assert_eq!(palette.colour_of(300).r, 167);
    }
}
