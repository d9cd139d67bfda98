use rand::Rng;

/// Per-channel bias applied uniformly when turning iteration counts into
/// colours. `u8` channels keep every offset in [0, 256) by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PaletteOffset {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PaletteOffset {
    /// Draws a fresh offset for all three channels. The caller owns the RNG;
    /// the core itself stays deterministic.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}
