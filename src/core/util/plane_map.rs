//! Linear mapping from raster coordinates onto the complex plane.

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;

/// Maps `coord` in `[0, extent]` linearly onto `[target_min, target_max]`.
///
/// `coord == 0.0` yields exactly `target_min` and `coord == extent` yields
/// `target_max`. Nothing is clamped; callers keep `coord` inside the raster
/// and `extent` positive.
#[must_use]
pub fn scale_coord(target_min: f64, target_max: f64, coord: f64, extent: f64) -> f64 {
    debug_assert!(extent > 0.0, "raster extent must be positive");

    target_min + (target_max - target_min) * coord / extent
}

/// Maps a raster pixel to the complex point it represents under `viewport`:
/// x runs over the real axis, y over the imaginary axis.
#[must_use]
pub fn pixel_to_complex(pixel: Point, raster: RasterSize, viewport: Viewport) -> Complex {
    Complex {
        real: scale_coord(
            viewport.real_min(),
            viewport.real_max(),
            f64::from(pixel.x),
            f64::from(raster.width()),
        ),
        imag: scale_coord(
            viewport.imag_min(),
            viewport.imag_max(),
            f64::from(pixel.y),
            f64::from(raster.height()),
        ),
    }
}
