use crate::core::actions::evaluate_field::ports::point_evaluator::PointEvaluator;
use crate::core::data::iteration_field::IterationField;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_map::pixel_to_complex;

/// Re-evaluates every pixel of the raster under `viewport` and overwrites
/// the cached counts in place, in row-major order.
pub fn evaluate_field<E: PointEvaluator>(
    viewport: Viewport,
    evaluator: &E,
    field: &mut IterationField,
) {
    let raster = field.size();

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let pixel = Point { x, y };
            let c = pixel_to_complex(pixel, raster, viewport);
            field.set_count(pixel, evaluator.escape_iterations(c));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::raster_size::RasterSize;

    /// Reports the integer grid coordinates back as the count, so tests can
    /// see exactly which plane point each pixel was mapped to.
    #[derive(Debug)]
    struct StubGridEvaluator {}

    impl PointEvaluator for StubGridEvaluator {
        fn escape_iterations(&self, c: Complex) -> u32 {
            (c.real as u32) * 100 + c.imag as u32
        }
    }

    fn evaluated_grid_field() -> IterationField {
        let raster = RasterSize::new(4, 2).unwrap();
        // Viewport spanning [0, width] x [0, height] makes the mapped point
        // of pixel (x, y) exactly (x, y).
        let viewport = Viewport::new(0.0, 4.0, 0.0, 2.0).unwrap();
        let mut field = IterationField::new(raster);

        evaluate_field(viewport, &StubGridEvaluator {}, &mut field);

        field
    }

    #[test]
    fn test_covers_the_raster_in_row_major_order() {
        let field = evaluated_grid_field();

        assert_eq!(
            field.counts(),
            &[0, 100, 200, 300, 1, 101, 201, 301]
        );
    }

    #[test]
    fn test_overwrites_previous_counts() {
        let mut field = evaluated_grid_field();

        // Shifting the viewport to [1, 5] x [1, 3] maps pixel (x, y) to
        // (x + 1, y + 1).
        let viewport = Viewport::new(1.0, 5.0, 1.0, 3.0).unwrap();
        evaluate_field(viewport, &StubGridEvaluator {}, &mut field);

        assert_eq!(
            field.counts(),
            &[101, 201, 301, 401, 102, 202, 302, 402]
        );
    }
}
