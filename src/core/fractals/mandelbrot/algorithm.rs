use crate::core::actions::evaluate_field::ports::point_evaluator::PointEvaluator;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Escape-time evaluator for the Mandelbrot iteration z ← z² + c.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl PointEvaluator for MandelbrotAlgorithm {
    /// Iterates from z = 0 while |z| ≤ 2 (checked as |z|² ≤ 4) and the
    /// budget holds, returning the count at which the modulus first exceeded
    /// 2, or 0 once the budget is exhausted.
    ///
    /// 0 doubles as the "inside the set" marker. No point escapes at
    /// iteration 0 for this map, so the overload loses nothing.
    fn escape_iterations(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;
        let mut iterations = 0;

        while z.magnitude_squared() <= 4.0 && iterations < self.max_iterations {
            z = z * z + c;
            iterations += 1;
        }

        if iterations == self.max_iterations {
            0
        } else {
            iterations
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm() -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(700).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_max_iterations() {
        assert_eq!(
            MandelbrotAlgorithm::new(0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_origin_is_in_the_set() {
        assert_eq!(algorithm().escape_iterations(Complex::ZERO), 0);
    }

    #[test]
    fn test_point_on_the_real_boundary_is_in_the_set() {
        // c = -2 cycles through -2, 2, 2, ... with |z| pinned at 2.
        let c = Complex {
            real: -2.0,
            imag: 0.0,
        };

        assert_eq!(algorithm().escape_iterations(c), 0);
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        let c = Complex {
            real: 2.0,
            imag: 2.0,
        };

        assert_eq!(algorithm().escape_iterations(c), 1);
    }

    #[test]
    fn test_nearby_outside_point_escapes_after_a_few_iterations() {
        let c = Complex {
            real: 0.5,
            imag: 0.5,
        };
        let count = algorithm().escape_iterations(c);

        assert!(count > 1);
        assert!(count < 100);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let c = Complex {
            real: -0.7,
            imag: 0.3,
        };

        assert_eq!(
            algorithm().escape_iterations(c),
            algorithm().escape_iterations(c)
        );
    }
}
