use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteBounds {
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    },
    EmptySpan {
        real_span: f64,
        imag_span: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds {
                real_min,
                real_max,
                imag_min,
                imag_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite: real [{}, {}] imag [{}, {}]",
                    real_min, real_max, imag_min, imag_max
                )
            }
            Self::EmptySpan {
                real_span,
                imag_span,
            } => {
                write!(
                    f,
                    "viewport spans must be positive: {}x{}",
                    real_span, imag_span
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane currently mapped onto the raster.
///
/// Bounds are finite with `real_min < real_max` and `imag_min < imag_max`;
/// the constructor rejects anything else.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl Viewport {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, ViewportError> {
        if !(real_min.is_finite()
            && real_max.is_finite()
            && imag_min.is_finite()
            && imag_max.is_finite())
        {
            return Err(ViewportError::NonFiniteBounds {
                real_min,
                real_max,
                imag_min,
                imag_max,
            });
        }

        let real_span = real_max - real_min;
        let imag_span = imag_max - imag_min;

        if real_span <= 0.0 || imag_span <= 0.0 {
            return Err(ViewportError::EmptySpan {
                real_span,
                imag_span,
            });
        }

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    #[must_use]
    pub fn real_span(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn imag_span(&self) -> f64 {
        self.imag_max - self.imag_min
    }
}
