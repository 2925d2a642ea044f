use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Time-parameterised value of a single coordinate, `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Homotopy {
    Constant(f64),
    Linear { start: f64, end: f64 },
}

impl Homotopy {
    #[must_use]
    pub fn at(&self, t: f64) -> f64 {
        match *self {
            Self::Constant(value) => value,
            // exact at both ends: start*1 + end*0 and start*0 + end*1
            Self::Linear { start, end } => start * (1.0 - t) + end * t,
        }
    }
}

/// One homotopy per corner coordinate of a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportHomotopy {
    upper_left_real: Homotopy,
    upper_left_imag: Homotopy,
    lower_right_real: Homotopy,
    lower_right_imag: Homotopy,
}

impl ViewportHomotopy {
    #[must_use]
    pub fn constant(viewport: Viewport) -> Self {
        let upper_left = viewport.upper_left();
        let lower_right = viewport.lower_right();

        Self {
            upper_left_real: Homotopy::Constant(upper_left.real),
            upper_left_imag: Homotopy::Constant(upper_left.imag),
            lower_right_real: Homotopy::Constant(lower_right.real),
            lower_right_imag: Homotopy::Constant(lower_right.imag),
        }
    }

    #[must_use]
    pub fn linear(start: Viewport, end: Viewport) -> Self {
        let linear = |start: f64, end: f64| Homotopy::Linear { start, end };

        Self {
            upper_left_real: linear(start.upper_left().real, end.upper_left().real),
            upper_left_imag: linear(start.upper_left().imag, end.upper_left().imag),
            lower_right_real: linear(start.lower_right().real, end.lower_right().real),
            lower_right_imag: linear(start.lower_right().imag, end.lower_right().imag),
        }
    }

    #[must_use]
    pub fn at(&self, t: f64) -> Viewport {
        Viewport::from_corners(
            Complex::new(self.upper_left_real.at(t), self.upper_left_imag.at(t)),
            Complex::new(self.lower_right_real.at(t), self.lower_right_imag.at(t)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Viewport {
        Viewport::default()
    }

    fn target() -> Viewport {
        Viewport::new(
            Complex::new(-0.7436438870371587 - 0.1, 0.1318259042053119 + 0.0666),
            Complex::new(-0.7436438870371587 + 0.1, 0.1318259042053119 - 0.0666),
        )
        .unwrap()
    }

    #[test]
    fn constant_ignores_t() {
        let homotopy = Homotopy::Constant(0.3);

        assert_eq!(homotopy.at(0.0), 0.3);
        assert_eq!(homotopy.at(0.5), 0.3);
        assert_eq!(homotopy.at(1.0), 0.3);
    }

    #[test]
    fn linear_interpolates_midpoint() {
        let homotopy = Homotopy::Linear {
            start: -2.0,
            end: 1.0,
        };

        assert_eq!(homotopy.at(0.5), -0.5);
    }

    #[test]
    fn linear_endpoints_are_exact() {
        let samples = [0.1, -1.7436438870371587, 1e-300, 3.0e12, -0.0];

        for start in samples {
            for end in samples {
                let homotopy = Homotopy::Linear { start, end };
                assert_eq!(homotopy.at(0.0), start);
                assert_eq!(homotopy.at(1.0), end);
            }
        }
    }

    #[test]
    fn viewport_homotopy_endpoints_are_exact() {
        let homotopy = ViewportHomotopy::linear(start(), target());

        assert_eq!(homotopy.at(0.0), start());
        assert_eq!(homotopy.at(1.0), target());
    }

    #[test]
    fn constant_viewport_homotopy_returns_current_value() {
        let homotopy = ViewportHomotopy::constant(target());

        assert_eq!(homotopy.at(0.0), target());
        assert_eq!(homotopy.at(0.42), target());
        assert_eq!(homotopy.at(1.0), target());
    }

    #[test]
    fn corners_interpolate_independently() {
        let homotopy = ViewportHomotopy::linear(start(), target());
        let halfway = homotopy.at(0.5);

        assert_eq!(
            halfway.upper_left().real,
            (start().upper_left().real + target().upper_left().real) / 2.0
        );
        assert_eq!(
            halfway.lower_right().imag,
            (start().lower_right().imag + target().lower_right().imag) / 2.0
        );
    }
}
