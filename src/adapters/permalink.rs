//! Query-string form of a session's resting view.
//!
//! `real=<decimal>&imag=<decimal>&zoom=<integer>`, decimals printed with
//! twenty fractional digits.

use crate::core::data::complex::Complex;
use crate::core::zoom::level::ZoomLevel;
use crate::core::zoom::restore::RestoreParams;
use std::fmt;

const FRACTION_DIGITS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Permalink {
    pub center: Complex,
    pub zoom_level: ZoomLevel,
}

impl Permalink {
    #[must_use]
    pub fn new(center: Complex, zoom_level: ZoomLevel) -> Self {
        Self { center, zoom_level }
    }

    /// Reads `real`, `imag` and `zoom` from a query string. A leading `?` and
    /// unknown keys are ignored; a missing, unparsable, non-finite or
    /// out-of-range value yields `None`.
    #[must_use]
    pub fn parse(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut real = None;
        let mut imag = None;
        let mut zoom = None;

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=')?;

            match key {
                "real" => real = Some(parse_coordinate(value)?),
                "imag" => imag = Some(parse_coordinate(value)?),
                "zoom" => zoom = Some(ZoomLevel::try_from(value.trim().parse::<i64>().ok()?).ok()?),
                _ => {}
            }
        }

        Some(Self {
            center: Complex::new(real?, imag?),
            zoom_level: zoom?,
        })
    }

    #[must_use]
    pub fn to_restore_params(self) -> RestoreParams {
        RestoreParams {
            center: self.center,
            zoom_level: self.zoom_level,
        }
    }
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "real={:.prec$}&imag={:.prec$}&zoom={}",
            self.center.real,
            self.center.imag,
            self.zoom_level,
            prec = FRACTION_DIGITS
        )
    }
}
