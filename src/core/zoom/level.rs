use std::fmt;

/// Side length of each zoom step relative to the previous window.
pub const ZOOM_FACTOR: f64 = 4.0;

/// Discrete zoom depth in `[0, MAX]`. Level `k` spans `1 / 4^k` of the
/// default window along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MAX: Self = Self(10);

    #[must_use]
    pub fn new(level: u8) -> Option<Self> {
        (level <= Self::MAX.0).then_some(Self(level))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self == Self::MAX
    }

    /// The level after one more zoom step; wraps from `MAX` back to zero.
    #[must_use]
    pub fn next(self) -> Self {
        if self.is_max() { Self(0) } else { Self(self.0 + 1) }
    }

    /// Fraction of the default window's width and height visible at this level.
    #[must_use]
    pub fn scale(self) -> f64 {
        ZOOM_FACTOR.powi(-i32::from(self.get()))
    }
}

impl TryFrom<i64> for ZoomLevel {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(value)
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLevel;

    #[test]
    fn new_accepts_only_zero_to_ten() {
        assert_eq!(ZoomLevel::new(0).map(ZoomLevel::get), Some(0));
        assert_eq!(ZoomLevel::new(10).map(ZoomLevel::get), Some(10));
        assert_eq!(ZoomLevel::new(11), None);
    }

    #[test]
    fn sequence_wraps_after_ten() {
        let mut level = ZoomLevel::default();
        let mut seen = vec![level.get()];

        for _ in 0..11 {
            level = level.next();
            seen.push(level.get());
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0]);
    }

    #[test]
    fn scale_shrinks_by_four_per_level() {
        assert_eq!(ZoomLevel::default().scale(), 1.0);
        assert_eq!(ZoomLevel::new(1).unwrap().scale(), 0.25);
        assert_eq!(ZoomLevel::new(2).unwrap().scale(), 0.0625);
        assert_eq!(ZoomLevel::MAX.scale(), 1.0 / 1_048_576.0);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(ZoomLevel::try_from(3_i64), Ok(ZoomLevel::new(3).unwrap()));
        assert_eq!(ZoomLevel::try_from(-1_i64), Err(-1));
        assert_eq!(ZoomLevel::try_from(11_i64), Err(11));
        assert_eq!(ZoomLevel::try_from(300_i64), Err(300));
    }
}
