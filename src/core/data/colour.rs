#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Fully saturated colour at half lightness, i.e. `hsl(hue, 100%, 50%)`.
    #[must_use]
    pub fn from_hue(hue_degrees: u32) -> Self {
        let hue = f64::from(hue_degrees % 360) / 60.0;
        let x = 1.0 - ((hue % 2.0) - 1.0).abs();

        let (r, g, b) = match hue as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round() as u8
}
