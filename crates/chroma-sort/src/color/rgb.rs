//! Averaged RGB color.

use std::fmt;

/// An RGB color with channels in the range 0.0..=255.0.
///
/// Channels stay floating point because they are usually the mean of many
/// 8-bit samples, and the hue math downstream needs the fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
}

impl Rgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use chroma_sort::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }

    /// Round and clamp to 8-bit channels.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            self.r.round().clamp(0.0, 255.0) as u8,
            self.g.round().clamp(0.0, 255.0) as u8,
            self.b.round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Lowercase `#rrggbb` form of the rounded color.
    ///
    /// ```
    /// use chroma_sort::Rgb;
    /// assert_eq!(Rgb::new(255.0, 127.6, 0.2).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({:.1}, {:.1}, {:.1})", self.r, self.g, self.b)
    }
}
