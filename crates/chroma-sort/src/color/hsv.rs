//! Hexcone HSV conversion.

use super::rgb::Rgb;

/// A color in HSV space.
///
/// `hue` is a fraction of a full turn in `0.0..1.0`; `saturation` and
/// `value` are in `0.0..=1.0`. Greys (all channels equal) have hue 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Hue as an angle in degrees, `0.0..360.0`.
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        self.hue * 360.0
    }
}

impl From<Rgb> for Hsv {
    /// Standard RGB to HSV transform on channels normalized by 255.
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r / 255.0;
        let g = rgb.g / 255.0;
        let b = rgb.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let value = max;

        if max == min {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                value,
            };
        }

        let range = max - min;
        let saturation = range / max;

        let rc = (max - r) / range;
        let gc = (max - g) / range;
        let bc = (max - b) / range;

        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        let hue = (sector / 6.0).rem_euclid(1.0);
        let hue = if hue >= 1.0 { 0.0 } else { hue };

        Self {
            hue,
            saturation,
            value,
        }
    }
}
