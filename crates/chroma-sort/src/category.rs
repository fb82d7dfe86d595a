//! Hue categories and their canonical center hues.
//!
//! The color wheel is split into seven named ranges (degrees, half-open):
//!
//! | Range | Category | Center |
//! |---|---|---|
//! | [0,15) and [345,360] | Red | 0 |
//! | [15,45) | Orange | 30 |
//! | [45,75) | Yellow | 60 |
//! | [75,150) | Green | 120 |
//! | [150,195) | Cyan | 180 |
//! | [195,255) | Blue | 225 |
//! | [255,345) | Violet | 300 |
//!
//! The seven ranges tile the circle, so [`ColorCategory::Undefined`] is only
//! produced for hues that are not finite numbers.

use std::fmt;
use std::str::FromStr;

use crate::error::ParamError;

/// A named hue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Violet,
    /// No usable hue. Sorts after everything else and is dropped from
    /// spectrum output.
    Undefined,
}

impl ColorCategory {
    /// Named categories in spectrum order.
    pub const SPECTRUM: [ColorCategory; 7] = [
        ColorCategory::Red,
        ColorCategory::Orange,
        ColorCategory::Yellow,
        ColorCategory::Green,
        ColorCategory::Cyan,
        ColorCategory::Blue,
        ColorCategory::Violet,
    ];

    /// Canonical center hue in degrees, `None` for `Undefined`.
    pub fn center_hue(self) -> Option<f64> {
        match self {
            ColorCategory::Red => Some(0.0),
            ColorCategory::Orange => Some(30.0),
            ColorCategory::Yellow => Some(60.0),
            ColorCategory::Green => Some(120.0),
            ColorCategory::Cyan => Some(180.0),
            ColorCategory::Blue => Some(225.0),
            ColorCategory::Violet => Some(300.0),
            ColorCategory::Undefined => None,
        }
    }

    /// Hue to rank against when this category is chosen as a sort target.
    ///
    /// `Undefined` has no center, so it targets Red (0°) instead.
    pub fn target_hue(self) -> f64 {
        self.center_hue().unwrap_or(0.0)
    }

    /// Resolve a user-supplied category name to a sort target.
    ///
    /// Missing or unrecognised names target Red. Use [`FromStr`] when an
    /// unknown name should be an error instead.
    ///
    /// ```
    /// use chroma_sort::ColorCategory;
    /// assert_eq!(ColorCategory::target_for(Some("blue")), ColorCategory::Blue);
    /// assert_eq!(ColorCategory::target_for(Some("mauve")), ColorCategory::Red);
    /// assert_eq!(ColorCategory::target_for(None), ColorCategory::Red);
    /// ```
    pub fn target_for(name: Option<&str>) -> ColorCategory {
        match name.map(str::parse::<ColorCategory>) {
            Some(Ok(category)) => category,
            Some(Err(e)) => {
                tracing::debug!(%e, "Falling back to red target hue");
                ColorCategory::Red
            }
            None => ColorCategory::Red,
        }
    }

    /// Lowercase identifier used in forms, URLs and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorCategory::Red => "red",
            ColorCategory::Orange => "orange",
            ColorCategory::Yellow => "yellow",
            ColorCategory::Green => "green",
            ColorCategory::Cyan => "cyan",
            ColorCategory::Blue => "blue",
            ColorCategory::Violet => "violet",
            ColorCategory::Undefined => "undefined",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            ColorCategory::Red => "Red",
            ColorCategory::Orange => "Orange",
            ColorCategory::Yellow => "Yellow",
            ColorCategory::Green => "Green",
            ColorCategory::Cyan => "Cyan",
            ColorCategory::Blue => "Blue",
            ColorCategory::Violet => "Violet",
            ColorCategory::Undefined => "Undefined",
        }
    }

    /// Position in [`ColorCategory::SPECTRUM`], `None` for `Undefined`.
    pub fn spectrum_index(self) -> Option<usize> {
        Self::SPECTRUM.iter().position(|&c| c == self)
    }

    /// Classify a hue angle. See [`classify_hue`].
    pub fn from_hue(hue_degrees: f64) -> Self {
        classify_hue(hue_degrees).0
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorCategory {
    type Err = ParamError;

    /// Parse a category name, case-insensitive, surrounding whitespace ignored.
    ///
    /// "purple" is accepted as an alias for violet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(ColorCategory::Red),
            "orange" => Ok(ColorCategory::Orange),
            "yellow" => Ok(ColorCategory::Yellow),
            "green" => Ok(ColorCategory::Green),
            "cyan" => Ok(ColorCategory::Cyan),
            "blue" => Ok(ColorCategory::Blue),
            "violet" | "purple" => Ok(ColorCategory::Violet),
            "undefined" => Ok(ColorCategory::Undefined),
            _ => Err(ParamError::UnknownCategory(s.to_string())),
        }
    }
}

/// Map a hue angle to its category and that category's center hue.
///
/// The input is normalized with `rem_euclid(360)` first, so negative and
/// over-range angles wrap around the circle.
///
/// ```
/// use chroma_sort::{classify_hue, ColorCategory};
/// assert_eq!(classify_hue(350.0), (ColorCategory::Red, Some(0.0)));
/// assert_eq!(classify_hue(-90.0), (ColorCategory::Violet, Some(300.0)));
/// ```
pub fn classify_hue(hue_degrees: f64) -> (ColorCategory, Option<f64>) {
    let h = hue_degrees.rem_euclid(360.0);

    let category = if (0.0..15.0).contains(&h) || (345.0..=360.0).contains(&h) {
        ColorCategory::Red
    } else if (15.0..45.0).contains(&h) {
        ColorCategory::Orange
    } else if (45.0..75.0).contains(&h) {
        ColorCategory::Yellow
    } else if (75.0..150.0).contains(&h) {
        ColorCategory::Green
    } else if (150.0..195.0).contains(&h) {
        ColorCategory::Cyan
    } else if (195.0..255.0).contains(&h) {
        ColorCategory::Blue
    } else if (255.0..345.0).contains(&h) {
        ColorCategory::Violet
    } else {
        ColorCategory::Undefined
    };

    (category, category.center_hue())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_boundaries() {
        let cases = [
            (0.0, ColorCategory::Red),
            (14.999, ColorCategory::Red),
            (15.0, ColorCategory::Orange),
            (44.999, ColorCategory::Orange),
            (45.0, ColorCategory::Yellow),
            (75.0, ColorCategory::Green),
            (149.999, ColorCategory::Green),
            (150.0, ColorCategory::Cyan),
            (195.0, ColorCategory::Blue),
            (254.999, ColorCategory::Blue),
            (255.0, ColorCategory::Violet),
            (344.999, ColorCategory::Violet),
            (345.0, ColorCategory::Red),
            (359.999, ColorCategory::Red),
        ];
        for (hue, expected) in cases {
            assert_eq!(ColorCategory::from_hue(hue), expected, "hue {hue}");
        }
    }

    #[test]
    fn test_wraps_out_of_range_input() {
        assert_eq!(ColorCategory::from_hue(360.0), ColorCategory::Red);
        assert_eq!(ColorCategory::from_hue(480.0), ColorCategory::Green);
        assert_eq!(ColorCategory::from_hue(-30.0), ColorCategory::Violet);
        assert_eq!(ColorCategory::from_hue(-720.0), ColorCategory::Red);
    }

    #[test]
    fn test_non_finite_is_undefined() {
        assert_eq!(classify_hue(f64::NAN), (ColorCategory::Undefined, None));
        assert_eq!(
            classify_hue(f64::INFINITY),
            (ColorCategory::Undefined, None)
        );
    }

    #[test]
    fn test_centers_classify_to_themselves() {
        for category in ColorCategory::SPECTRUM {
            let center = category.center_hue().unwrap();
            assert_eq!(ColorCategory::from_hue(center), category);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Red".parse::<ColorCategory>().unwrap(), ColorCategory::Red);
        assert_eq!(" CYAN ".parse::<ColorCategory>().unwrap(), ColorCategory::Cyan);
        assert_eq!(
            "purple".parse::<ColorCategory>().unwrap(),
            ColorCategory::Violet
        );
        assert!(matches!(
            "teal".parse::<ColorCategory>(),
            Err(ParamError::UnknownCategory(name)) if name == "teal"
        ));
    }

    #[test]
    fn test_as_str_round_trips_for_every_category() {
        for category in ColorCategory::SPECTRUM {
            assert_eq!(category.as_str().parse::<ColorCategory>().unwrap(), category);
        }
        assert_eq!(
            "undefined".parse::<ColorCategory>().unwrap(),
            ColorCategory::Undefined
        );
    }

    #[test]
    fn test_target_hue_defaults_to_red() {
        assert_eq!(ColorCategory::Undefined.target_hue(), 0.0);
        assert_eq!(ColorCategory::Violet.target_hue(), 300.0);
        assert_eq!(ColorCategory::target_for(Some("undefined")).target_hue(), 0.0);
        assert_eq!(ColorCategory::target_for(Some("")), ColorCategory::Red);
        assert_eq!(ColorCategory::target_for(Some("Yellow")).target_hue(), 60.0);
    }

    #[test]
    fn test_spectrum_index() {
        assert_eq!(ColorCategory::Red.spectrum_index(), Some(0));
        assert_eq!(ColorCategory::Violet.spectrum_index(), Some(6));
        assert_eq!(ColorCategory::Undefined.spectrum_index(), None);
    }
}
