//! Circular hue distance.

/// Distance reported when there is no second hue to compare against.
pub const MAX_HUE_DISTANCE: f64 = 360.0;

/// Shortest angular distance between two hues on a 360° circle.
///
/// Returns [`MAX_HUE_DISTANCE`] when `h2` is `None` (an `Undefined`
/// category has no center), otherwise a value in `0.0..=180.0` for hues
/// within one turn of each other.
///
/// ```
/// use chroma_sort::hue_distance;
/// assert_eq!(hue_distance(350.0, Some(10.0)), 20.0);
/// assert_eq!(hue_distance(90.0, None), 360.0);
/// ```
pub fn hue_distance(h1: f64, h2: Option<f64>) -> f64 {
    match h2 {
        None => MAX_HUE_DISTANCE,
        Some(h2) => {
            let d = (h1 - h2).abs();
            d.min(360.0 - d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for h in 0..360 {
            let h = f64::from(h);
            assert_eq!(hue_distance(h, Some(h)), 0.0);
        }
    }

    #[test]
    fn test_symmetric_and_bounded() {
        for a in (0..360).step_by(7) {
            for b in (0..360).step_by(11) {
                let (a, b) = (f64::from(a), f64::from(b));
                let d = hue_distance(a, Some(b));
                assert_eq!(d, hue_distance(b, Some(a)));
                assert!((0.0..=180.0).contains(&d), "{a} vs {b} gave {d}");
            }
        }
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(hue_distance(5.0, Some(355.0)), 10.0);
        assert_eq!(hue_distance(0.0, Some(180.0)), 180.0);
        assert_eq!(hue_distance(350.0, Some(0.0)), 10.0);
    }

    #[test]
    fn test_missing_center_is_maximal() {
        assert_eq!(hue_distance(0.0, None), MAX_HUE_DISTANCE);
        assert_eq!(hue_distance(123.4, None), MAX_HUE_DISTANCE);
    }
}
