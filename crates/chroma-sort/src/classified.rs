//! Per-image classification record.

use crate::category::{classify_hue, ColorCategory};
use crate::color::{Hsv, Rgb};
use crate::distance::hue_distance;

/// Everything the sorters need to know about one image.
///
/// Built once per image per batch and never mutated afterwards; sorting
/// only reorders these records.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedImage {
    /// Position of the image in the submitted batch.
    pub index: usize,
    /// Caller-supplied name (usually the sanitized upload filename).
    pub name: String,
    /// Average non-black color.
    pub color: Rgb,
    pub hsv: Hsv,
    /// Hue in degrees, `0.0..360.0`.
    pub hue: f64,
    pub category: ColorCategory,
    /// Circular distance from `hue` to the category center, or 360 for
    /// `Undefined`.
    pub distance_to_center: f64,
}

/// An ordered batch of classified images.
pub type Batch = Vec<ClassifiedImage>;

impl ClassifiedImage {
    /// Classify an image from its dominant color.
    ///
    /// ```
    /// use chroma_sort::{ClassifiedImage, ColorCategory, Rgb};
    /// let img = ClassifiedImage::from_color(0, "leaf.png", Rgb::from_u8(0, 255, 0));
    /// assert_eq!(img.category, ColorCategory::Green);
    /// assert_eq!(img.hue, 120.0);
    /// assert_eq!(img.distance_to_center, 0.0);
    /// ```
    pub fn from_color(index: usize, name: impl Into<String>, color: Rgb) -> Self {
        let hsv = Hsv::from(color);
        let hue = hsv.hue_degrees();
        let (category, center) = classify_hue(hue);

        Self {
            index,
            name: name.into(),
            color,
            hsv,
            hue,
            category,
            distance_to_center: hue_distance(hue, center),
        }
    }

    /// Distance from this image's hue to an arbitrary target hue.
    pub fn distance_to(&self, target_hue: f64) -> f64 {
        hue_distance(self.hue, Some(target_hue))
    }
}
