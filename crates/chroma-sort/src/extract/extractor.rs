//! Average-color extractor.

use image::{DynamicImage, RgbImage};

use super::options::{BlackPixelPolicy, ExtractOptions};
use crate::color::Rgb;
use crate::error::ExtractError;

/// Computes the dominant (average, non-black) color of an image.
///
/// # Example
///
/// ```
/// use chroma_sort::{ColorExtractor, Rgb};
/// use image::{DynamicImage, RgbImage};
///
/// let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, image::Rgb([0, 0, 255])));
/// let color = ColorExtractor::default().extract(&img).unwrap();
/// assert_eq!(color, Rgb::new(0.0, 0.0, 255.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorExtractor {
    options: ExtractOptions,
}

impl ColorExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Downsample, drop alpha, and average the non-black pixels.
    pub fn extract(&self, image: &DynamicImage) -> Result<Rgb, ExtractError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(ExtractError::ZeroSized);
        }

        let rgb = image.to_rgb8();
        let size = self.options.sample_size;
        let sampled = image::imageops::resize(&rgb, size, size, self.options.filter);

        average_color(&sampled, self.options.black_pixels)
    }
}

/// Mean of the pixels of `pixels` that are not exactly (0,0,0).
///
/// When nothing is left after excluding black, `policy` decides between an
/// error and averaging every pixel.
pub fn average_color(pixels: &RgbImage, policy: BlackPixelPolicy) -> Result<Rgb, ExtractError> {
    let mut sum = [0u64; 3];
    let mut count = 0u64;

    for image::Rgb(p) in pixels.pixels() {
        if *p == [0, 0, 0] {
            continue;
        }
        sum[0] += u64::from(p[0]);
        sum[1] += u64::from(p[1]);
        sum[2] += u64::from(p[2]);
        count += 1;
    }

    if count == 0 {
        match policy {
            BlackPixelPolicy::Reject => return Err(ExtractError::EmptyImage),
            BlackPixelPolicy::IncludeAll => {
                if pixels.width() == 0 || pixels.height() == 0 {
                    return Err(ExtractError::ZeroSized);
                }
                // Only black pixels were present
                return Ok(Rgb::new(0.0, 0.0, 0.0));
            }
        }
    }

    let n = count as f64;
    Ok(Rgb::new(
        sum[0] as f64 / n,
        sum[1] as f64 / n,
        sum[2] as f64 / n,
    ))
}
