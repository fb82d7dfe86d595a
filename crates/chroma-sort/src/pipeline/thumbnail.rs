//! Fixed-size JPEG thumbnails.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageResult, RgbImage};

use super::options::RenderOptions;

/// Stable identifier for the thumbnail at position `position` of a sorted batch.
pub fn thumbnail_id(position: usize) -> String {
    format!("image_{position}.jpg")
}

/// Resize to a square thumbnail and encode it as JPEG.
///
/// Aspect ratio is not preserved. JPEG has no alpha channel, so images with
/// transparency are composited onto `options.background` first.
pub fn render_thumbnail(image: &DynamicImage, options: &RenderOptions) -> ImageResult<Vec<u8>> {
    let size = options.size();
    let resized = image.resize_exact(size, size, options.filter);
    let rgb = flatten(&resized, options.background);

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), options.jpeg_quality);
    rgb.write_with_encoder(encoder)?;
    Ok(bytes)
}

/// Drop alpha by blending each pixel over a solid background.
fn flatten(image: &DynamicImage, background: [u8; 3]) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = u32::from(a);
        let blend = |fg: u8, bg: u8| -> u8 {
            ((u32::from(fg) * alpha + u32::from(bg) * (255 - alpha) + 127) / 255) as u8
        };
        image::Rgb([
            blend(r, background[0]),
            blend(g, background[1]),
            blend(b, background[2]),
        ])
    })
}
