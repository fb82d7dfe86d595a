//! Test fixtures: in-memory images and multipart bodies.

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Solid colors with a known category
pub mod colors {
    pub const RED: [u8; 3] = [220, 20, 20];
    pub const ORANGE: [u8; 3] = [255, 128, 0];
    pub const YELLOW: [u8; 3] = [240, 230, 20];
    pub const GREEN: [u8; 3] = [20, 200, 40];
    pub const CYAN: [u8; 3] = [20, 200, 210];
    pub const BLUE: [u8; 3] = [30, 60, 220];
    pub const VIOLET: [u8; 3] = [160, 40, 200];
    pub const GREY: [u8; 3] = [128, 128, 128];
    pub const BLACK: [u8; 3] = [0, 0, 0];
}

/// Encode a solid-color image
pub fn solid(color: [u8; 3], format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_pixel(16, 12, Rgb(color));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

pub fn solid_png(color: [u8; 3]) -> Vec<u8> {
    solid(color, ImageFormat::Png)
}

pub fn solid_jpeg(color: [u8; 3]) -> Vec<u8> {
    solid(color, ImageFormat::Jpeg)
}

/// A PNG that is fully transparent except for one colored column
pub fn transparent_png(color: [u8; 3]) -> Vec<u8> {
    let img = RgbaImage::from_fn(8, 8, |x, _| {
        if x == 0 {
            Rgba([color[0], color[1], color[2], 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Builder for `multipart/form-data` request bodies
#[derive(Default)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

const BOUNDARY: &str = "huesort-test-boundary-7d3f";

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(Part {
            name: name.to_string(),
            filename: None,
            content_type: None,
            data: value.as_bytes().to_vec(),
        });
        self
    }

    /// Add a file under the `files[]` field
    pub fn file(self, filename: &str, data: Vec<u8>) -> Self {
        self.file_field("files[]", filename, data)
    }

    pub fn file_field(mut self, field: &str, filename: &str, data: Vec<u8>) -> Self {
        self.parts.push(Part {
            name: field.to_string(),
            filename: Some(filename.to_string()),
            content_type: Some("application/octet-stream".to_string()),
            data,
        });
        self
    }

    /// Spectrum sort with the given layout
    pub fn spectrum(self) -> Self {
        self.text("sorting_method", "spectrum")
    }

    /// Top-N sort toward `color`
    pub fn top_n(self, color: &str, n: usize) -> Self {
        self.text("sorting_method", "top_n")
            .text("dominant_color", color)
            .text("top_n", &n.to_string())
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn body(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for part in &self.parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match &part.filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        part.name, filename
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name)
                        .as_bytes(),
                ),
            }
            if let Some(content_type) = &part.content_type {
                body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(&part.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }
}
