//! Color types used by the classifier.
//!
//! - [`Rgb`]: averaged channel values in 0.0..=255.0, kept as floats
//! - [`Hsv`]: hexcone hue/saturation/value derived from an [`Rgb`]

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;
