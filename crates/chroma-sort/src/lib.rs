//! chroma-sort: dominant-color classification and spectrum sorting
//!
//! This library computes a representative color for each image in a batch,
//! places it in one of seven hue categories, and orders the batch either
//! along the color spectrum or by closeness to a chosen hue.
//!
//! # Quick Start
//!
//! [`BatchPipeline`] runs the whole thing on encoded image bytes:
//!
//! ```
//! use chroma_sort::{BatchPipeline, ImageInput, RenderOptions, SortStrategy};
//! # use std::io::Cursor;
//! # fn png(rgb: [u8; 3]) -> Vec<u8> {
//! #     let img = image::RgbImage::from_pixel(4, 4, image::Rgb(rgb));
//! #     let mut out = Vec::new();
//! #     img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png).unwrap();
//! #     out
//! # }
//!
//! let inputs = vec![
//!     ImageInput::new("sky.png", png([40, 90, 230])),
//!     ImageInput::new("brick.png", png([200, 40, 30])),
//! ];
//! let sorted = BatchPipeline::default()
//!     .run(&inputs, &SortStrategy::Spectrum, &RenderOptions::new(100).unwrap())
//!     .unwrap();
//!
//! assert_eq!(sorted.thumbnails[0].image.name, "brick.png");
//! assert_eq!(sorted.ids(), vec!["image_0.jpg", "image_1.jpg"]);
//! ```
//!
//! # Classification
//!
//! 1. [`ColorExtractor`] downsamples to 50x50, drops alpha, and averages
//!    every pixel that is not exactly (0,0,0). Black is assumed to be
//!    padding; an image that is *only* black is handled by
//!    [`BlackPixelPolicy`].
//! 2. The average [`Rgb`] is converted to [`Hsv`]; the hue in degrees is
//!    mapped by [`classify_hue`] to a [`ColorCategory`].
//! 3. [`hue_distance`] measures how far the hue sits from its category
//!    center, going the short way around the circle.
//!
//! # Sorting
//!
//! - [`sort_by_spectrum`]: Red, Orange, Yellow, Green, Cyan, Blue, Violet,
//!   nearest-to-center first inside each category. Undefined is dropped.
//! - [`sort_by_target_hue`]: nearest-first to one hue, truncated to N.
//!
//! Both sorts are stable.

pub mod category;
pub mod classified;
pub mod color;
pub mod distance;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod sort;


pub use category::{classify_hue, ColorCategory};
pub use classified::{Batch, ClassifiedImage};
pub use color::{Hsv, Rgb};
pub use distance::{hue_distance, MAX_HUE_DISTANCE};
pub use error::{ExtractError, ParamError, PipelineError};
pub use extract::{average_color, BlackPixelPolicy, ColorExtractor, ExtractOptions};
pub use pipeline::{
    render_thumbnail, thumbnail_id, BatchPipeline, FailurePolicy, ImageInput, PipelineOptions,
    RenderOptions, SkippedImage, SortedBatch, Thumbnail,
};
pub use sort::{sort_by_spectrum, sort_by_target_hue, SortStrategy};
