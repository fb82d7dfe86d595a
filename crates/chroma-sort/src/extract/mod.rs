//! Dominant color extraction.
//!
//! Images are downsampled to a small fixed grid before averaging. Pure
//! black pixels are treated as letterboxing and left out of the mean.

mod extractor;
mod options;

pub use extractor::{average_color, ColorExtractor};
pub use options::{BlackPixelPolicy, ExtractOptions, DEFAULT_SAMPLE_SIZE};
