pub mod generate;
pub mod pages;
pub mod preview;
pub mod sort;

pub use generate::{handle_generate, GenerateForm};
pub use pages::{handle_index, handle_upload, sort_upload, StoredUpload};
pub use preview::handle_preview;
pub use sort::{handle_sort, SkippedUpload, SortForm, SortResponse, SortedImage, __path_handle_sort};
