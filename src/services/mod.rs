pub mod batch_store;
pub mod intake;
pub mod page_service;
pub mod sort_service;

pub use batch_store::{BatchStore, InMemoryBatchStore, StoredBatch};
pub use intake::{read_upload, secure_filename, Upload};
pub use page_service::{jpeg_data_uri, PageService, TemplateError};
pub use sort_service::SortService;
