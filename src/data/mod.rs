//! Uploaded patient data: format detection, in-memory dataset, loading.

mod dataset;
mod format;
mod loader;

pub use dataset::Dataset;
pub use format::DataFormat;
pub use loader::load_dataset;
