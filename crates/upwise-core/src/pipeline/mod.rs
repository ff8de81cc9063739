pub mod config;
mod processor;
mod types;

pub use processor::BatchProcessor;
pub use types::{NoOpReporter, ProcessedImage, ProgressReporter};
