/// One before/after pair produced by a batch run.
///
/// Both halves are data URIs ready for display; the sequence of results is
/// ordered by submission order of the input files.
#[derive(Clone, Debug)]
pub struct ProcessedImage {
    /// Original bytes, untransformed.
    pub original: String,
    /// Upscaled result, always PNG.
    pub upscaled: String,
    pub file_name: String,
}

/// Thread-safe per-file progress reporting for a batch run.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// Processing of one file is about to start.
    fn begin_file(&self, _index: usize, _total: usize, _name: &str) {}

    /// Processing of one file has finished.
    fn finish_file(&self, _index: usize, _total: usize) {}
}

/// No-op progress reporter.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
