use std::sync::Arc;

use crate::codec;
use crate::error::{Result, UpwiseError};
use crate::media::{Profile, ScaleFactor, SelectedFile};
use crate::pipeline::config::RunConfig;
use crate::pipeline::{BatchProcessor, ProcessedImage, ProgressReporter};

/// Mutable per-session state and its transition rules.
///
/// Owns the current selection and results, and shares its
/// [`BatchProcessor`] so an embedder can watch the in-progress flag or
/// request cancellation from another thread.
pub struct SessionState {
    selected_files: Vec<SelectedFile>,
    preview: Option<String>,
    output_folder: Option<String>,
    config: RunConfig,
    results: Vec<ProcessedImage>,
    processor: Arc<BatchProcessor>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            selected_files: Vec::new(),
            preview: None,
            output_folder: None,
            config: RunConfig::default(),
            results: Vec::new(),
            processor: Arc::new(BatchProcessor::new()),
        }
    }

    /// Replace the selection wholesale.
    ///
    /// The preview becomes the first file's data URI; previous results are
    /// dropped.
    pub fn select_files(&mut self, files: Vec<SelectedFile>) {
        self.preview = files.first().map(|f| codec::encode_original(&f.bytes));
        self.selected_files = files;
        self.results.clear();
    }

    /// Store a display label for the output folder. No filesystem access.
    pub fn set_output_folder(&mut self, label: impl Into<String>) {
        self.output_folder = Some(label.into());
    }

    /// Set the magnification factor, clamping into the supported range.
    pub fn set_scale(&mut self, scale: u8) {
        self.config.scale = ScaleFactor::clamped(scale);
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.config.profile = profile;
    }

    /// Run the batch pipeline over the current selection.
    ///
    /// A no-op when the selection is empty or a run is already in progress.
    /// On success the results are replaced wholesale; on failure prior
    /// results are left untouched and the error is returned. Blocking;
    /// drive it from a worker thread when embedding in a UI.
    pub fn run_upscale(&mut self, reporter: &dyn ProgressReporter) -> Result<()> {
        if self.selected_files.is_empty() || self.processor.is_in_progress() {
            return Ok(());
        }

        match self
            .processor
            .run(&self.selected_files, &self.config, reporter)
        {
            Ok(results) => {
                self.results = results;
                Ok(())
            }
            // Lost the claim to a run started elsewhere: same no-op as the
            // guard above.
            Err(UpwiseError::BatchInProgress) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Drop the selection, preview and results; scale, profile and the
    /// output-folder label survive. Any in-flight run is asked to stop.
    pub fn clear(&mut self) {
        self.processor.cancel();
        self.selected_files.clear();
        self.preview = None;
        self.results.clear();
    }

    pub fn selected_files(&self) -> &[SelectedFile] {
        &self.selected_files
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn output_folder(&self) -> Option<&str> {
        self.output_folder.as_deref()
    }

    pub fn scale(&self) -> ScaleFactor {
        self.config.scale
    }

    pub fn profile(&self) -> Profile {
        self.config.profile
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn results(&self) -> &[ProcessedImage] {
        &self.results
    }

    pub fn is_in_progress(&self) -> bool {
        self.processor.is_in_progress()
    }

    /// Shared processor handle for worker threads.
    pub fn processor(&self) -> Arc<BatchProcessor> {
        Arc::clone(&self.processor)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
