use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tracing::{debug, info};

use crate::codec;
use crate::consts::PROCESSING_DELAY;
use crate::error::{Result, UpwiseError};
use crate::media::{ScaleFactor, SelectedFile};
use crate::transform;

use super::config::RunConfig;
use super::types::{ProcessedImage, ProgressReporter};

/// Sequential batch pipeline with a single-run guard.
///
/// `run` blocks the calling thread; embedders drive it from a worker thread
/// and observe [`is_in_progress`](Self::is_in_progress) or request
/// [`cancel`](Self::cancel) from the UI side.
pub struct BatchProcessor {
    in_progress: AtomicBool,
    cancel_requested: AtomicBool,
}

impl BatchProcessor {
    pub fn new() -> Self {
        Self {
            in_progress: AtomicBool::new(false),
            cancel_requested: AtomicBool::new(false),
        }
    }

    /// True from the first file's start until the last file finishes.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    /// Request that the current run stops once the in-flight file completes.
    pub fn cancel(&self) {
        self.cancel_requested.store(true, Ordering::SeqCst);
    }

    /// Process `files` strictly in input order.
    ///
    /// An empty selection returns immediately without claiming the
    /// in-progress flag. An overlapping call fails with
    /// [`UpwiseError::BatchInProgress`]. The first file that fails aborts
    /// the whole run: results collected so far are dropped and the error
    /// names the failing file. A cancelled run ends cleanly with the
    /// results completed up to that point.
    pub fn run(
        &self,
        files: &[SelectedFile],
        config: &RunConfig,
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<ProcessedImage>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        if self
            .in_progress
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(UpwiseError::BatchInProgress);
        }
        self.cancel_requested.store(false, Ordering::SeqCst);

        let outcome = self.run_inner(files, config, reporter);
        self.in_progress.store(false, Ordering::SeqCst);
        outcome
    }

    fn run_inner(
        &self,
        files: &[SelectedFile],
        config: &RunConfig,
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<ProcessedImage>> {
        let total = files.len();
        info!(
            total_files = total,
            scale = config.scale.get(),
            profile = %config.profile,
            "Starting batch run"
        );

        let mut results = Vec::with_capacity(total);
        for (index, file) in files.iter().enumerate() {
            if self.cancel_requested.load(Ordering::SeqCst) {
                info!(completed = results.len(), "Batch run cancelled");
                return Ok(results);
            }

            reporter.begin_file(index, total, &file.name);
            let processed =
                process_file(file, config.scale).map_err(|source| UpwiseError::Batch {
                    file_name: file.name.clone(),
                    source: Box::new(source),
                })?;
            results.push(processed);
            reporter.finish_file(index, total);
        }

        info!(completed = results.len(), "Batch run complete");
        Ok(results)
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn process_file(file: &SelectedFile, scale: ScaleFactor) -> Result<ProcessedImage> {
    let original = codec::encode_original(&file.bytes);

    // Stand-in for the latency of a real upscaling backend.
    thread::sleep(PROCESSING_DELAY);

    let decoded = codec::decode(&file.bytes)?;
    debug!(
        file = %file.name,
        width = decoded.width,
        height = decoded.height,
        "Decoded input"
    );

    let upscaled = transform::upscale(&decoded, scale)?;
    let upscaled_uri = codec::encode_png(&upscaled)?;

    Ok(ProcessedImage {
        original,
        upscaled: upscaled_uri,
        file_name: file.name.clone(),
    })
}
