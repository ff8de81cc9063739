use std::time::Duration;

/// Simulated per-file backend latency during a batch run. Observable as a
/// minimum duration per processed file.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Gain applied to the R, G and B channels after resizing.
pub const ENHANCEMENT_GAIN: f32 = 1.1;

/// Smallest accepted magnification factor.
pub const MIN_SCALE: u8 = 1;

/// Largest accepted magnification factor.
pub const MAX_SCALE: u8 = 16;

/// Magnification factor a fresh session starts with.
pub const DEFAULT_SCALE: u8 = 2;

/// Bytes per RGBA pixel.
pub const RGBA_CHANNEL_COUNT: usize = 4;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;
