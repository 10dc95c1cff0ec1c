//! Default timings and levels. Every value here can be overridden through
//! the `timing` block of the site configuration.

/// Seconds into a video where the preview frame is taken.
pub const PREVIEW_OFFSET_SECS: f64 = 0.5;

/// Volume applied to the primary player on mount.
pub const INITIAL_VOLUME: f64 = 0.5;

/// Period between thumbnail supervisor scans.
pub const SCAN_PERIOD_MS: u64 = 5_000;

/// Delay before the first retry of a blocked thumbnail play.
pub const RETRY_BASE_DELAY_MS: u64 = 1_000;

/// Ceiling for the retry delay after backoff.
pub const RETRY_MAX_DELAY_MS: u64 = 8_000;

/// Multiplier applied to the retry delay after each blocked attempt.
pub const RETRY_BACKOFF_FACTOR: u32 = 2;

/// Attempts in one retry chain before it gives up until the next scan.
pub const RETRY_MAX_ATTEMPTS: u32 = 5;

/// How long the "Copied!" indicator stays visible.
pub const COPIED_INDICATOR_MS: u64 = 2_000;

/// Volume above which the loud speaker icon is shown.
pub const HIGH_VOLUME_THRESHOLD: f64 = 0.5;
