//! Thumbnail autoplay supervisor.
//!
//! Every thumbnail card is a muted, looping preview video. Browsers may
//! refuse to start them, or pause them when they scroll away, so the banner
//! runs a recurring scan that restarts whatever is paused. Each restart is a
//! *chain*: one play attempt, then retries after a backoff delay while the
//! attempt is blocked, until it starts, the policy gives up, or the
//! supervisor is cancelled.
//!
//! The supervisor keeps one slot per thumbnail so a scan never launches a
//! second chain for a thumbnail whose chain is still running, and never
//! touches a thumbnail that is already playing.

#[cfg(test)]
#[path = "supervisor_test.rs"]
mod supervisor_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    PREVIEW_OFFSET_SECS, RETRY_BACKOFF_FACTOR, RETRY_BASE_DELAY_MS, RETRY_MAX_ATTEMPTS, RETRY_MAX_DELAY_MS,
};
use crate::media::PlayOutcome;

/// Shared cancellation flag for the scan loop and every retry chain.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Retry delays and chain length for blocked thumbnail plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_factor: u32,
    /// Attempts per chain, the first one included.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            base_delay_ms: RETRY_BASE_DELAY_MS,
            max_delay_ms: RETRY_MAX_DELAY_MS,
            backoff_factor: RETRY_BACKOFF_FACTOR,
            max_attempts: RETRY_MAX_ATTEMPTS,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after blocked attempt number `attempt` (1-based).
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let factor = u64::from(self.backoff_factor.max(1)).saturating_pow(exponent);
        let delay_ms = self
            .base_delay_ms
            .saturating_mul(factor)
            .min(self.max_delay_ms.max(self.base_delay_ms));
        Duration::from_millis(delay_ms)
    }
}

/// What the host observed about one thumbnail element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThumbnailProbe {
    pub paused: bool,
    /// False while the element is still at `HAVE_NOTHING`.
    pub has_media: bool,
}

/// One play attempt the host must carry out and report back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayAttempt {
    /// Index of the thumbnail, in catalog order.
    pub index: usize,
    /// 1-based position of this attempt within its chain.
    pub attempt: u32,
    /// Load the element before playing. Only set when it has no media yet.
    pub load_first: bool,
    /// Seek before playing. Set for the first attempt of a chain.
    pub seek_to: Option<f64>,
}

/// What to do after reporting a play outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// The thumbnail is playing; the chain is over.
    Done,
    /// Sleep for the delay, then ask [`ThumbnailSupervisor::retry_due`].
    RetryAfter(Duration),
    /// The chain ran out of attempts; the next scan may start a new one.
    GiveUp,
    /// The supervisor was cancelled.
    Stop,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Slot {
    #[default]
    Idle,
    Attempting(u32),
    Waiting(u32),
}

/// Bookkeeping for every thumbnail's retry chain.
#[derive(Debug)]
pub struct ThumbnailSupervisor {
    policy: RetryPolicy,
    preview_offset_secs: f64,
    slots: Vec<Slot>,
    cancel: CancelToken,
}

impl ThumbnailSupervisor {
    #[must_use]
    pub fn new(policy: RetryPolicy, cancel: CancelToken) -> Self {
        Self { policy, preview_offset_secs: PREVIEW_OFFSET_SECS, slots: Vec::new(), cancel }
    }

    #[must_use]
    pub fn with_preview_offset(mut self, seconds: f64) -> Self {
        self.preview_offset_secs = seconds;
        self
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Number of thumbnails with a chain currently running.
    #[cfg(test)]
    pub(crate) fn chains_in_flight(&self) -> usize {
        self.slots.iter().filter(|slot| **slot != Slot::Idle).count()
    }

    /// Inspect every thumbnail and start a chain for each paused one that
    /// has none running. `None` marks a thumbnail that is not mounted.
    pub fn scan(&mut self, probes: &[Option<ThumbnailProbe>]) -> Vec<PlayAttempt> {
        if self.is_cancelled() {
            return Vec::new();
        }
        self.slots.resize(probes.len(), Slot::Idle);

        let mut attempts = Vec::new();
        for (index, probe) in probes.iter().enumerate() {
            let Some(probe) = probe else {
                continue;
            };
            if !probe.paused || self.slots[index] != Slot::Idle {
                continue;
            }
            self.slots[index] = Slot::Attempting(1);
            attempts.push(PlayAttempt {
                index,
                attempt: 1,
                load_first: !probe.has_media,
                seek_to: Some(self.preview_offset_secs),
            });
        }
        attempts
    }

    /// Record the outcome of `attempt` and decide whether to retry.
    pub fn report(&mut self, attempt: &PlayAttempt, outcome: PlayOutcome) -> RetryDecision {
        if self.is_cancelled() {
            self.set_slot(attempt.index, Slot::Idle);
            return RetryDecision::Stop;
        }
        if self.slot(attempt.index) != Slot::Attempting(attempt.attempt) {
            // The slot moved on without this attempt; treat it as finished.
            return RetryDecision::Done;
        }

        match outcome {
            PlayOutcome::Started => {
                self.set_slot(attempt.index, Slot::Idle);
                RetryDecision::Done
            }
            PlayOutcome::Blocked if attempt.attempt >= self.policy.max_attempts => {
                self.set_slot(attempt.index, Slot::Idle);
                RetryDecision::GiveUp
            }
            PlayOutcome::Blocked => {
                self.set_slot(attempt.index, Slot::Waiting(attempt.attempt));
                RetryDecision::RetryAfter(self.policy.delay_after(attempt.attempt))
            }
        }
    }

    /// The retry delay for `previous` elapsed. Returns the next attempt, or
    /// `None` when the chain should end (cancelled, already playing, or
    /// superseded).
    pub fn retry_due(&mut self, previous: &PlayAttempt, probe: Option<ThumbnailProbe>) -> Option<PlayAttempt> {
        if self.slot(previous.index) != Slot::Waiting(previous.attempt) {
            return None;
        }
        if self.is_cancelled() {
            self.set_slot(previous.index, Slot::Idle);
            return None;
        }
        let Some(probe) = probe.filter(|probe| probe.paused) else {
            self.set_slot(previous.index, Slot::Idle);
            return None;
        };

        let attempt = previous.attempt + 1;
        self.set_slot(previous.index, Slot::Attempting(attempt));
        Some(PlayAttempt { index: previous.index, attempt, load_first: !probe.has_media, seek_to: None })
    }

    fn slot(&self, index: usize) -> Slot {
        self.slots.get(index).copied().unwrap_or_default()
    }

    fn set_slot(&mut self, index: usize, slot: Slot) {
        if let Some(existing) = self.slots.get_mut(index) {
            *existing = slot;
        }
    }
}
