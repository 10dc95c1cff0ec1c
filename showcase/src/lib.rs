//! Playback and presentation logic for the promotional site.
//!
//! This crate holds everything the hero banner and navbar decide, with no
//! dependency on a browser. The `client` crate owns the DOM: it feeds media
//! element probes and play outcomes in, and executes the [`player::PlayerCommand`]s
//! and [`supervisor::PlayAttempt`]s that come back out. Keeping the decisions
//! here lets the whole lifecycle run under native unit tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Video entries and the validated, ordered catalog |
//! | [`config`] | Site configuration parsed once from JSON |
//! | [`consts`] | Default timings (preview offset, scan period, retry delays) |
//! | [`media`] | Media control seam and the `Started`/`Blocked` play outcome |
//! | [`player`] | Primary player state machine |
//! | [`supervisor`] | Thumbnail autoplay supervisor and its cancellation token |
//! | [`navbar`] | Scroll shadow, address shortening, copy indicator |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod media;
pub mod navbar;
pub mod player;
pub mod supervisor;
