//! Seam between playback decisions and whatever plays the media.
//!
//! The browser implements [`MediaControl`] over `HtmlVideoElement`; tests
//! implement it over a recording fake. Play attempts are asynchronous on
//! every real platform, so [`MediaControl::request_play`] only starts one.
//! The implementation reports the [`PlayOutcome`] back to the state machine
//! together with the ticket it was given.

#[cfg(test)]
#[path = "media_test.rs"]
pub(crate) mod media_test;

use crate::player::{PlayTicket, PlayerCommand};

/// Result of a programmatic play attempt.
///
/// `Blocked` covers autoplay-policy rejections and any other refusal. It is
/// an expected outcome that callers answer with a fallback, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    Blocked,
}

impl PlayOutcome {
    #[must_use]
    pub fn is_started(self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Control surface of one media element.
pub trait MediaControl {
    /// Point the element at `url` and reload it.
    fn load(&self, url: &str);
    /// Begin an asynchronous play attempt and report its outcome with `ticket`.
    fn request_play(&self, ticket: PlayTicket);
    fn pause(&self);
    fn seek(&self, seconds: f64);
    fn set_volume(&self, level: f64);
    fn set_muted(&self, muted: bool);
    fn set_looping(&self, looping: bool);
}

/// Execute `commands` against `media` in order.
pub fn apply_commands<M>(media: &M, commands: impl IntoIterator<Item = PlayerCommand>)
where
    M: MediaControl + ?Sized,
{
    for command in commands {
        match command {
            PlayerCommand::Load { url } => media.load(&url),
            PlayerCommand::Play(ticket) => media.request_play(ticket),
            PlayerCommand::Pause => media.pause(),
            PlayerCommand::Seek { seconds } => media.seek(seconds),
            PlayerCommand::SetVolume(level) => media.set_volume(level),
            PlayerCommand::SetMuted(muted) => media.set_muted(muted),
            PlayerCommand::SetLooping(looping) => media.set_looping(looping),
        }
    }
}
