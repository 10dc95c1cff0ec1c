//! Primary player state machine.
//!
//! `PlaybackState` owns the hero banner's current entry and transport state.
//! Every transition returns the [`PlayerCommand`]s the media element must
//! execute; nothing here touches the element directly.
//!
//! ```text
//!   Idle ──mount/select──▶ Loading ──outcome──▶ PreviewFrame
//!                             ▲                    │ toggle
//!                  select ────┘                    ▼
//!                                      Paused ◀──toggle──▶ Playing
//! ```
//!
//! A reload always ends in `PreviewFrame` at the preview offset, whether the
//! preview play attempt started or was blocked. Play attempts carry a
//! [`PlayTicket`]; an outcome whose ticket is not the most recent one is
//! dropped, so a slow attempt for a superseded entry cannot mark the new
//! entry as playing.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use crate::catalog::{Catalog, EntryId, VideoEntry};
use crate::consts::{HIGH_VOLUME_THRESHOLD, INITIAL_VOLUME, PREVIEW_OFFSET_SECS};
use crate::media::PlayOutcome;

/// Lifecycle phase of the primary player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerPhase {
    /// Not yet mounted.
    #[default]
    Idle,
    /// Source (re)loaded, preview play attempt in flight.
    Loading,
    /// Holding the preview frame, muted and looping.
    PreviewFrame,
    Playing,
    Paused,
}

/// Why a play attempt was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayPurpose {
    /// Attempt made while reloading, to surface a frame.
    Preview,
    /// Attempt made because the user pressed play.
    Playback,
}

/// Identifies one play attempt so its outcome can be matched to the state
/// that requested it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTicket {
    generation: u64,
    attempt: u64,
    purpose: PlayPurpose,
}

impl PlayTicket {
    #[cfg(test)]
    pub(crate) fn generation(self) -> u64 {
        self.generation
    }
}

/// Instruction for the media element.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerCommand {
    Load { url: String },
    Play(PlayTicket),
    Pause,
    Seek { seconds: f64 },
    SetVolume(f64),
    SetMuted(bool),
    SetLooping(bool),
}

/// Rejected selection. State is left untouched in both cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no catalog entry with id {0}")]
    Unknown(EntryId),

    #[error("catalog entry {0} is restricted")]
    Restricted(EntryId),
}

/// Speaker icon tier shown on the mute button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    High,
    Low,
    Off,
}

/// Tunables for the primary player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSettings {
    pub preview_offset_secs: f64,
    pub initial_volume: f64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self { preview_offset_secs: PREVIEW_OFFSET_SECS, initial_volume: INITIAL_VOLUME }
    }
}

/// Current entry and transport state of the primary player.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    current: EntryId,
    phase: PlayerPhase,
    volume: f64,
    muted: bool,
    media_ready: bool,
    generation: u64,
    attempt: u64,
    settings: PlayerSettings,
}

impl PlaybackState {
    /// Fresh state bound to the catalog's default entry.
    #[must_use]
    pub fn new(catalog: &Catalog, settings: PlayerSettings) -> Self {
        Self {
            current: catalog.default_entry().id.clone(),
            phase: PlayerPhase::Idle,
            volume: normalize_volume(settings.initial_volume).unwrap_or(INITIAL_VOLUME),
            muted: false,
            media_ready: false,
            generation: 0,
            attempt: 0,
            settings,
        }
    }

    #[must_use]
    pub fn current(&self) -> &EntryId {
        &self.current
    }

    #[must_use]
    pub fn current_entry<'a>(&self, catalog: &'a Catalog) -> Option<&'a VideoEntry> {
        catalog.get(&self.current)
    }

    #[must_use]
    pub fn is_active(&self, id: &EntryId) -> bool {
        &self.current == id
    }

    #[must_use]
    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == PlayerPhase::Playing
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// The user's mute choice, independent of playback.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// What the element's `muted` flag should be: always on unless playing.
    #[must_use]
    pub fn effective_muted(&self) -> bool {
        !self.is_playing() || self.muted
    }

    #[must_use]
    pub fn loop_enabled(&self) -> bool {
        !self.is_playing()
    }

    #[must_use]
    pub fn media_ready(&self) -> bool {
        self.media_ready
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn volume_icon(&self) -> VolumeIcon {
        if self.muted {
            VolumeIcon::Muted
        } else if self.volume > HIGH_VOLUME_THRESHOLD {
            VolumeIcon::High
        } else if self.volume > 0.0 {
            VolumeIcon::Low
        } else {
            VolumeIcon::Off
        }
    }

    /// Load the current entry for the first time.
    ///
    /// If `catalog` no longer contains the current entry, the state falls
    /// back to the catalog's default entry.
    pub fn mount(&mut self, catalog: &Catalog) -> Vec<PlayerCommand> {
        let entry = match catalog.get(&self.current) {
            Some(entry) => entry,
            None => catalog.default_entry(),
        };
        self.current = entry.id.clone();
        self.reload(&entry.media_url)
    }

    /// Make `id` the current entry and reload the player from it.
    ///
    /// Re-selecting the current entry is accepted and reloads it.
    ///
    /// # Errors
    ///
    /// [`SelectError::Unknown`] when `id` is not in `catalog`, and
    /// [`SelectError::Restricted`] for a restricted entry. Neither changes state.
    pub fn select(&mut self, catalog: &Catalog, id: &EntryId) -> Result<Vec<PlayerCommand>, SelectError> {
        let entry = catalog
            .get(id)
            .ok_or_else(|| SelectError::Unknown(id.clone()))?;
        if !entry.is_selectable() {
            return Err(SelectError::Restricted(id.clone()));
        }
        self.current = entry.id.clone();
        Ok(self.reload(&entry.media_url))
    }

    /// Feed back the outcome of a play attempt started from a command.
    ///
    /// Returns no commands when the ticket has been superseded.
    pub fn on_play_outcome(&mut self, ticket: PlayTicket, outcome: PlayOutcome) -> Vec<PlayerCommand> {
        if ticket.generation != self.generation || ticket.attempt != self.attempt {
            return Vec::new();
        }

        match ticket.purpose {
            PlayPurpose::Preview => {
                if self.phase != PlayerPhase::Loading {
                    return Vec::new();
                }
                self.phase = PlayerPhase::PreviewFrame;
                let mut commands = Vec::with_capacity(2);
                if outcome.is_started() {
                    commands.push(PlayerCommand::Pause);
                }
                commands.push(PlayerCommand::Seek { seconds: self.settings.preview_offset_secs });
                commands
            }
            PlayPurpose::Playback => match outcome {
                PlayOutcome::Started => Vec::new(),
                PlayOutcome::Blocked => {
                    if self.phase != PlayerPhase::Playing {
                        return Vec::new();
                    }
                    self.phase = PlayerPhase::Paused;
                    Self::idle_flags()
                }
            },
        }
    }

    /// Pause when playing, otherwise start playing.
    pub fn toggle_play(&mut self) -> Vec<PlayerCommand> {
        if self.is_playing() {
            self.phase = PlayerPhase::Paused;
            let mut commands = vec![PlayerCommand::Pause];
            commands.extend(Self::idle_flags());
            commands
        } else {
            self.phase = PlayerPhase::Playing;
            let ticket = self.next_ticket(PlayPurpose::Playback);
            vec![
                PlayerCommand::SetLooping(false),
                PlayerCommand::SetMuted(self.muted),
                PlayerCommand::Play(ticket),
            ]
        }
    }

    /// Apply a new output level. Zero mutes; any positive level unmutes.
    ///
    /// Non-finite input is ignored.
    pub fn set_volume(&mut self, level: f64) -> Vec<PlayerCommand> {
        let Some(level) = normalize_volume(level) else {
            return Vec::new();
        };
        self.volume = level;
        if level <= 0.0 {
            self.muted = true;
        } else if self.muted {
            self.muted = false;
        }
        vec![PlayerCommand::SetVolume(level), PlayerCommand::SetMuted(self.effective_muted())]
    }

    pub fn toggle_mute(&mut self) -> Vec<PlayerCommand> {
        self.muted = !self.muted;
        vec![PlayerCommand::SetMuted(self.effective_muted())]
    }

    /// The element reported `loadeddata` for the current source.
    pub fn on_media_loaded(&mut self) {
        self.media_ready = true;
    }

    fn reload(&mut self, url: &str) -> Vec<PlayerCommand> {
        self.generation += 1;
        self.phase = PlayerPhase::Loading;
        self.media_ready = false;
        let ticket = self.next_ticket(PlayPurpose::Preview);
        vec![
            PlayerCommand::Load { url: url.to_owned() },
            PlayerCommand::SetVolume(self.volume),
            PlayerCommand::SetMuted(true),
            PlayerCommand::SetLooping(true),
            PlayerCommand::Play(ticket),
        ]
    }

    fn next_ticket(&mut self, purpose: PlayPurpose) -> PlayTicket {
        self.attempt += 1;
        PlayTicket { generation: self.generation, attempt: self.attempt, purpose }
    }

    fn idle_flags() -> Vec<PlayerCommand> {
        vec![PlayerCommand::SetLooping(true), PlayerCommand::SetMuted(true)]
    }
}

fn normalize_volume(level: f64) -> Option<f64> {
    if level.is_finite() {
        Some(level.clamp(0.0, 1.0))
    } else {
        None
    }
}
