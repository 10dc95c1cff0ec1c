use std::cell::RefCell;

use super::*;
use crate::catalog::Catalog;
use crate::catalog::catalog_test::entry;
use crate::player::{PlaybackState, PlayerSettings};

/// Recording stand-in for a video element.
#[derive(Debug, Default)]
pub(crate) struct FakeMedia {
    pub(crate) source: RefCell<Option<String>>,
    pub(crate) loads: RefCell<u32>,
    pub(crate) paused: RefCell<bool>,
    pub(crate) position: RefCell<f64>,
    pub(crate) volume: RefCell<f64>,
    pub(crate) muted: RefCell<bool>,
    pub(crate) looping: RefCell<bool>,
    pub(crate) play_requests: RefCell<Vec<PlayTicket>>,
}

impl FakeMedia {
    pub(crate) fn take_play_requests(&self) -> Vec<PlayTicket> {
        self.play_requests.borrow_mut().drain(..).collect()
    }
}

impl MediaControl for FakeMedia {
    fn load(&self, url: &str) {
        *self.source.borrow_mut() = Some(url.to_owned());
        *self.loads.borrow_mut() += 1;
        *self.position.borrow_mut() = 0.0;
        *self.paused.borrow_mut() = true;
    }

    fn request_play(&self, ticket: PlayTicket) {
        self.play_requests.borrow_mut().push(ticket);
    }

    fn pause(&self) {
        *self.paused.borrow_mut() = true;
    }

    fn seek(&self, seconds: f64) {
        *self.position.borrow_mut() = seconds;
    }

    fn set_volume(&self, level: f64) {
        *self.volume.borrow_mut() = level;
    }

    fn set_muted(&self, muted: bool) {
        *self.muted.borrow_mut() = muted;
    }

    fn set_looping(&self, looping: bool) {
        *self.looping.borrow_mut() = looping;
    }
}

#[test]
fn play_outcome_is_started_only_for_started() {
    assert!(PlayOutcome::Started.is_started());
    assert!(!PlayOutcome::Blocked.is_started());
}

#[test]
fn apply_commands_executes_in_order() {
    let media = FakeMedia::default();
    apply_commands(
        &media,
        vec![
            PlayerCommand::Load { url: "/a.mp4".to_owned() },
            PlayerCommand::Seek { seconds: 3.0 },
            PlayerCommand::Load { url: "/b.mp4".to_owned() },
            PlayerCommand::SetVolume(0.25),
            PlayerCommand::SetMuted(true),
            PlayerCommand::SetLooping(true),
        ],
    );

    assert_eq!(media.source.borrow().as_deref(), Some("/b.mp4"));
    assert_eq!(*media.loads.borrow(), 2);
    // The second load resets the seek that preceded it.
    assert!(media.position.borrow().abs() < f64::EPSILON);
    assert!((*media.volume.borrow() - 0.25).abs() < f64::EPSILON);
    assert!(*media.muted.borrow());
    assert!(*media.looping.borrow());
}

#[test]
fn apply_commands_forwards_play_tickets() {
    let catalog = Catalog::new(vec![entry("a")]).unwrap();
    let mut state = PlaybackState::new(&catalog, PlayerSettings::default());
    let media = FakeMedia::default();

    apply_commands(&media, state.mount(&catalog));

    let requests = media.take_play_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].generation(), state.generation());
    assert!(media.take_play_requests().is_empty());
}

#[test]
fn apply_commands_accepts_trait_objects() {
    let media = FakeMedia::default();
    let dynamic: &dyn MediaControl = &media;
    apply_commands(dynamic, vec![PlayerCommand::Pause]);
    assert!(*media.paused.borrow());
}
