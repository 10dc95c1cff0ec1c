//! [`MediaControl`] over the hero banner's `<video>` element.
//!
//! The playback state machine in `showcase` decides; this module carries the
//! resulting commands out on the element and feeds play outcomes back into
//! the state signal. Nothing here runs during a server render.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use leptos::html::Video;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use showcase::media::{MediaControl, PlayOutcome, apply_commands};
#[cfg(feature = "hydrate")]
use showcase::player::PlayTicket;
use showcase::player::{PlaybackState, PlayerCommand};

/// Run `commands` against the primary player if it is mounted.
pub fn dispatch(video_ref: NodeRef<Video>, playback: RwSignal<PlaybackState>, commands: Vec<PlayerCommand>) {
    #[cfg(feature = "hydrate")]
    {
        if commands.is_empty() {
            return;
        }
        let Some(element) = video_ref.get_untracked() else {
            log::debug!("primary player not mounted; dropped {} commands", commands.len());
            return;
        };
        apply_commands(&PrimaryVideo { element, playback }, commands);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (video_ref, playback, commands);
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct PrimaryVideo {
    element: web_sys::HtmlVideoElement,
    playback: RwSignal<PlaybackState>,
}

#[cfg(feature = "hydrate")]
impl MediaControl for PrimaryVideo {
    fn load(&self, url: &str) {
        self.element.set_src(url);
        self.element.load();
    }

    fn request_play(&self, ticket: PlayTicket) {
        let video = self.clone();
        leptos::task::spawn_local(async move {
            let outcome = attempt_play(&video.element).await;
            let follow_up = video
                .playback
                .try_update(|state| state.on_play_outcome(ticket, outcome))
                .unwrap_or_default();
            apply_commands(&video, follow_up);
        });
    }

    fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("pause failed: {e:?}");
        }
    }

    fn seek(&self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn set_volume(&self, level: f64) {
        self.element.set_volume(level);
    }

    fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn set_looping(&self, looping: bool) {
        self.element.set_loop(looping);
    }
}

/// Start playback on `element` and wait for the browser's verdict.
///
/// Autoplay-policy rejections, missing sources and decode failures all come
/// back as [`PlayOutcome::Blocked`].
#[cfg(feature = "hydrate")]
pub async fn attempt_play(element: &web_sys::HtmlMediaElement) -> PlayOutcome {
    let promise = match element.play() {
        Ok(promise) => promise,
        Err(e) => {
            log::debug!("play() threw: {e:?}");
            return PlayOutcome::Blocked;
        }
    };
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(_) => PlayOutcome::Started,
        Err(_) => PlayOutcome::Blocked,
    }
}
