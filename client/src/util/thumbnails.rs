//! Keeps the thumbnail previews playing.
//!
//! Drives a [`ThumbnailSupervisor`] from the browser. A scan runs as soon as
//! the task starts and then once per scan period; each attempt it returns is
//! carried out on the matching `<video>` element in its own task. Blocked
//! attempts sleep for the policy delay and go again until the supervisor
//! ends the chain. Cancelling the token stops the scan loop at its next
//! wake-up and turns every pending retry into a no-op.

#[cfg(test)]
#[path = "thumbnails_test.rs"]
mod thumbnails_test;

use leptos::html::Video;
use leptos::prelude::*;
use showcase::config::Timing;
use showcase::supervisor::CancelToken;
#[cfg(feature = "hydrate")]
use showcase::supervisor::{PlayAttempt, RetryDecision, ThumbnailProbe, ThumbnailSupervisor};
#[cfg(feature = "hydrate")]
use std::{cell::RefCell, rc::Rc};

/// Start supervising `thumbnails`, given in catalog order.
pub fn start(thumbnails: Vec<NodeRef<Video>>, timing: Timing, cancel: CancelToken) {
    #[cfg(feature = "hydrate")]
    {
        let supervisor = Rc::new(RefCell::new(
            ThumbnailSupervisor::new(timing.retry, cancel.clone()).with_preview_offset(timing.preview_offset_secs),
        ));
        let thumbnails = Rc::new(thumbnails);
        let period = timing.scan_period();
        leptos::task::spawn_local(async move {
            loop {
                let probes = thumbnails.iter().map(probe).collect::<Vec<_>>();
                let attempts = supervisor.borrow_mut().scan(&probes);
                for attempt in attempts {
                    leptos::task::spawn_local(run_chain(Rc::clone(&supervisor), Rc::clone(&thumbnails), attempt));
                }
                gloo_timers::future::sleep(period).await;
                if cancel.is_cancelled() {
                    log::debug!("thumbnail scan stopped");
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (thumbnails, timing, cancel);
    }
}

#[cfg(feature = "hydrate")]
fn probe(thumbnail: &NodeRef<Video>) -> Option<ThumbnailProbe> {
    thumbnail.get_untracked().map(|element| ThumbnailProbe {
        paused: element.paused(),
        has_media: element.ready_state() != web_sys::HtmlMediaElement::HAVE_NOTHING,
    })
}

#[cfg(feature = "hydrate")]
async fn run_chain(supervisor: Rc<RefCell<ThumbnailSupervisor>>, thumbnails: Rc<Vec<NodeRef<Video>>>, first: PlayAttempt) {
    let mut attempt = first;
    loop {
        let element = thumbnails.get(attempt.index).and_then(|thumbnail| thumbnail.get_untracked());
        let outcome = match element {
            Some(element) => play_thumbnail(&element, &attempt).await,
            None => showcase::media::PlayOutcome::Blocked,
        };

        let decision = supervisor.borrow_mut().report(&attempt, outcome);
        let delay = match decision {
            RetryDecision::RetryAfter(delay) => delay,
            RetryDecision::GiveUp => {
                log::debug!("thumbnail {} still blocked after {} attempts", attempt.index, attempt.attempt);
                return;
            }
            RetryDecision::Done | RetryDecision::Stop => return,
        };
        gloo_timers::future::sleep(delay).await;

        let current = thumbnails.get(attempt.index).and_then(probe);
        let Some(next) = supervisor.borrow_mut().retry_due(&attempt, current) else {
            return;
        };
        attempt = next;
    }
}

#[cfg(feature = "hydrate")]
async fn play_thumbnail(element: &web_sys::HtmlVideoElement, attempt: &PlayAttempt) -> showcase::media::PlayOutcome {
    if attempt.load_first {
        element.load();
    }
    if let Some(seconds) = attempt.seek_to {
        element.set_current_time(seconds);
    }
    element.set_muted(true);
    element.set_loop(true);
    super::media::attempt_play(element).await
}
