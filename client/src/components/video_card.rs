//! Thumbnail card in the "What to Watch" list.
//!
//! The thumbnail is the entry's own video, kept playing muted and looping by
//! the thumbnail supervisor. Restricted entries render a "coming soon" cover
//! instead of the play affordance.

use leptos::html::Video;
use leptos::prelude::*;
use showcase::catalog::{EntryId, VideoEntry};

const PLAY_ICON_PATH: &str = "M8 5v14l11-7z";

#[component]
pub fn VideoCard(
    entry: &'static VideoEntry,
    #[prop(into)] active: Signal<bool>,
    thumbnail_ref: NodeRef<Video>,
    on_select: Callback<EntryId>,
) -> impl IntoView {
    let selectable = entry.is_selectable();
    let cover = if selectable {
        view! {
            <div class="play-icon-overlay">
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d=PLAY_ICON_PATH fill="currentColor"/>
                </svg>
            </div>
        }
        .into_any()
    } else {
        view! { <div class="coming-soon-overlay">"COMING SOON"</div> }.into_any()
    };

    view! {
        <div
            class="video-card"
            class:active-video=move || active.get()
            class:coming-soon-card=!selectable
            on:click=move |_| on_select.run(entry.id.clone())
        >
            <div class="thumbnail-container">
                <video
                    node_ref=thumbnail_ref
                    class="thumbnail-video"
                    src=entry.media_url.as_str()
                    muted=true
                    playsinline=true
                    preload="auto"
                ></video>
                <div class="video-views">{entry.view_count.as_str()}</div>
                {cover}
            </div>
            <div class="video-card-info">
                <h4>{entry.title.as_str()}</h4>
                <p>{entry.subtitle.as_str()}</p>
            </div>
        </div>
    }
}
