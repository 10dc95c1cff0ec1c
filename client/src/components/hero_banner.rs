//! Hero banner: the primary player bound to the current catalog entry, its
//! transport controls, and the thumbnail list used to switch entries.
//!
//! DESIGN
//! ======
//! All decisions go through `PlaybackState`; handlers update the signal,
//! take the commands it returns and hand them to `util::media::dispatch`.
//! Play outcomes arrive later and are fed back the same way, carrying the
//! ticket that lets the state ignore outcomes from superseded loads.

#[cfg(test)]
#[path = "hero_banner_test.rs"]
mod hero_banner_test;

use leptos::html::Video;
use leptos::prelude::*;
use showcase::catalog::EntryId;
use showcase::config::SiteConfig;
use showcase::player::PlaybackState;
use showcase::supervisor::CancelToken;

use crate::components::{video_card::VideoCard, volume_control::VolumeControl};
use crate::util::{media::dispatch, thumbnails, viewport};

#[component]
pub fn HeroBanner(site: &'static SiteConfig) -> impl IntoView {
    let catalog = &site.catalog;
    let playback = RwSignal::new(PlaybackState::new(catalog, site.timing.player_settings()));
    let video_ref = NodeRef::<Video>::new();
    let thumbnail_refs = catalog
        .entries()
        .iter()
        .map(|_| NodeRef::<Video>::new())
        .collect::<Vec<_>>();
    let cancel = CancelToken::new();

    // First load of the default entry once the element exists.
    #[cfg(feature = "hydrate")]
    {
        let mounted = StoredValue::new(false);
        Effect::new(move || {
            if video_ref.get().is_none() || mounted.get_value() {
                return;
            }
            mounted.set_value(true);
            let commands = playback.try_update(|state| state.mount(catalog)).unwrap_or_default();
            dispatch(video_ref, playback, commands);
        });
    }

    thumbnails::start(thumbnail_refs.clone(), site.timing, cancel.clone());
    on_cleanup(move || cancel.cancel());

    let on_select = Callback::new(move |id: EntryId| {
        match playback.try_update(|state| state.select(catalog, &id)) {
            Some(Ok(commands)) => {
                dispatch(video_ref, playback, commands);
                viewport::scroll_to_top();
            }
            Some(Err(e)) => log::debug!("selection ignored: {e}"),
            None => {}
        }
    });
    let on_play = move |_| {
        let commands = playback.try_update(PlaybackState::toggle_play).unwrap_or_default();
        dispatch(video_ref, playback, commands);
    };

    let is_playing = move || playback.with(PlaybackState::is_playing);
    let entry = move || {
        playback
            .with(|state| state.current_entry(catalog))
            .unwrap_or_else(|| catalog.default_entry())
    };
    let initial_src = catalog.default_entry().media_url.as_str();

    view! {
        <div class="hero-banner" class:video-playing=is_playing>
            <div class="video-background" class:loading=move || playback.with(awaiting_frame)>
                <video
                    node_ref=video_ref
                    class="video-player"
                    src=initial_src
                    muted=true
                    playsinline=true
                    preload="auto"
                    on:loadeddata=move |_| playback.update(PlaybackState::on_media_loaded)
                ></video>
                <div class="video-overlay" class:playing-overlay=is_playing></div>
            </div>

            <div class="content-container">
                <div class="video-info">
                    <div class="badge-container">
                        <div class="top-badge">{site.featured_label.as_str()}</div>
                        {move || {
                            entry()
                                .badge
                                .as_deref()
                                .map(|badge| view! { <div class="badge-text">{badge}</div> })
                        }}
                    </div>
                    <h1 class="video-title">{move || entry().title.as_str()}</h1>
                    <h2 class="video-subtitle">{move || entry().subtitle.as_str()}</h2>
                    <p class="video-description">{move || entry().description.as_str()}</p>
                    <div class="actions">
                        <button class="play-button" on:click=on_play>
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                <path d=move || play_icon_path(is_playing()) fill="currentColor"/>
                            </svg>
                            <span>{move || play_label(is_playing())}</span>
                        </button>
                        <VolumeControl playback=playback video_ref=video_ref/>
                    </div>
                </div>
            </div>

            <div class="video-list-section">
                <h3 class="section-title">{site.section_title.as_str()}</h3>
                <div class="video-list">
                    {catalog
                        .entries()
                        .iter()
                        .zip(thumbnail_refs)
                        .map(|(listed, thumbnail_ref)| {
                            let active = Signal::derive(move || playback.with(|state| state.is_active(&listed.id)));
                            view! {
                                <VideoCard
                                    entry=listed
                                    active=active
                                    thumbnail_ref=thumbnail_ref
                                    on_select=on_select
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// True from a (re)load until the element reports its first frame.
fn awaiting_frame(state: &PlaybackState) -> bool {
    !state.media_ready()
}

fn play_label(playing: bool) -> &'static str {
    if playing { "Pause" } else { "Watch" }
}

fn play_icon_path(playing: bool) -> &'static str {
    if playing { "M6 4h4v16H6V4zm8 0h4v16h-4V4z" } else { "M8 5v14l11-7z" }
}
