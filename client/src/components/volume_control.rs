//! Mute toggle and volume slider for the primary player.

#[cfg(test)]
#[path = "volume_control_test.rs"]
mod volume_control_test;

use leptos::html::Video;
use leptos::prelude::*;
use showcase::player::{PlaybackState, VolumeIcon};

use crate::util::media::dispatch;

#[component]
pub fn VolumeControl(playback: RwSignal<PlaybackState>, video_ref: NodeRef<Video>) -> impl IntoView {
    let icon = move || playback.with(PlaybackState::volume_icon);

    let on_mute = move |_| {
        let commands = playback.try_update(PlaybackState::toggle_mute).unwrap_or_default();
        dispatch(video_ref, playback, commands);
    };
    let on_input = move |ev: leptos::ev::Event| {
        let Some(level) = parse_level(&event_target_value(&ev)) else {
            return;
        };
        let commands = playback.try_update(|state| state.set_volume(level)).unwrap_or_default();
        dispatch(video_ref, playback, commands);
    };

    view! {
        <div class="volume-control">
            <button class="mute-button" on:click=on_mute aria-label=move || icon_label(icon())>
                <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d=move || icon_path(icon()) fill="currentColor"/>
                </svg>
            </button>
            <input
                type="range"
                class="volume-slider"
                min="0"
                max="1"
                step="0.01"
                prop:value=move || playback.with(PlaybackState::volume).to_string()
                on:input=on_input
            />
        </div>
    }
}

/// Slider value as a level. Rejects anything that is not a finite number.
fn parse_level(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|level| level.is_finite())
}

fn icon_label(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Muted | VolumeIcon::Off => "Unmute",
        VolumeIcon::High | VolumeIcon::Low => "Mute",
    }
}

fn icon_path(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Muted => {
            "M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 12 8.18V4z"
        }
        VolumeIcon::High => {
            "M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z"
        }
        VolumeIcon::Low => "M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02z",
        VolumeIcon::Off => "M7 9v6h4l5 5V4l-5 5H7z",
    }
}
