use showcase::catalog::{Catalog, EntryId, VideoEntry};
use showcase::player::PlayerSettings;

use super::*;

fn entry(id: &str) -> VideoEntry {
    VideoEntry {
        id: EntryId::new(id),
        title: format!("Title {id}"),
        subtitle: String::new(),
        description: String::new(),
        media_url: format!("/{id}.mp4"),
        thumbnail_url: String::new(),
        view_count: String::new(),
        badge: None,
        restricted: false,
    }
}

#[test]
fn play_button_offers_watch_until_playing() {
    assert_eq!(play_label(false), "Watch");
    assert_eq!(play_label(true), "Pause");
}

#[test]
fn play_button_glyph_follows_state() {
    assert_ne!(play_icon_path(false), play_icon_path(true));
}

#[test]
fn background_shows_loading_until_each_source_has_a_frame() {
    let catalog = Catalog::new(vec![entry("a"), entry("b")]).unwrap();
    let mut state = PlaybackState::new(&catalog, PlayerSettings::default());
    let _commands = state.mount(&catalog);
    assert!(awaiting_frame(&state));

    state.on_media_loaded();
    assert!(!awaiting_frame(&state));

    let _commands = state.select(&catalog, &EntryId::new("b")).unwrap();
    assert!(awaiting_frame(&state));
}
