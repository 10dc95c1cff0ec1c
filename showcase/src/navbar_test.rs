use std::time::Duration;

use super::*;
use crate::config::Timing;

#[test]
fn scrolled_only_when_offset_positive() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(-12.0));
    assert!(is_scrolled(0.5));
    assert!(is_scrolled(640.0));
}

#[test]
fn shorten_keeps_head_and_tail() {
    assert_eq!(shorten_address("E7jDjYFT6VAxSbtPPRnF8pEeWpsVCLbM7LyTAgM1pump"), "E7jDjY...pump");
}

#[test]
fn shorten_returns_short_addresses_whole() {
    assert_eq!(shorten_address(""), "");
    assert_eq!(shorten_address("abcdefghij"), "abcdefghij");
    assert_eq!(shorten_address("abcdefghijk"), "abcdef...hijk");
}

#[test]
fn shorten_counts_characters_not_bytes() {
    assert_eq!(shorten_address("ééééééxxxxxüüüü"), "éééééé...üüüü");
}

#[test]
fn copy_indicator_hides_after_its_own_timer() {
    let mut indicator = CopyIndicator::default();
    assert!(!indicator.is_visible());

    let ticket = indicator.show();
    assert!(indicator.is_visible());
    indicator.hide(ticket);
    assert!(!indicator.is_visible());
}

#[test]
fn newer_copy_outlives_older_timer() {
    let mut indicator = CopyIndicator::default();
    let first = indicator.show();
    let second = indicator.show();

    indicator.hide(first);
    assert!(indicator.is_visible());
    indicator.hide(second);
    assert!(!indicator.is_visible());
}

/// Replays hide timers that are due by `now`, in the order they were armed.
fn fire_due(indicator: &mut CopyIndicator, timers: &mut Vec<(Duration, HideTicket)>, now: Duration) {
    timers.retain(|(due, ticket)| {
        if *due <= now {
            indicator.hide(*ticket);
            false
        } else {
            true
        }
    });
}

#[test]
fn copied_indicator_visible_until_default_delay_elapses() {
    let delay = Timing::default().copied_indicator();
    assert_eq!(delay, Duration::from_millis(2_000));

    let mut indicator = CopyIndicator::default();
    let mut timers = vec![(delay, indicator.show())];

    for now_ms in [0, 1_000, 1_999, 2_000, 2_500] {
        let now = Duration::from_millis(now_ms);
        fire_due(&mut indicator, &mut timers, now);
        assert_eq!(indicator.is_visible(), now < delay, "at {now_ms} ms");
    }
}

#[test]
fn second_copy_restarts_the_default_delay() {
    let delay = Timing::default().copied_indicator();
    let mut indicator = CopyIndicator::default();
    let mut timers = vec![(delay, indicator.show())];

    let second_copy = Duration::from_millis(1_500);
    fire_due(&mut indicator, &mut timers, second_copy);
    timers.push((second_copy + delay, indicator.show()));

    fire_due(&mut indicator, &mut timers, delay);
    assert!(indicator.is_visible(), "first timer must not hide a newer copy");

    fire_due(&mut indicator, &mut timers, second_copy + delay);
    assert!(!indicator.is_visible());
    assert!(timers.is_empty());
}
