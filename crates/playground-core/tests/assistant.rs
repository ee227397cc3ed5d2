//! Assistant scheduling: welcome, auto-hide, suggestion draws, hover pinning.

use playground_core::{
    AUTO_HIDE, Assistant, SUGGESTION_PERIOD, SUGGESTIONS, WELCOME, WELCOME_DELAY,
};
use std::time::{Duration, Instant};

#[test]
fn test_welcome_fires_once_after_delay() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 1);

    assert!(!assistant.poll(t0 + Duration::from_secs(2)));
    assert!(!assistant.is_visible());

    assert!(assistant.poll(t0 + WELCOME_DELAY));
    assert_eq!(assistant.message(), Some(WELCOME));

    // One-shot: dismissing it does not re-arm the welcome timer.
    assistant.dismiss();
    assert!(!assistant.poll(t0 + Duration::from_secs(4)));
    assert!(!assistant.is_visible());
}

#[test]
fn test_show_replaces_and_restarts_hide_deadline() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 1);
    assistant.poll(t0 + WELCOME_DELAY);

    assistant.show("first", t0 + Duration::from_secs(4));
    assistant.show("second", t0 + Duration::from_secs(9));
    assert_eq!(assistant.message(), Some("second"));

    // The first show's deadline (t0+14s) was replaced, not kept.
    assert!(!assistant.poll(t0 + Duration::from_secs(14)));
    assert_eq!(assistant.message(), Some("second"));

    assert!(assistant.poll(t0 + Duration::from_secs(19)));
    assert!(!assistant.is_visible());
}

#[test]
fn test_message_auto_hides_after_ten_seconds() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 1);

    assistant.poll(t0 + WELCOME_DELAY);
    assert!(assistant.is_visible());

    let deadline = t0 + WELCOME_DELAY + AUTO_HIDE;
    assert!(!assistant.poll(deadline - Duration::from_secs(1)));
    assert!(assistant.is_visible());

    assert!(assistant.poll(deadline));
    assert!(!assistant.is_visible());
}

#[test]
fn test_hovered_message_survives_the_deadline_indefinitely() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 5);

    assistant.poll(t0 + WELCOME_DELAY);
    assistant.set_hovering(true);

    // The deadline fires while hovered: the message stays and the deadline
    // is consumed.
    assert!(!assistant.poll(t0 + WELCOME_DELAY + AUTO_HIDE));
    assert_eq!(assistant.message(), Some(WELCOME));

    // Un-hovering afterwards changes nothing; there is no deadline left,
    // and due suggestion draws never replace a visible message.
    assistant.set_hovering(false);
    for minutes in 1..=3u32 {
        assert!(!assistant.poll(t0 + minutes * SUGGESTION_PERIOD));
        assert_eq!(assistant.message(), Some(WELCOME));
    }
}

#[test]
fn test_hover_is_sampled_only_when_the_deadline_fires() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 1);

    assistant.poll(t0 + WELCOME_DELAY);

    // Hovered mid-lifetime but not at the deadline: the message hides.
    assistant.set_hovering(true);
    assistant.set_hovering(false);
    assert!(assistant.poll(t0 + WELCOME_DELAY + AUTO_HIDE));
    assert!(!assistant.is_visible());
}

#[test]
fn test_visible_message_blocks_a_due_suggestion() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 9);
    assistant.poll(t0 + WELCOME_DELAY);

    // Pin a message just before the period mark; whatever the draw at
    // t0+30s yields, the visible message must not be replaced.
    assistant.show("pinned", t0 + Duration::from_secs(29));
    assert!(!assistant.poll(t0 + SUGGESTION_PERIOD));
    assert_eq!(assistant.message(), Some("pinned"));
}

#[test]
fn test_suggestions_eventually_fire_from_the_catalog() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 2);
    assistant.poll(t0 + WELCOME_DELAY);

    // Each period draws with probability 0.3; the message shown at a period
    // mark is cleared one second after its auto-hide deadline, so every
    // draw after the first sees a hidden assistant. 200 periods make a
    // never-fired run unreachable for any seed in practice.
    let mut seen = None;
    for period in 1..=200u32 {
        let mark = t0 + period * SUGGESTION_PERIOD;
        assistant.poll(mark);
        if let Some(message) = assistant.message()
            && message != WELCOME
        {
            seen = Some(message.to_string());
        }
        assistant.poll(mark + AUTO_HIDE + Duration::from_secs(1));
    }

    let suggestion = seen.unwrap();
    assert!(SUGGESTIONS.contains(&suggestion.as_str()));
}

#[test]
fn test_toggle_shows_a_catalog_suggestion_then_hides() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 3);

    assert!(assistant.toggle(t0));
    let message = assistant.message().unwrap().to_string();
    assert!(SUGGESTIONS.contains(&message.as_str()));

    assert!(!assistant.toggle(t0 + Duration::from_secs(1)));
    assert!(!assistant.is_visible());
}

#[test]
fn test_dismiss_clears_the_message() {
    let t0 = Instant::now();
    let mut assistant = Assistant::with_seed(t0, 1);

    assistant.show("anything", t0);
    assert!(assistant.is_visible());

    assistant.dismiss();
    assert_eq!(assistant.message(), None);
}
