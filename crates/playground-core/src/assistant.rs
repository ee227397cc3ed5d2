//! Canned-message assistant widget state.
//!
//! # Overview
//!
//! The assistant shows at most one message at a time. Three timers drive it,
//! all expressed as deadlines on caller-supplied [`Instant`]s so tests can
//! drive time without sleeping:
//!
//! - a one-shot welcome message [`WELCOME_DELAY`] after construction,
//! - a periodic suggestion check every [`SUGGESTION_PERIOD`] that fires with
//!   probability [`SUGGESTION_PROBABILITY`] and only while no message is
//!   visible,
//! - a single rolling auto-hide deadline [`AUTO_HIDE`] after the most recent
//!   show. Showing a new message replaces the visible one and restarts this
//!   deadline; messages never stack.
//!
//! Hover handling is deliberately sampled once: when the hide deadline
//! fires, the current hover flag decides whether the message disappears. If
//! it survives, it stays visible with no new deadline until the next show,
//! dismiss, or toggle. Hover changes at any other moment have no effect.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};

/// Delay before the one-shot welcome message.
pub const WELCOME_DELAY: Duration = Duration::from_secs(3);
/// How long a message stays visible without interaction.
pub const AUTO_HIDE: Duration = Duration::from_secs(10);
/// Period of the random-suggestion check.
pub const SUGGESTION_PERIOD: Duration = Duration::from_secs(30);
/// Chance that a due suggestion check actually shows a message.
pub const SUGGESTION_PROBABILITY: f64 = 0.3;

/// Greeting shown once shortly after startup.
pub const WELCOME: &str =
    "Welcome to Quantum Nexus! I'm your AI assistant. Click on me anytime for help with your project.";

/// Message shown when an export begins.
pub const EXPORT_STARTED: &str =
    "Exporting workspace... This would generate a downloadable file in a full implementation.";

/// Message shown when the simulated export completes.
pub const EXPORT_COMPLETE: &str =
    "Workspace exported successfully! You can now share your quantum creation.";

/// The canned suggestion catalog.
pub const SUGGESTIONS: [&str; 10] = [
    "I've detected some optimization opportunities in your CSS. Would you like me to suggest improvements?",
    "Your code structure looks great! Consider adding more comments for future reference.",
    "I notice you're using a lot of animations. Would you like me to help optimize them for performance?",
    "The color scheme you're using has good contrast and accessibility. Well done!",
    "I can help you implement a dark/light mode toggle if you're interested.",
    "Your JavaScript functions are well-organized. Consider breaking down the larger ones into smaller, reusable functions.",
    "I've generated a particle effect function that you might find useful for your project.",
    "Would you like me to analyze your code for potential security issues?",
    "I can help you set up a responsive design if you need assistance.",
    "Your HTML structure follows good semantic practices. That's excellent for SEO!",
];

/// Assistant widget state and scheduling.
pub struct Assistant {
    message: Option<String>,
    hide_deadline: Option<Instant>,
    welcome_at: Option<Instant>,
    next_suggestion_at: Instant,
    hovering: bool,
    rng: SmallRng,
}

impl Assistant {
    /// Create an assistant whose timers start at `now`, seeded from OS
    /// entropy.
    pub fn new(now: Instant) -> Self {
        Self::from_rng(now, SmallRng::from_entropy())
    }

    /// Create an assistant with a fixed seed for reproducible suggestion
    /// draws.
    pub fn with_seed(now: Instant, seed: u64) -> Self {
        Self::from_rng(now, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(now: Instant, rng: SmallRng) -> Self {
        Self {
            message: None,
            hide_deadline: None,
            welcome_at: Some(now + WELCOME_DELAY),
            next_suggestion_at: now + SUGGESTION_PERIOD,
            hovering: false,
            rng,
        }
    }

    /// The visible message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether a message is visible.
    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Record whether the pointer is over the message region. Only the value
    /// held at the instant the hide deadline fires matters.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Show `text`, replacing any visible message and restarting the hide
    /// deadline.
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.message = Some(text.into());
        self.hide_deadline = Some(now + AUTO_HIDE);
    }

    /// Show a random catalog suggestion.
    pub fn show_random(&mut self, now: Instant) {
        let index = self.rng.gen_range(0..SUGGESTIONS.len());
        self.show(SUGGESTIONS[index], now);
    }

    /// Hide the message immediately.
    pub fn dismiss(&mut self) {
        self.message = None;
        self.hide_deadline = None;
    }

    /// Orb click: hide the message if one is visible, otherwise show a
    /// random suggestion. Returns whether a message is visible afterwards.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_visible() {
            self.dismiss();
        } else {
            self.show_random(now);
        }
        self.is_visible()
    }

    /// Fire every deadline that is due at `now`. Returns whether the visible
    /// message changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(at) = self.welcome_at
            && at <= now
        {
            self.welcome_at = None;
            self.show(WELCOME, now);
            changed = true;
        }

        while self.next_suggestion_at <= now {
            self.next_suggestion_at += SUGGESTION_PERIOD;
            // One draw per period whether or not a message is visible, so a
            // fixed seed produces the same stream either way.
            let fire = self.rng.gen_bool(SUGGESTION_PROBABILITY);
            if fire && !self.is_visible() {
                self.show_random(now);
                changed = true;
            }
        }

        if let Some(at) = self.hide_deadline
            && at <= now
        {
            // Hover is sampled here and only here. A hovered message stays
            // visible with no replacement deadline.
            self.hide_deadline = None;
            if !self.hovering {
                self.message = None;
                changed = true;
            }
        }

        changed
    }
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("message", &self.message)
            .field("hovering", &self.hovering)
            .field("hide_pending", &self.hide_deadline.is_some())
            .finish()
    }
}
