//! Headline ticker.
//!
//! Shows the headline of the latest media event for a fixed duration. Time is
//! passed in as a `Duration` since any fixed origin, the same clock the run
//! controller is polled with.

use std::time::Duration;

use society_events::{MediaEvent, TickReport};

use crate::config::BroadcastConfig;

/// A headline currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveHeadline {
    /// Catalog index of the headline
    pub headline_index: usize,
    /// Headline text
    pub text: &'static str,
    /// When it was announced
    pub shown_at: Duration,
    /// When it disappears
    pub hides_at: Duration,
}

impl ActiveHeadline {
    pub fn is_visible(&self, now: Duration) -> bool {
        now < self.hides_at
    }
}

/// Tracks which headline is visible.
#[derive(Debug, Clone, Default)]
pub struct HeadlineTicker {
    config: BroadcastConfig,
    active: Option<ActiveHeadline>,
    announced: u64,
}

impl HeadlineTicker {
    pub fn new(config: BroadcastConfig) -> Self {
        Self {
            config,
            active: None,
            announced: 0,
        }
    }

    pub fn config(&self) -> &BroadcastConfig {
        &self.config
    }

    /// Number of headlines announced so far.
    pub fn announced(&self) -> u64 {
        self.announced
    }

    /// Shows the event's headline, replacing any visible one. Each headline
    /// gets the full display duration from `now`.
    pub fn announce(&mut self, event: &MediaEvent, now: Duration) -> Option<&ActiveHeadline> {
        let Some(text) = event.headline() else {
            tracing::warn!("Unknown headline index {}", event.headline_index);
            return None;
        };

        self.announced += 1;
        tracing::debug!("Headline {} shown: {}", event.headline_index, text);
        self.active = Some(ActiveHeadline {
            headline_index: event.headline_index,
            text,
            shown_at: now,
            hides_at: now + self.config.display_duration(),
        });
        self.active.as_ref()
    }

    /// Announces the media event of a tick report, if one fired.
    pub fn observe(&mut self, report: &TickReport, now: Duration) -> Option<&ActiveHeadline> {
        let event = report.media_event?;
        self.announce(&event, now)
    }

    /// The visible headline at `now`.
    pub fn current(&self, now: Duration) -> Option<&ActiveHeadline> {
        self.active.as_ref().filter(|h| h.is_visible(now))
    }

    pub fn is_visible(&self, now: Duration) -> bool {
        self.current(now).is_some()
    }

    /// Display text with the configured label, e.g. `Media: ...`.
    pub fn caption(&self, now: Duration) -> Option<String> {
        self.current(now)
            .map(|h| format!("{}: {}", self.config.label, h.text))
    }

    /// Drops an expired headline. Returns true if one was dropped.
    pub fn expire(&mut self, now: Duration) -> bool {
        match &self.active {
            Some(h) if !h.is_visible(now) => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}
