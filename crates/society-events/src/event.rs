//! Event Types
//!
//! Per-tick event descriptors surfaced to the presentation layer.

use serde::{Deserialize, Serialize};

/// Fixed catalog of media headlines. A media event selects one uniformly.
pub const MEDIA_HEADLINES: [&str; 5] = [
    "BREAKING: Study shows chocolate prevents cancer!",
    "VIRAL: Celebrity endorses miracle weight loss pill!",
    "SHOCKING: Government hiding alien contact!",
    "ALERT: New conspiracy theory gaining followers!",
    "TRENDING: Unverified health advice spreading online!",
];

/// Looks up a headline by catalog index.
pub fn headline(index: usize) -> Option<&'static str> {
    MEDIA_HEADLINES.get(index).copied()
}

/// A media event that fired during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEvent {
    /// Index into [`MEDIA_HEADLINES`]
    pub headline_index: usize,
}

impl MediaEvent {
    pub fn new(headline_index: usize) -> Self {
        Self { headline_index }
    }

    /// The headline text, if the index is within the catalog.
    pub fn headline(&self) -> Option<&'static str> {
        headline(self.headline_index)
    }
}

/// Rare per-cell life events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeEventKind {
    /// Life crisis prompting reflection: forces critical thinking
    LifeCrisis,
    /// Information overload: falls back to non-critical thinking
    InformationOverload,
}

/// Summary of what happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Generation number produced by this tick
    pub generation: u64,
    /// Media event, if one fired this tick
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_event: Option<MediaEvent>,
    /// Agents whose influence was raised by the media event
    #[serde(default)]
    pub media_boosted: usize,
    /// Non-critical thinkers converted by their neighborhood
    #[serde(default)]
    pub converted_to_critical: usize,
    /// Critical thinkers converted by their neighborhood
    #[serde(default)]
    pub converted_to_non_critical: usize,
    /// Life crises applied this tick
    #[serde(default)]
    pub life_crises: usize,
    /// Information overload regressions applied this tick
    #[serde(default)]
    pub information_overloads: usize,
}

impl TickReport {
    pub fn new(generation: u64) -> Self {
        Self {
            generation,
            ..Default::default()
        }
    }

    /// Whether a media event fired this tick.
    pub fn media_fired(&self) -> bool {
        self.media_event.is_some()
    }

    /// Total life events of either kind.
    pub fn life_events(&self) -> usize {
        self.life_crises + self.information_overloads
    }

    /// Records one life event.
    pub fn record_life_event(&mut self, kind: LifeEventKind) {
        match kind {
            LifeEventKind::LifeCrisis => self.life_crises += 1,
            LifeEventKind::InformationOverload => self.information_overloads += 1,
        }
    }
}
