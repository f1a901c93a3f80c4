//! Scroll-reveal bookkeeping
//!
//! Elements tagged for an entrance animation start `Pending` and become
//! `Active` the first time enough of them is visible. The transition is
//! one-way: leaving the viewport afterwards changes nothing.
//!
//! This module holds only the state machine. The browser side (one shared
//! `IntersectionObserver`) lives in `ui::reveal` and feeds visibility ratios
//! into [`RevealTracker::observe`].

use std::collections::HashMap;
use std::time::Duration;

/// CSS class marking an element as a reveal candidate
pub const REVEAL_CLASS: &str = "reveal";

/// CSS class added once the element has been revealed
pub const ACTIVE_CLASS: &str = "active";

/// Attribute carrying the tracker id on registered elements
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Selector for candidates that have not been revealed yet
pub const PENDING_SELECTOR: &str = ".reveal:not(.active)";

/// Visible-area fraction that triggers a reveal
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display, derive_more::FromStr,
)]
pub struct RevealId(u64);

impl RevealId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Active,
}

/// Result of feeding one visibility sample to the tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    /// The element just became active
    Activated,
    /// Still pending, already active, or unknown
    Unchanged,
}

/// Observer settings
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
    /// Periodic re-scan for `.reveal` markup that was not registered
    /// explicitly. Opt-in: the default `None` relies on registration at
    /// mount time only, which covers every `<Reveal>` and the page markup.
    pub rescan_interval: Option<Duration>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: "0px 0px -50px 0px".to_string(),
            rescan_interval: None,
        }
    }
}

impl RevealOptions {
    pub fn with_rescan_interval(mut self, interval: Duration) -> Self {
        self.rescan_interval = Some(interval);
        self
    }
}

/// State of every registered reveal element
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f64,
    next_id: u64,
    states: HashMap<RevealId, RevealState>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            next_id: 0,
            states: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Allocate an id for a new element and start tracking it as pending
    pub fn register(&mut self) -> RevealId {
        let id = RevealId(self.next_id);
        self.next_id += 1;
        self.states.insert(id, RevealState::Pending);
        id
    }

    /// Feed a visibility sample for `id`.
    ///
    /// `Activated` is returned at most once per element.
    pub fn observe(&mut self, id: RevealId, visible_ratio: f64) -> RevealTransition {
        let Some(state) = self.states.get_mut(&id) else {
            return RevealTransition::Unchanged;
        };
        if *state == RevealState::Pending && visible_ratio >= self.threshold {
            *state = RevealState::Active;
            RevealTransition::Activated
        } else {
            RevealTransition::Unchanged
        }
    }

    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.states.get(&id).copied()
    }

    pub fn is_active(&self, id: RevealId) -> bool {
        self.state(id) == Some(RevealState::Active)
    }

    pub fn pending_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == RevealState::Pending)
            .count()
    }

    pub fn active_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == RevealState::Active)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_starts_pending() {
        let mut tracker = RevealTracker::new(DEFAULT_THRESHOLD);
        let a = tracker.register();
        let b = tracker.register();

        assert_ne!(a, b);
        assert_eq!(tracker.state(a), Some(RevealState::Pending));
        assert_eq!(tracker.pending_count(), 2);
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let mut tracker = RevealTracker::new(0.1);
        let id = tracker.register();

        assert_eq!(tracker.observe(id, 0.0), RevealTransition::Unchanged);
        assert_eq!(tracker.observe(id, 0.09), RevealTransition::Unchanged);
        assert_eq!(tracker.state(id), Some(RevealState::Pending));
    }

    #[test]
    fn test_activation_is_one_way() {
        let mut tracker = RevealTracker::new(0.1);
        let id = tracker.register();

        assert_eq!(tracker.observe(id, 0.0999), RevealTransition::Unchanged);
        assert_eq!(tracker.observe(id, 0.1), RevealTransition::Activated);
        assert!(tracker.is_active(id));

        // Leaving the viewport and coming back never re-triggers
        assert_eq!(tracker.observe(id, 0.0), RevealTransition::Unchanged);
        assert_eq!(tracker.observe(id, 1.0), RevealTransition::Unchanged);
        assert!(tracker.is_active(id));
    }

    #[test]
    fn test_elements_are_independent() {
        let mut tracker = RevealTracker::new(0.1);
        let a = tracker.register();
        let b = tracker.register();

        tracker.observe(b, 0.5);

        assert!(!tracker.is_active(a));
        assert!(tracker.is_active(b));
        assert_eq!(tracker.pending_count(), 1);
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut tracker = RevealTracker::new(0.1);
        let id: RevealId = "42".parse().unwrap();

        assert_eq!(tracker.observe(id, 1.0), RevealTransition::Unchanged);
        assert_eq!(tracker.state(id), None);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealTracker::new(3.0).threshold(), 1.0);
        assert_eq!(RevealTracker::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, DEFAULT_THRESHOLD);
        assert!(options.rescan_interval.is_none());

        let polling = options.with_rescan_interval(Duration::from_secs(1));
        assert_eq!(polling.rescan_interval, Some(Duration::from_secs(1)));
    }
}
