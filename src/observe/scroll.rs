use std::collections::BTreeMap;

use crate::foundation::error::{ElevateError, ElevateResult};

/// Handle returned by [`ScrollObserver::subscribe`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SubscriptionId(pub u64);

/// Scroll offset plus the derived threshold flag, as seen by one subscriber.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollState {
    pub offset_y: f64,
    pub scrolled_past_threshold: bool,
}

impl ScrollState {
    /// Derive the state for `offset_y`. The comparison is strict: sitting on the threshold is not
    /// past it.
    pub fn at(offset_y: f64, threshold: f64) -> Self {
        Self {
            offset_y,
            scrolled_past_threshold: offset_y > threshold,
        }
    }
}

/// A flip of one subscriber's threshold flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThresholdChange {
    pub subscription: SubscriptionId,
    pub scrolled: bool,
}

#[derive(Clone, Copy, Debug)]
struct Subscriber {
    threshold: f64,
    scrolled: bool,
}

/// Tracks the vertical scroll offset and reports threshold crossings per subscriber.
///
/// Updates that leave a subscriber's flag unchanged report nothing for it, so callers can react
/// to every reported change without their own equality check.
#[derive(Clone, Debug, Default)]
pub struct ScrollObserver {
    offset_y: f64,
    next_id: u64,
    subscribers: BTreeMap<SubscriptionId, Subscriber>,
}

impl ScrollObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, threshold: f64) -> ElevateResult<SubscriptionId> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ElevateError::validation(
                "scroll threshold must be finite and >= 0",
            ));
        }
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(
            id,
            Subscriber {
                threshold,
                scrolled: self.offset_y > threshold,
            },
        );
        Ok(id)
    }

    /// Returns `false` when `id` was not subscribed (already removed or never issued).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    /// Record a new offset and report every subscriber whose flag flipped.
    ///
    /// Negative offsets (overscroll) clamp to 0; non-finite offsets are ignored.
    pub fn update(&mut self, offset_y: f64) -> Vec<ThresholdChange> {
        if !offset_y.is_finite() {
            tracing::warn!(offset_y, "ignoring non-finite scroll offset");
            return Vec::new();
        }
        self.offset_y = offset_y.max(0.0);

        let mut changes = Vec::new();
        for (&subscription, sub) in &mut self.subscribers {
            let scrolled = self.offset_y > sub.threshold;
            if scrolled != sub.scrolled {
                sub.scrolled = scrolled;
                changes.push(ThresholdChange {
                    subscription,
                    scrolled,
                });
            }
        }
        changes
    }

    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    pub fn state(&self, id: SubscriptionId) -> Option<ScrollState> {
        self.subscribers.get(&id).map(|sub| ScrollState {
            offset_y: self.offset_y,
            scrolled_past_threshold: sub.scrolled,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/scroll.rs"]
mod tests;
