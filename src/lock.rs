//! Document-level scroll lock shared by every full-screen overlay.
//!
//! The lock is held while at least one owner holds it. Owners are a set, so a repeated acquire by
//! the same owner is one hold and a release by an owner that holds nothing changes nothing.

use std::collections::BTreeSet;

use crate::event::MotionEvent;

/// Who is asking for scrolling to be suppressed.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LockOwner {
    NavMenu,
    Overlay(String),
}

#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    holders: BTreeSet<LockOwner>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `owner` to the holder set. Emits a change only when scrolling goes from free to locked.
    pub fn acquire(&mut self, owner: &LockOwner, out: &mut Vec<MotionEvent>) {
        let was_locked = self.is_locked();
        if self.holders.insert(owner.clone()) {
            tracing::debug!(?owner, holders = self.holders.len(), "scroll lock acquired");
        }
        if !was_locked {
            out.push(MotionEvent::ScrollLockChanged { locked: true });
        }
    }

    /// Remove `owner` from the holder set. Emits a change only when the last holder leaves.
    pub fn release(&mut self, owner: &LockOwner, out: &mut Vec<MotionEvent>) {
        if !self.holders.remove(owner) {
            return;
        }
        tracing::debug!(?owner, holders = self.holders.len(), "scroll lock released");
        if !self.is_locked() {
            out.push(MotionEvent::ScrollLockChanged { locked: false });
        }
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn holds(&self, owner: &LockOwner) -> bool {
        self.holders.contains(owner)
    }
}
