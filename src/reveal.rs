//! Declarative reveal sets: named element groups that animate into view once per mount.

pub mod animator;

use std::fmt;

pub use animator::{RevealAnimator, RevealHandle, RevealStatus, RevealTrigger};

/// Name of a reveal set, unique among the sets mounted at one time.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RevealSetId(pub String);

impl RevealSetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for RevealSetId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for RevealSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
