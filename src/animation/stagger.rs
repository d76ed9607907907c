use crate::{
    animation::{
        ease::Ease,
        tween::{RevealStyle, Tween},
    },
    foundation::core::{ElementId, Millis},
    foundation::error::{ElevateError, ElevateResult},
};

/// Declarative description of a group reveal: where elements come from, where they land, and how
/// the group is sequenced.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSpec {
    /// Style applied to every element as soon as the group is armed.
    pub from: RevealStyle,
    /// Resting style once an element finishes.
    #[serde(default)]
    pub to: RevealStyle,
    /// Per-element duration.
    pub duration: Millis,
    pub ease: Ease,
    /// Offset between consecutive element starts, in registration order.
    #[serde(default)]
    pub stagger: Millis,
    /// Delay between the trigger and the first element start.
    #[serde(default)]
    pub delay: Millis,
}

impl RevealSpec {
    /// Rise `y` pixels while fading in from transparent.
    pub fn fade_up(y: f64, duration: Millis, ease: Ease) -> Self {
        Self {
            from: RevealStyle::hidden_below(y),
            to: RevealStyle::VISIBLE,
            duration,
            ease,
            stagger: Millis::ZERO,
            delay: Millis::ZERO,
        }
    }

    pub fn with_stagger(mut self, stagger: Millis) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_delay(mut self, delay: Millis) -> Self {
        self.delay = delay;
        self
    }

    pub fn validate(&self) -> ElevateResult<()> {
        for (name, style) in [("from", self.from), ("to", self.to)] {
            if !(style.y.is_finite() && style.opacity.is_finite()) {
                return Err(ElevateError::animation(format!(
                    "reveal '{name}' style must be finite"
                )));
            }
            if !(0.0..=1.0).contains(&style.opacity) {
                return Err(ElevateError::animation(format!(
                    "reveal '{name}' opacity must be within [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Start time of the element at `index` given the group start.
    pub fn element_start(&self, group_start: Millis, index: usize) -> Millis {
        let offset = self.stagger.0.saturating_mul(index as u64);
        group_start + Millis(offset)
    }

    /// Time from group start until the last of `count` elements lands.
    pub fn span(&self, count: usize) -> Millis {
        if count == 0 {
            return Millis::ZERO;
        }
        self.element_start(Millis::ZERO, count - 1) + self.duration
    }
}

/// Lifecycle of a single element inside a reveal group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementPhase {
    Pending,
    Animating,
    Done,
}

/// Transition reported by [`StaggerGroup::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StaggerStep {
    Started(ElementId),
    Finished(ElementId),
}

#[derive(Clone, Debug)]
struct Track {
    id: ElementId,
    phase: ElementPhase,
    style: RevealStyle,
    tween: Option<Tween<RevealStyle>>,
}

/// Ordered element tracks sharing one [`RevealSpec`], each offset by the stagger interval.
#[derive(Clone, Debug, Default)]
pub struct StaggerGroup {
    tracks: Vec<Track>,
}

impl StaggerGroup {
    /// Create a group with every element pending at the `from` style.
    pub fn armed(elements: impl IntoIterator<Item = ElementId>, from: RevealStyle) -> Self {
        Self {
            tracks: elements
                .into_iter()
                .map(|id| Track {
                    id,
                    phase: ElementPhase::Pending,
                    style: from,
                    tween: None,
                })
                .collect(),
        }
    }

    /// Schedule every element. Nothing moves until [`Self::tick`] reaches each start time.
    pub fn schedule(&mut self, group_start: Millis, spec: &RevealSpec) {
        for (i, track) in self.tracks.iter_mut().enumerate() {
            let start = spec.element_start(group_start, i);
            track.tween = Some(Tween::new(
                track.style,
                spec.to,
                start,
                spec.duration,
                spec.ease,
            ));
        }
    }

    /// Put every element back to pending at `from`, dropping any scheduled motion.
    pub fn rearm(&mut self, from: RevealStyle) {
        for track in &mut self.tracks {
            track.phase = ElementPhase::Pending;
            track.style = from;
            track.tween = None;
        }
    }

    /// Drop scheduled motion and keep every element exactly where it is.
    pub fn halt(&mut self) {
        for track in &mut self.tracks {
            track.tween = None;
        }
    }

    pub fn tick(&mut self, now: Millis, out: &mut Vec<StaggerStep>) {
        for track in &mut self.tracks {
            let Some(tween) = track.tween.as_ref() else {
                continue;
            };
            if track.phase == ElementPhase::Pending && tween.has_started(now) {
                track.phase = ElementPhase::Animating;
                out.push(StaggerStep::Started(track.id.clone()));
            }
            if track.phase != ElementPhase::Animating {
                continue;
            }
            track.style = tween.sample(now);
            if tween.is_finished(now) {
                track.phase = ElementPhase::Done;
                track.tween = None;
                out.push(StaggerStep::Finished(track.id.clone()));
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.tracks.iter().all(|t| t.phase == ElementPhase::Done)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn style_of(&self, id: &ElementId) -> Option<RevealStyle> {
        self.tracks.iter().find(|t| &t.id == id).map(|t| t.style)
    }

    pub fn style_at(&self, index: usize) -> Option<RevealStyle> {
        self.tracks.get(index).map(|t| t.style)
    }

    pub fn phase_of(&self, id: &ElementId) -> Option<ElementPhase> {
        self.tracks.iter().find(|t| &t.id == id).map(|t| t.phase)
    }

    pub fn phases(&self) -> impl Iterator<Item = (&ElementId, ElementPhase)> {
        self.tracks.iter().map(|t| (&t.id, t.phase))
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.tracks.iter().any(|t| &t.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
