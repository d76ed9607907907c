use std::collections::{BTreeMap, BTreeSet};

use crate::{
    animation::{
        stagger::{ElementPhase, RevealSpec, StaggerGroup, StaggerStep},
        tween::RevealStyle,
    },
    event::MotionEvent,
    foundation::{
        core::{ElementId, Millis, Rect, Viewport},
        error::{ElevateError, ElevateResult},
    },
    observe::viewport::{ObservationId, ViewportObserver},
    reveal::RevealSetId,
};

/// What starts a reveal set.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealTrigger {
    /// Start `delay` after registration.
    OnMount,
    /// Start `delay` after `element` (with document `bounds`) enters the viewport.
    OnIntersect {
        element: ElementId,
        bounds: Rect,
        start_fraction: f64,
    },
}

/// Lifecycle of a whole reveal set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealStatus {
    /// Armed; waiting for its trigger, its delay, or its first stagger slot.
    Pending,
    Animating,
    Done,
    /// Disposed before finishing. Elements keep whatever style they had.
    Cancelled,
}

/// Disposer for one registration. Stale handles (from a replaced registration) do nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealHandle {
    set: RevealSetId,
    generation: u64,
}

impl RevealHandle {
    pub fn set(&self) -> &RevealSetId {
        &self.set
    }
}

#[derive(Clone, Debug)]
struct RevealInstance {
    generation: u64,
    spec: RevealSpec,
    group: StaggerGroup,
    status: RevealStatus,
    watch: Option<ObservationId>,
}

/// Runs every registered reveal set against the clock and the viewport.
#[derive(Clone, Debug)]
pub struct RevealAnimator {
    observer: ViewportObserver,
    sets: BTreeMap<RevealSetId, RevealInstance>,
    next_generation: u64,
}

impl RevealAnimator {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            observer: ViewportObserver::new(viewport),
            sets: BTreeMap::new(),
            next_generation: 0,
        }
    }

    /// Arm `elements` under `set`. A live instance registered under the same id is disposed
    /// first, so two animations never drive the same elements.
    #[tracing::instrument(skip(self, set, elements, trigger, spec, out), fields(set = %set))]
    pub fn register(
        &mut self,
        set: RevealSetId,
        elements: Vec<ElementId>,
        trigger: RevealTrigger,
        spec: RevealSpec,
        now: Millis,
        out: &mut Vec<MotionEvent>,
    ) -> ElevateResult<RevealHandle> {
        spec.validate()?;
        if elements.is_empty() {
            return Err(ElevateError::animation(format!(
                "reveal set '{set}' has no elements"
            )));
        }
        let mut seen = BTreeSet::new();
        if let Some(dup) = elements.iter().find(|e| !seen.insert(*e)) {
            return Err(ElevateError::animation(format!(
                "reveal set '{set}' lists '{dup}' twice"
            )));
        }

        let watch = match trigger {
            RevealTrigger::OnMount => None,
            RevealTrigger::OnIntersect {
                element,
                bounds,
                start_fraction,
            } => Some(self.observer.observe(element, bounds, start_fraction)?),
        };

        if let Some(previous) = self.sets.remove(&set) {
            tracing::debug!(generation = previous.generation, "replacing reveal set");
            self.cancel(&set, previous, out);
        }

        let generation = self.next_generation;
        self.next_generation += 1;

        let mut group = StaggerGroup::armed(elements, spec.from);
        if watch.is_none() {
            group.schedule(now + spec.delay, &spec);
        }
        self.sets.insert(
            set.clone(),
            RevealInstance {
                generation,
                spec,
                group,
                status: RevealStatus::Pending,
                watch,
            },
        );
        out.push(MotionEvent::RevealArmed { set: set.clone() });

        self.tick(now, out);
        Ok(RevealHandle { set, generation })
    }

    /// Cancel a registration immediately. Idempotent; returns `true` only when something was
    /// still pending or running. Element styles are left as they are.
    pub fn dispose(&mut self, handle: &RevealHandle, out: &mut Vec<MotionEvent>) -> bool {
        let Some(inst) = self.sets.get_mut(&handle.set) else {
            return false;
        };
        if inst.generation != handle.generation {
            return false;
        }
        if !matches!(inst.status, RevealStatus::Pending | RevealStatus::Animating) {
            return false;
        }
        inst.group.halt();
        if let Some(watch) = inst.watch.take() {
            self.observer.unobserve(watch);
        }
        inst.status = RevealStatus::Cancelled;
        out.push(MotionEvent::RevealCancelled {
            set: handle.set.clone(),
        });
        true
    }

    /// Dispose and forget a registration whose elements no longer exist.
    pub fn detach(&mut self, handle: &RevealHandle, out: &mut Vec<MotionEvent>) {
        self.dispose(handle, out);
        if self
            .sets
            .get(&handle.set)
            .is_some_and(|inst| inst.generation == handle.generation)
        {
            self.sets.remove(&handle.set);
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64, now: Millis, out: &mut Vec<MotionEvent>) {
        self.observer.set_scroll(scroll_y);
        self.tick(now, out);
    }

    pub fn on_resize(&mut self, viewport: Viewport, now: Millis, out: &mut Vec<MotionEvent>) {
        self.observer.set_viewport(viewport);
        self.tick(now, out);
    }

    pub fn tick(&mut self, now: Millis, out: &mut Vec<MotionEvent>) {
        self.poll_viewport(now, out);

        let mut steps = Vec::new();
        for (set, inst) in &mut self.sets {
            if !matches!(inst.status, RevealStatus::Pending | RevealStatus::Animating) {
                continue;
            }
            steps.clear();
            inst.group.tick(now, &mut steps);
            for step in steps.drain(..) {
                match step {
                    StaggerStep::Started(element) => {
                        if inst.status == RevealStatus::Pending {
                            inst.status = RevealStatus::Animating;
                            out.push(MotionEvent::RevealStarted { set: set.clone() });
                        }
                        out.push(MotionEvent::ElementRevealStarted {
                            set: set.clone(),
                            element,
                        });
                    }
                    StaggerStep::Finished(element) => {
                        out.push(MotionEvent::ElementRevealed {
                            set: set.clone(),
                            element,
                        });
                    }
                }
            }
            if inst.status == RevealStatus::Animating && inst.group.is_done() {
                inst.status = RevealStatus::Done;
                out.push(MotionEvent::RevealCompleted { set: set.clone() });
            }
        }
    }

    fn poll_viewport(&mut self, now: Millis, out: &mut Vec<MotionEvent>) {
        for entry in self.observer.evaluate() {
            let Some(inst) = self
                .sets
                .values_mut()
                .find(|inst| inst.watch == Some(entry.id))
            else {
                continue;
            };
            inst.watch = None;
            inst.group.schedule(now + inst.spec.delay, &inst.spec);
            out.push(MotionEvent::ViewportEntered {
                element: entry.element,
            });
        }
    }

    fn cancel(&mut self, set: &RevealSetId, mut inst: RevealInstance, out: &mut Vec<MotionEvent>) {
        if let Some(watch) = inst.watch.take() {
            self.observer.unobserve(watch);
        }
        if matches!(inst.status, RevealStatus::Pending | RevealStatus::Animating) {
            inst.group.halt();
            out.push(MotionEvent::RevealCancelled { set: set.clone() });
        }
    }

    pub fn status(&self, set: &RevealSetId) -> Option<RevealStatus> {
        self.sets.get(set).map(|inst| inst.status)
    }

    pub fn phases(&self, set: &RevealSetId) -> Vec<(ElementId, ElementPhase)> {
        self.sets
            .get(set)
            .map(|inst| {
                inst.group
                    .phases()
                    .map(|(id, phase)| (id.clone(), phase))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Current style of `element` in whichever set drives it.
    pub fn style_of(&self, element: &ElementId) -> Option<RevealStyle> {
        self.sets
            .values()
            .find_map(|inst| inst.group.style_of(element))
    }

    pub fn is_watching(&self, set: &RevealSetId) -> bool {
        self.sets
            .get(set)
            .and_then(|inst| inst.watch)
            .is_some_and(|watch| self.observer.is_pending(watch))
    }

    pub fn viewport(&self) -> Viewport {
        self.observer.viewport()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/animator.rs"]
mod tests;
