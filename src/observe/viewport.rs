use std::collections::BTreeMap;

use crate::foundation::{
    core::{ElementId, Rect, Viewport},
    error::{ElevateError, ElevateResult},
};

/// Handle returned by [`ViewportObserver::observe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationId(pub u64);

/// One-shot notification that an observed element entered the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportEntry {
    pub id: ObservationId,
    pub element: ElementId,
}

#[derive(Clone, Debug)]
struct Observation {
    element: ElementId,
    bounds: Rect,
    start_fraction: f64,
}

impl Observation {
    /// `"top <fraction>"`: the element's top edge has reached `fraction` of the viewport height.
    fn has_entered(&self, scroll_y: f64, viewport: Viewport) -> bool {
        self.bounds.y0 - scroll_y <= viewport.height * self.start_fraction
    }
}

/// Watches element bounds (document coordinates) against the scrolled viewport.
///
/// Each observation fires at most once and is dropped when it fires, so an element that scrolls
/// out and back in is never reported twice.
#[derive(Clone, Debug)]
pub struct ViewportObserver {
    viewport: Viewport,
    scroll_y: f64,
    next_id: u64,
    pending: BTreeMap<ObservationId, Observation>,
}

impl ViewportObserver {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll_y: 0.0,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    pub fn observe(
        &mut self,
        element: ElementId,
        bounds: Rect,
        start_fraction: f64,
    ) -> ElevateResult<ObservationId> {
        if !(0.0..=1.0).contains(&start_fraction) {
            return Err(ElevateError::validation(format!(
                "intersection start fraction for '{element}' must be within [0, 1]"
            )));
        }
        let id = ObservationId(self.next_id);
        self.next_id += 1;
        self.pending.insert(
            id,
            Observation {
                element,
                bounds,
                start_fraction,
            },
        );
        Ok(id)
    }

    /// Cancel a pending observation. Returns `false` if it already fired or was cancelled.
    pub fn unobserve(&mut self, id: ObservationId) -> bool {
        self.pending.remove(&id).is_some()
    }

    pub fn is_pending(&self, id: ObservationId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        if scroll_y.is_finite() {
            self.scroll_y = scroll_y.max(0.0);
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Fire and drop every pending observation whose element has entered.
    pub fn evaluate(&mut self) -> Vec<ViewportEntry> {
        let (scroll_y, viewport) = (self.scroll_y, self.viewport);
        let entered: Vec<ObservationId> = self
            .pending
            .iter()
            .filter(|(_, obs)| obs.has_entered(scroll_y, viewport))
            .map(|(&id, _)| id)
            .collect();

        entered
            .into_iter()
            .filter_map(|id| {
                self.pending
                    .remove(&id)
                    .map(|obs| ViewportEntry {
                        id,
                        element: obs.element,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/observe/viewport.rs"]
mod tests;
