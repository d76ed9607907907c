use crate::foundation::core::{ElementId, Rect};

/// Scroll-linked offset: `element` moves from `from_y` to `to_y` while the trigger section scrolls
/// from "top top" (its top at the viewport top) to "bottom top" (its bottom at the viewport top).
///
/// There is no clock involved; the value is a pure function of the scroll offset.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrubBinding {
    pub element: ElementId,
    pub trigger: Rect,
    pub from_y: f64,
    pub to_y: f64,
}

impl ScrubBinding {
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let (start, end) = (self.trigger.y0, self.trigger.y1);
        if end <= start {
            return if scroll_y >= start { 1.0 } else { 0.0 };
        }
        ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }

    pub fn offset_at(&self, scroll_y: f64) -> f64 {
        self.from_y + (self.to_y - self.from_y) * self.progress(scroll_y)
    }
}
