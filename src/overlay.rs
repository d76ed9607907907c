//! Generic modal overlay (the site uses it for its video player).

use crate::{
    animation::{
        ease::Ease,
        tween::{ScaleStyle, Tween},
    },
    event::MotionEvent,
    foundation::core::Millis,
    lock::{LockOwner, ScrollLock},
};

/// Video the hero "watch" control opens when no other source is supplied.
pub const DEFAULT_VIDEO_URL: &str = "https://www.w3schools.com/html/mov_bbb.mp4";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Where a pointer press landed inside the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// The dimmed area around the content.
    Backdrop,
    /// The content panel itself; presses here stop before the backdrop.
    Content,
    CloseButton,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModalTiming {
    pub backdrop: Millis,
    #[serde(default = "default_backdrop_ease")]
    pub backdrop_ease: Ease,
    pub content: Millis,
    pub content_ease: Ease,
    pub content_from_scale: f64,
}

fn default_backdrop_ease() -> Ease {
    Ease::OutQuad
}

impl Default for ModalTiming {
    fn default() -> Self {
        Self {
            backdrop: Millis(300),
            backdrop_ease: default_backdrop_ease(),
            content: Millis(500),
            content_ease: Ease::BackOut { overshoot: 1.7 },
            content_from_scale: 0.8,
        }
    }
}

/// Open/close lifecycle for one overlay instance carrying a payload `P`.
#[derive(Clone, Debug)]
pub struct ModalController<P> {
    owner: LockOwner,
    timing: ModalTiming,
    phase: ModalPhase,
    payload: Option<P>,
    backdrop: f64,
    content: ScaleStyle,
    backdrop_tween: Option<Tween<f64>>,
    content_tween: Option<Tween<ScaleStyle>>,
}

impl<P> ModalController<P>
where
    P: Clone + PartialEq + std::fmt::Debug,
{
    pub fn new(owner: LockOwner, timing: ModalTiming) -> Self {
        let content = ScaleStyle {
            scale: timing.content_from_scale,
            opacity: 0.0,
        };
        Self {
            owner,
            timing,
            phase: ModalPhase::Closed,
            payload: None,
            backdrop: 0.0,
            content,
            backdrop_tween: None,
            content_tween: None,
        }
    }

    /// Start the entrance. Returns `false` (and does nothing) when already opening or open with
    /// an equal payload.
    pub fn open(
        &mut self,
        payload: P,
        now: Millis,
        lock: &mut ScrollLock,
        out: &mut Vec<MotionEvent>,
    ) -> bool {
        if matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
            && self.payload.as_ref() == Some(&payload)
        {
            tracing::debug!(owner = ?self.owner, "modal already open with this payload");
            return false;
        }

        lock.acquire(&self.owner, out);
        self.payload = Some(payload);
        self.backdrop_tween = Some(Tween::new(
            self.backdrop,
            1.0,
            now,
            self.timing.backdrop,
            self.timing.backdrop_ease,
        ));
        let hidden = ScaleStyle {
            scale: self.timing.content_from_scale,
            opacity: 0.0,
        };
        self.content = hidden;
        self.content_tween = Some(Tween::new(
            hidden,
            ScaleStyle {
                scale: 1.0,
                opacity: 1.0,
            },
            now,
            self.timing.content,
            self.timing.content_ease,
        ));
        self.set_phase(ModalPhase::Opening, out);
        out.push(MotionEvent::ModalEntranceStarted {
            owner: self.owner.clone(),
        });
        self.tick(now, lock, out);
        true
    }

    /// Start the exit fade. Returns `false` when already closing or closed.
    pub fn close(&mut self, now: Millis, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) -> bool {
        if matches!(self.phase, ModalPhase::Closed | ModalPhase::Closing) {
            return false;
        }
        self.content_tween = None;
        self.backdrop_tween = Some(Tween::new(
            self.backdrop,
            0.0,
            now,
            self.timing.backdrop,
            self.timing.backdrop_ease,
        ));
        self.set_phase(ModalPhase::Closing, out);
        self.tick(now, lock, out);
        true
    }

    /// Drop straight to `Closed` with no exit fade. Used when the page underneath goes away.
    pub fn force_close(&mut self, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        if self.phase == ModalPhase::Closed {
            return;
        }
        self.backdrop_tween = None;
        self.content_tween = None;
        self.backdrop = 0.0;
        self.payload = None;
        self.content = ScaleStyle {
            scale: self.timing.content_from_scale,
            opacity: 0.0,
        };
        self.set_phase(ModalPhase::Closed, out);
        lock.release(&self.owner, out);
    }

    /// Route a press. Content presses never reach the backdrop handler.
    pub fn click(
        &mut self,
        target: ClickTarget,
        now: Millis,
        lock: &mut ScrollLock,
        out: &mut Vec<MotionEvent>,
    ) -> bool {
        match target {
            ClickTarget::Content => false,
            ClickTarget::Backdrop | ClickTarget::CloseButton => self.close(now, lock, out),
        }
    }

    pub fn tick(&mut self, now: Millis, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        if let Some(tw) = self.backdrop_tween.as_ref() {
            self.backdrop = tw.sample(now);
            if tw.is_finished(now) {
                self.backdrop_tween = None;
            }
        }
        if let Some(tw) = self.content_tween.as_ref() {
            self.content = tw.sample(now);
            if tw.is_finished(now) {
                self.content_tween = None;
            }
        }

        let settled = self.backdrop_tween.is_none() && self.content_tween.is_none();
        match self.phase {
            ModalPhase::Opening if settled => self.set_phase(ModalPhase::Open, out),
            ModalPhase::Closing if settled => {
                self.payload = None;
                self.content = ScaleStyle {
                    scale: self.timing.content_from_scale,
                    opacity: 0.0,
                };
                self.set_phase(ModalPhase::Closed, out);
                lock.release(&self.owner, out);
            }
            _ => {}
        }
    }

    fn set_phase(&mut self, phase: ModalPhase, out: &mut Vec<MotionEvent>) {
        if phase == self.phase {
            return;
        }
        tracing::debug!(owner = ?self.owner, from = ?self.phase, to = ?phase, "modal phase");
        self.phase = phase;
        out.push(MotionEvent::ModalPhaseChanged {
            owner: self.owner.clone(),
            phase,
        });
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn backdrop_opacity(&self) -> f64 {
        self.backdrop
    }

    pub fn content_style(&self) -> ScaleStyle {
        self.content
    }

    /// Whether an entrance or exit is still interpolating.
    pub fn is_animating(&self) -> bool {
        self.backdrop_tween.is_some() || self.content_tween.is_some()
    }
}

#[cfg(test)]
#[path = "../tests/unit/overlay.rs"]
mod tests;
