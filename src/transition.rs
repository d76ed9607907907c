use crate::{
    animation::{ease::Ease, tween::Tween},
    event::MotionEvent,
    foundation::core::Millis,
    routing::Route,
};

/// Duration and curve of the main-region fade played on every route change.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FadeTiming {
    pub duration: Millis,
    pub ease: Ease,
}

impl Default for FadeTiming {
    fn default() -> Self {
        Self {
            duration: Millis(500),
            ease: Ease::OutCubic,
        }
    }
}

/// Fades the main content region in on each route change.
///
/// Every `begin` restarts from fully transparent and cancels the previous fade, so back-to-back
/// navigations always end on a fade that runs to full opacity.
#[derive(Clone, Debug)]
pub struct PageTransition {
    timing: FadeTiming,
    active: Option<(Route, Tween<f64>)>,
    opacity: f64,
}

impl PageTransition {
    pub fn new(timing: FadeTiming) -> Self {
        Self {
            timing,
            active: None,
            opacity: 1.0,
        }
    }

    pub fn begin(&mut self, route: Route, now: Millis, out: &mut Vec<MotionEvent>) {
        if let Some((previous, _)) = self.active.take() {
            tracing::debug!(?previous, ?route, "restarting page fade");
            out.push(MotionEvent::PageFadeCancelled { route: previous });
        }
        self.opacity = 0.0;
        self.active = Some((
            route,
            Tween::new(0.0, 1.0, now, self.timing.duration, self.timing.ease),
        ));
        out.push(MotionEvent::PageFadeStarted { route });
        self.tick(now, out);
    }

    pub fn tick(&mut self, now: Millis, out: &mut Vec<MotionEvent>) {
        let Some((route, fade)) = self.active.as_ref() else {
            return;
        };
        self.opacity = fade.sample(now);
        if fade.is_finished(now) {
            out.push(MotionEvent::PageFadeCompleted { route: *route });
            self.active = None;
        }
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.active.is_some()
    }
}
