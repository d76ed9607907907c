use crate::{
    animation::{ease::Ease, tween::Tween},
    event::MotionEvent,
    foundation::core::Millis,
};

/// Visual mode of the fixed header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarMode {
    /// Transparent header at the top of the page.
    Collapsed,
    /// Dimmed, blurred header once the page has scrolled past the threshold.
    Scrolled,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavbarTiming {
    pub duration: Millis,
    pub ease: Ease,
}

impl Default for NavbarTiming {
    fn default() -> Self {
        Self {
            duration: Millis(500),
            ease: Ease::InOutCubic,
        }
    }
}

/// Header backdrop: `0.0` is fully transparent, `1.0` is the full dim + blur treatment.
#[derive(Clone, Debug)]
pub struct Navbar {
    timing: NavbarTiming,
    mode: NavbarMode,
    backdrop: f64,
    swap: Option<Tween<f64>>,
}

impl Navbar {
    pub fn new(timing: NavbarTiming) -> Self {
        Self {
            timing,
            mode: NavbarMode::Collapsed,
            backdrop: 0.0,
            swap: None,
        }
    }

    /// Follow the scroll threshold. Repeating the current mode does nothing; reversing mid-swap
    /// continues from the current backdrop value.
    pub fn set_scrolled(&mut self, scrolled: bool, now: Millis, out: &mut Vec<MotionEvent>) {
        let mode = if scrolled {
            NavbarMode::Scrolled
        } else {
            NavbarMode::Collapsed
        };
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        let target = if scrolled { 1.0 } else { 0.0 };
        self.swap = Some(Tween::new(
            self.backdrop,
            target,
            now,
            self.timing.duration,
            self.timing.ease,
        ));
        out.push(MotionEvent::NavbarModeChanged { mode });
    }

    pub fn tick(&mut self, now: Millis) {
        let Some(swap) = self.swap.as_ref() else {
            return;
        };
        self.backdrop = swap.sample(now);
        if swap.is_finished(now) {
            self.swap = None;
        }
    }

    pub fn mode(&self) -> NavbarMode {
        self.mode
    }

    pub fn backdrop(&self) -> f64 {
        self.backdrop
    }

    pub fn is_transitioning(&self) -> bool {
        self.swap.is_some()
    }
}
