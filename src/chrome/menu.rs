use crate::{
    animation::{
        ease::Ease,
        stagger::{RevealSpec, StaggerGroup, StaggerStep},
        tween::{RevealStyle, Tween},
    },
    event::MotionEvent,
    foundation::core::{ElementId, Millis},
    lock::{LockOwner, ScrollLock},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Timings for the full-screen mobile menu.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MenuTiming {
    /// Full clip reveal, radius 0 to `open_radius`.
    pub open: Millis,
    /// Full clip collapse, `open_radius` to 0.
    pub close: Millis,
    pub ease: Ease,
    /// Clip circle radius (percent) that covers the viewport from the top-right corner.
    pub open_radius: f64,
    /// Link entrance; its `delay` counts from the moment the clip reveal completes.
    pub links: RevealSpec,
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            open: Millis(800),
            close: Millis(600),
            ease: Ease::InOutQuint,
            open_radius: 150.0,
            links: RevealSpec::fade_up(50.0, Millis(500), Ease::OutCubic)
                .with_stagger(Millis(100))
                .with_delay(Millis(300)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LinksState {
    Idle,
    Scheduled,
    Running,
    Done,
}

/// Mobile menu overlay: circular clip reveal anchored at the top-right corner, then a staggered
/// link entrance. Holds the scroll lock from the start of opening until closing completes.
#[derive(Clone, Debug)]
pub struct MobileMenu {
    timing: MenuTiming,
    owner: LockOwner,
    phase: MenuPhase,
    radius: f64,
    clip: Option<Tween<f64>>,
    links: StaggerGroup,
    links_state: LinksState,
}

impl MobileMenu {
    pub fn new(timing: MenuTiming, links: Vec<ElementId>) -> Self {
        let links = StaggerGroup::armed(links, timing.links.from);
        Self {
            timing,
            owner: LockOwner::NavMenu,
            phase: MenuPhase::Closed,
            radius: 0.0,
            clip: None,
            links,
            links_state: LinksState::Idle,
        }
    }

    /// Open when closed or closing, close when open or opening. Mid-flight toggles reverse from
    /// the current clip radius.
    pub fn toggle(&mut self, now: Millis, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        match self.phase {
            MenuPhase::Closed | MenuPhase::Closing => self.begin_open(now, lock, out),
            MenuPhase::Opening | MenuPhase::Open => self.begin_close(now, lock, out),
        }
    }

    /// Snap shut without an exit animation (used on navigation).
    pub fn force_close(&mut self, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        if self.phase == MenuPhase::Closed && !lock.holds(&self.owner) {
            return;
        }
        self.finish_close(lock, out);
    }

    pub fn tick(&mut self, now: Millis, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        if let Some(clip) = self.clip.as_ref() {
            self.radius = clip.sample(now);
            let (finished, clip_end) = (clip.is_finished(now), clip.end());
            if finished {
                self.clip = None;
                match self.phase {
                    MenuPhase::Opening => {
                        self.set_phase(MenuPhase::Open, out);
                        if self.links_state == LinksState::Idle {
                            self.links
                                .schedule(clip_end + self.timing.links.delay, &self.timing.links);
                            self.links_state = LinksState::Scheduled;
                        }
                    }
                    MenuPhase::Closing => self.finish_close(lock, out),
                    MenuPhase::Closed | MenuPhase::Open => {}
                }
            }
        }

        if matches!(
            self.links_state,
            LinksState::Scheduled | LinksState::Running
        ) {
            let mut steps = Vec::new();
            self.links.tick(now, &mut steps);
            if self.links_state == LinksState::Scheduled
                && steps.iter().any(|s| matches!(s, StaggerStep::Started(_)))
            {
                self.links_state = LinksState::Running;
                out.push(MotionEvent::MenuLinksStarted);
            }
            if self.links_state == LinksState::Running && self.links.is_done() {
                self.links_state = LinksState::Done;
                out.push(MotionEvent::MenuLinksCompleted);
            }
        }
    }

    fn begin_open(&mut self, now: Millis, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        lock.acquire(&self.owner, out);
        let full = self.timing.open_radius;
        let remaining = ((full - self.radius) / full).clamp(0.0, 1.0);
        self.clip = Some(Tween::new(
            self.radius,
            full,
            now,
            self.timing.open.scale(remaining),
            self.timing.ease,
        ));
        self.set_phase(MenuPhase::Opening, out);
        self.tick(now, lock, out);
    }

    fn begin_close(&mut self, now: Millis, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        // Links hide at once; reopening schedules them again after the clip completes.
        self.links.rearm(self.timing.links.from);
        self.links_state = LinksState::Idle;
        let remaining = (self.radius / self.timing.open_radius).clamp(0.0, 1.0);
        let duration = self.timing.close.scale(remaining);
        if duration == Millis::ZERO {
            self.finish_close(lock, out);
            return;
        }
        self.clip = Some(Tween::new(
            self.radius,
            0.0,
            now,
            duration,
            self.timing.ease,
        ));
        self.set_phase(MenuPhase::Closing, out);
        self.tick(now, lock, out);
    }

    fn finish_close(&mut self, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        self.clip = None;
        self.radius = 0.0;
        self.links.rearm(self.timing.links.from);
        self.links_state = LinksState::Idle;
        self.set_phase(MenuPhase::Closed, out);
        lock.release(&self.owner, out);
    }

    fn set_phase(&mut self, phase: MenuPhase, out: &mut Vec<MotionEvent>) {
        if phase == self.phase {
            return;
        }
        tracing::debug!(from = ?self.phase, to = ?phase, radius = self.radius, "menu phase");
        self.phase = phase;
        out.push(MotionEvent::MenuPhaseChanged { phase });
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// Current clip radius in percent.
    pub fn clip_radius(&self) -> f64 {
        self.radius
    }

    /// CSS clip-path for the overlay.
    pub fn clip_path(&self) -> String {
        format!("circle({:.2}% at 100% 0%)", self.radius)
    }

    pub fn link_style(&self, index: usize) -> Option<RevealStyle> {
        self.links.style_at(index)
    }

    pub fn links_visible(&self) -> bool {
        self.links_state == LinksState::Done
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chrome/menu.rs"]
mod tests;
