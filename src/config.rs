use crate::{
    chrome::{menu::MenuTiming, navbar::NavbarTiming},
    foundation::{
        core::{Millis, Viewport},
        error::{ElevateError, ElevateResult},
    },
    overlay::ModalTiming,
    transition::FadeTiming,
};

/// Every timing constant the site runs with. Missing JSON fields fall back to the defaults, which
/// match the production site.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub viewport: Viewport,
    /// Clock step used by `Site::advance`.
    pub frame: Millis,
    /// Scroll offset (px) past which the navbar switches to its scrolled mode.
    pub scroll_threshold: f64,
    pub page_fade: FadeTiming,
    pub navbar: NavbarTiming,
    pub menu: MenuTiming,
    pub modal: ModalTiming,
    /// Fraction of the viewport height at which scroll-triggered reveals fire (`"top 85%"`).
    pub intersect_start: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            frame: Millis(16),
            scroll_threshold: 50.0,
            page_fade: FadeTiming::default(),
            navbar: NavbarTiming::default(),
            menu: MenuTiming::default(),
            modal: ModalTiming::default(),
            intersect_start: 0.85,
        }
    }
}

impl MotionConfig {
    pub fn from_json_str(s: &str) -> ElevateResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ElevateResult<()> {
        self.viewport.validate()?;
        if self.frame == Millis::ZERO {
            return Err(ElevateError::validation("frame step must be > 0ms"));
        }
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(ElevateError::validation(
                "scroll_threshold must be finite and >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.intersect_start) {
            return Err(ElevateError::validation(
                "intersect_start must be within [0, 1]",
            ));
        }

        for (name, d) in [
            ("page_fade.duration", self.page_fade.duration),
            ("navbar.duration", self.navbar.duration),
            ("menu.open", self.menu.open),
            ("menu.close", self.menu.close),
            ("menu.links.duration", self.menu.links.duration),
            ("modal.backdrop", self.modal.backdrop),
            ("modal.content", self.modal.content),
        ] {
            if d == Millis::ZERO {
                return Err(ElevateError::validation(format!("{name} must be > 0ms")));
            }
        }

        if !self.menu.open_radius.is_finite() || self.menu.open_radius <= 0.0 {
            return Err(ElevateError::validation(
                "menu.open_radius must be finite and > 0",
            ));
        }
        self.menu.links.validate()?;
        let s = self.modal.content_from_scale;
        if !s.is_finite() || s < 0.0 {
            return Err(ElevateError::validation(
                "modal.content_from_scale must be finite and >= 0",
            ));
        }
        Ok(())
    }
}
