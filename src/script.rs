//! JSON input scripts: a start location plus a list of user steps, replayed against a [`Site`].

use crate::{
    config::MotionConfig,
    event::TimedEvent,
    foundation::{
        core::Viewport,
        error::{ElevateError, ElevateResult},
    },
    overlay::ClickTarget,
    pages::booking::BookingField,
    site::{Site, SiteSnapshot},
};

fn default_start() -> String {
    "/".to_owned()
}

fn default_strict() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum Step {
    Navigate {
        to: String,
    },
    Scroll {
        y: f64,
    },
    Resize {
        width: f64,
        height: f64,
    },
    ToggleMenu,
    OpenVideo {
        #[serde(default)]
        url: Option<String>,
    },
    CloseVideo,
    ClickVideo {
        target: ClickTarget,
    },
    Wait {
        ms: u64,
    },
    Rerender,
    FillBooking {
        field: BookingField,
        value: String,
    },
    SubmitBooking,
    ReturnFromConfirmation,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate { .. } => "navigate",
            Self::Scroll { .. } => "scroll",
            Self::Resize { .. } => "resize",
            Self::ToggleMenu => "toggle_menu",
            Self::OpenVideo { .. } => "open_video",
            Self::CloseVideo => "close_video",
            Self::ClickVideo { .. } => "click_video",
            Self::Wait { .. } => "wait",
            Self::Rerender => "rerender",
            Self::FillBooking { .. } => "fill_booking",
            Self::SubmitBooking => "submit_booking",
            Self::ReturnFromConfirmation => "return_from_confirmation",
        }
    }

    /// Apply this step. Steps that the site ignores (a locked scroll, a repeated open) are not
    /// errors.
    pub fn apply(&self, site: &mut Site) -> ElevateResult<()> {
        match self {
            Self::Navigate { to } => {
                site.navigate(to)?;
            }
            Self::Scroll { y } => {
                site.scroll_to(*y);
            }
            Self::Resize { width, height } => site.resize(Viewport::new(*width, *height)?)?,
            Self::ToggleMenu => site.toggle_menu(),
            Self::OpenVideo { url } => {
                site.open_video(url.as_deref());
            }
            Self::CloseVideo => {
                site.close_video();
            }
            Self::ClickVideo { target } => {
                site.click_video(*target);
            }
            Self::Wait { ms } => site.advance(*ms),
            Self::Rerender => {
                site.rerender()?;
            }
            Self::FillBooking { field, value } => site.fill_booking(*field, value)?,
            Self::SubmitBooking => {
                site.submit_booking()?;
            }
            Self::ReturnFromConfirmation => {
                site.return_from_confirmation()?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub config: Option<MotionConfig>,
    #[serde(default = "default_start")]
    pub start: String,
    /// When `false`, a failing step is recorded and the run continues.
    #[serde(default = "default_strict")]
    pub strict: bool,
    pub steps: Vec<Step>,
}

/// A step that failed in a non-strict run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepFailure {
    pub step: usize,
    pub name: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScenarioReport {
    pub events: Vec<TimedEvent>,
    pub failures: Vec<StepFailure>,
    #[serde(rename = "final")]
    pub final_state: SiteSnapshot,
}

impl Scenario {
    pub fn from_json_str(s: &str) -> ElevateResult<Self> {
        let scenario: Self = serde_json::from_str(s)?;
        if let Some(cfg) = &scenario.config {
            cfg.validate()?;
        }
        Ok(scenario)
    }

    /// Replay every step. `config` overrides the scenario's own configuration.
    #[tracing::instrument(skip_all, fields(steps = self.steps.len()))]
    pub fn run(&self, config: Option<&MotionConfig>) -> ElevateResult<ScenarioReport> {
        let cfg = config
            .or(self.config.as_ref())
            .cloned()
            .unwrap_or_default();
        let mut site = Site::open(cfg, &self.start)
            .map_err(|err| ElevateError::script(format!("start '{}': {err}", self.start)))?;

        let mut failures = Vec::new();
        for (i, step) in self.steps.iter().enumerate() {
            tracing::debug!(step = i, name = step.name(), at = %site.now(), "apply");
            if let Err(err) = step.apply(&mut site) {
                if self.strict {
                    return Err(ElevateError::script(format!(
                        "step {i} ({}): {err}",
                        step.name()
                    )));
                }
                tracing::warn!(step = i, name = step.name(), %err, "step failed");
                failures.push(StepFailure {
                    step: i,
                    name: step.name(),
                    message: err.to_string(),
                });
            }
        }

        Ok(ScenarioReport {
            final_state: site.snapshot(),
            events: site.drain_events(),
            failures,
        })
    }
}
