use std::collections::BTreeMap;

use crate::{
    animation::{ease::Ease, stagger::RevealSpec},
    config::MotionConfig,
    foundation::{
        core::{ElementId, Millis, Rect, Viewport},
        error::{ElevateError, ElevateResult},
    },
    observe::scrub::ScrubBinding,
    reveal::{RevealSetId, RevealTrigger},
    routing::Route,
};

/// Reveal set id of the booking page entrance; replayed whenever the form is shown again.
pub const BOOKING_REVEAL: &str = "book-items";

/// Layout width used for every synthetic page rectangle.
const PAGE_WIDTH: f64 = 1440.0;

/// Trigger as written in page content, before element bounds are resolved.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TriggerKind {
    OnMount,
    OnIntersect {
        trigger: ElementId,
        start_fraction: f64,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealDescriptor {
    pub id: RevealSetId,
    pub elements: Vec<ElementId>,
    pub trigger: TriggerKind,
    pub spec: RevealSpec,
}

impl RevealDescriptor {
    pub fn on_mount(id: &str, elements: &[&str], spec: RevealSpec) -> Self {
        Self {
            id: RevealSetId::new(id),
            elements: elements.iter().copied().map(ElementId::from).collect(),
            trigger: TriggerKind::OnMount,
            spec,
        }
    }

    pub fn on_intersect(mut self, trigger: &str, start_fraction: f64) -> Self {
        self.trigger = TriggerKind::OnIntersect {
            trigger: trigger.into(),
            start_fraction,
        };
        self
    }
}

/// Scroll-linked offset of `element` across the `trigger` section.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScrubDescriptor {
    pub element: ElementId,
    pub trigger: ElementId,
    pub from_y: f64,
    pub to_y: f64,
}

/// Document-space rectangles of the elements the motion layer touches.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct PageLayout {
    pub height: f64,
    pub elements: BTreeMap<ElementId, Rect>,
}

impl PageLayout {
    fn place(&mut self, id: &str, y0: f64, height: f64) -> f64 {
        let y1 = y0 + height;
        self.elements
            .insert(id.into(), Rect::new(0.0, y0, PAGE_WIDTH, y1));
        self.height = self.height.max(y1);
        y1
    }

    /// Place `ids` top to bottom starting at `top`, each `height` tall and `gap` apart.
    fn stack(&mut self, ids: &[&str], top: f64, height: f64, gap: f64) -> f64 {
        ids.iter()
            .fold(top, |y, id| self.place(id, y, height) + gap)
    }
}

/// Everything mounted for one route.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageDescriptor {
    pub route: Route,
    pub reveals: Vec<RevealDescriptor>,
    pub scrubs: Vec<ScrubDescriptor>,
    pub layout: PageLayout,
}

impl PageDescriptor {
    pub fn bounds(&self, element: &ElementId) -> Option<Rect> {
        self.layout.elements.get(element).copied()
    }

    pub fn reveal(&self, id: &RevealSetId) -> Option<&RevealDescriptor> {
        self.reveals.iter().find(|r| &r.id == id)
    }

    /// Furthest the document can scroll in `viewport`.
    pub fn max_scroll(&self, viewport: Viewport) -> f64 {
        (self.layout.height - viewport.height).max(0.0)
    }

    pub fn resolve_trigger(&self, reveal: &RevealDescriptor) -> ElevateResult<RevealTrigger> {
        match &reveal.trigger {
            TriggerKind::OnMount => Ok(RevealTrigger::OnMount),
            TriggerKind::OnIntersect {
                trigger,
                start_fraction,
            } => Ok(RevealTrigger::OnIntersect {
                element: trigger.clone(),
                bounds: self.require_bounds(trigger)?,
                start_fraction: *start_fraction,
            }),
        }
    }

    pub fn resolve_scrub(&self, scrub: &ScrubDescriptor) -> ElevateResult<ScrubBinding> {
        Ok(ScrubBinding {
            element: scrub.element.clone(),
            trigger: self.require_bounds(&scrub.trigger)?,
            from_y: scrub.from_y,
            to_y: scrub.to_y,
        })
    }

    fn require_bounds(&self, element: &ElementId) -> ElevateResult<Rect> {
        self.bounds(element).ok_or_else(|| {
            ElevateError::validation(format!(
                "page '{}' has no layout for '{element}'",
                self.route
            ))
        })
    }
}

/// The fade-up used by every inner page: rise 40px over one second.
fn inner_page_spec(stagger: u64) -> RevealSpec {
    RevealSpec::fade_up(40.0, Millis(1000), Ease::OutQuart).with_stagger(Millis(stagger))
}

/// Build the descriptor for `route`. Hero sizes follow the configured viewport height.
pub fn page(route: Route, cfg: &MotionConfig) -> PageDescriptor {
    let mut layout = PageLayout::default();
    let vh = cfg.viewport.height;

    let (reveals, scrubs) = match route {
        Route::Home => {
            layout.place("hero", 0.0, vh);
            layout.place("hero-img", 0.0, vh);
            layout.place("hero-title", vh * 0.3, vh * 0.4);
            layout.place("hero-cta-book", vh * 0.75, 64.0);
            let grid_top = vh + 120.0;
            let grid_bottom = layout.place("grid", grid_top, 640.0);
            for id in ["grid-specializations", "grid-philosophy", "grid-cta"] {
                layout.place(id, grid_top, 640.0);
            }
            layout.place("mentors", grid_bottom + 160.0, 900.0);
            layout.height += 400.0;

            let reveals = vec![
                RevealDescriptor::on_mount(
                    "home-hero-title",
                    &["hero-title"],
                    RevealSpec::fade_up(100.0, Millis(1500), Ease::OutQuint)
                        .with_delay(Millis(300)),
                ),
                RevealDescriptor::on_mount(
                    "home-hero-cta",
                    &["hero-cta-book"],
                    RevealSpec::fade_up(30.0, Millis(1000), Ease::OutQuart)
                        .with_stagger(Millis(200))
                        .with_delay(Millis(1000)),
                ),
                RevealDescriptor::on_mount(
                    "home-grid",
                    &["grid-specializations", "grid-philosophy", "grid-cta"],
                    RevealSpec::fade_up(40.0, Millis(1000), Ease::OutCubic)
                        .with_stagger(Millis(100)),
                )
                .on_intersect("grid", cfg.intersect_start),
            ];
            let scrubs = vec![ScrubDescriptor {
                element: "hero-img".into(),
                trigger: "hero".into(),
                from_y: 0.0,
                to_y: 150.0,
            }];
            (reveals, scrubs)
        }
        Route::Vision => {
            let ids = [
                "vision-header",
                "vision-pillar-cognitive",
                "vision-pillar-somatic",
                "vision-pillar-stoic",
                "vision-section",
            ];
            layout.stack(&ids, 160.0, 420.0, 96.0);
            layout.height += 320.0;
            (
                vec![RevealDescriptor::on_mount(
                    "vision-items",
                    &ids,
                    inner_page_spec(200),
                )],
                Vec::new(),
            )
        }
        Route::About => {
            let ids = [
                "about-intro",
                "about-portrait",
                "about-heading",
                "about-pillar-transparency",
                "about-pillar-neuro",
                "about-pillar-exclusivity",
                "about-pillar-sustainability",
            ];
            layout.stack(&ids, 160.0, 320.0, 64.0);
            layout.height += 320.0;
            (
                vec![RevealDescriptor::on_mount(
                    "about-items",
                    &ids,
                    inner_page_spec(150),
                )],
                Vec::new(),
            )
        }
        Route::Journey => {
            let ids = [
                "journey-header",
                "journey-step-deconstruction",
                "journey-step-repatterning",
                "journey-step-flow",
                "journey-step-leadership",
                "journey-cta",
            ];
            layout.stack(&ids, 160.0, 480.0, 96.0);
            layout.height += 320.0;
            (
                vec![RevealDescriptor::on_mount(
                    "journey-items",
                    &ids,
                    inner_page_spec(150),
                )],
                Vec::new(),
            )
        }
        Route::Programs => {
            let ids = [
                "programs-header",
                "program-visionary",
                "program-collective",
                "program-retreat",
                "programs-lab",
            ];
            layout.stack(&ids, 160.0, 560.0, 96.0);
            layout.height += 320.0;
            (
                vec![RevealDescriptor::on_mount(
                    "programs-items",
                    &ids,
                    inner_page_spec(150),
                )],
                Vec::new(),
            )
        }
        Route::Book => {
            let ids = ["booking-copy", "booking-form"];
            layout.stack(&ids, 128.0, 900.0, 64.0);
            layout.height += 160.0;
            (
                vec![RevealDescriptor::on_mount(
                    BOOKING_REVEAL,
                    &ids,
                    inner_page_spec(150),
                )],
                Vec::new(),
            )
        }
    };

    PageDescriptor {
        route,
        reveals,
        scrubs,
        layout,
    }
}
