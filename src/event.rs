use crate::{
    chrome::{menu::MenuPhase, navbar::NavbarMode},
    foundation::core::{ElementId, Millis},
    lock::LockOwner,
    overlay::ModalPhase,
    reveal::RevealSetId,
    routing::Route,
};

/// Externally observable transitions, in the order they happen.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MotionEvent {
    RouteChanged {
        from: Option<Route>,
        to: Route,
    },
    NavigationRejected {
        path: String,
    },
    ScrollReset,
    Scrolled {
        offset_y: f64,
    },
    NavbarModeChanged {
        mode: NavbarMode,
    },
    PageFadeStarted {
        route: Route,
    },
    PageFadeCancelled {
        route: Route,
    },
    PageFadeCompleted {
        route: Route,
    },
    PageMounted {
        route: Route,
    },
    PageUnmounted {
        route: Route,
    },
    ViewportEntered {
        element: ElementId,
    },
    RevealArmed {
        set: RevealSetId,
    },
    RevealStarted {
        set: RevealSetId,
    },
    ElementRevealStarted {
        set: RevealSetId,
        element: ElementId,
    },
    ElementRevealed {
        set: RevealSetId,
        element: ElementId,
    },
    RevealCompleted {
        set: RevealSetId,
    },
    RevealCancelled {
        set: RevealSetId,
    },
    MenuPhaseChanged {
        phase: MenuPhase,
    },
    MenuLinksStarted,
    MenuLinksCompleted,
    ModalPhaseChanged {
        owner: LockOwner,
        phase: ModalPhase,
    },
    ModalEntranceStarted {
        owner: LockOwner,
    },
    ScrollLockChanged {
        locked: bool,
    },
    BookingSubmitted,
    BookingReset,
}

/// A [`MotionEvent`] stamped with the clock time it was emitted at.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimedEvent {
    pub at: Millis,
    #[serde(flatten)]
    pub event: MotionEvent,
}

impl std::fmt::Display for TimedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = serde_json::to_value(&self.event).map_err(|_| std::fmt::Error)?;
        let name = body
            .get("event")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        write!(f, "{:>7} {name}", self.at.to_string())?;
        if let Some(fields) = body.as_object() {
            for (k, v) in fields.iter().filter(|(k, _)| k.as_str() != "event") {
                write!(f, " {k}={v}")?;
            }
        }
        Ok(())
    }
}
