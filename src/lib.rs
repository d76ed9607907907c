#![forbid(unsafe_code)]

pub mod animation;
pub mod chrome;
pub mod config;
pub mod event;
pub mod foundation;
pub mod lock;
pub mod observe;
pub mod overlay;
pub mod pages;
pub mod reveal;
pub mod routing;
pub mod script;
pub mod site;
pub mod transition;

pub use animation::{
    ease::Ease,
    stagger::{ElementPhase, RevealSpec, StaggerGroup},
    tween::{Lerp, RevealStyle, ScaleStyle, Tween},
};
pub use chrome::{NavChrome, menu::MenuPhase, navbar::NavbarMode};
pub use config::MotionConfig;
pub use event::{MotionEvent, TimedEvent};
pub use foundation::core::{ElementId, Millis, Rect, Viewport};
pub use foundation::error::{ElevateError, ElevateResult};
pub use lock::{LockOwner, ScrollLock};
pub use observe::{
    scroll::{ScrollObserver, ScrollState},
    scrub::ScrubBinding,
    viewport::ViewportObserver,
};
pub use overlay::{ClickTarget, ModalController, ModalPhase};
pub use pages::{BookingField, BookingView, FocusArea, PageDescriptor};
pub use reveal::{RevealAnimator, RevealHandle, RevealSetId, RevealStatus, RevealTrigger};
pub use routing::Route;
pub use script::{Scenario, ScenarioReport, Step};
pub use site::{ElementStyle, Site, SiteSnapshot};
