//! The running site: one owner for every motion component, driven by input calls and a virtual
//! clock.
//!
//! Input calls (`navigate`, `scroll_to`, `toggle_menu`, ...) apply their side effects
//! synchronously at the current time. [`Site::advance`] moves the clock forward in frame steps
//! and ticks every component in a fixed order: reveals, page fade, chrome, overlay. Everything
//! observable lands in one ordered event log.

use crate::{
    animation::tween::RevealStyle,
    chrome::{NavChrome, menu::MenuPhase, navbar::NavbarMode},
    config::MotionConfig,
    event::{MotionEvent, TimedEvent},
    foundation::{
        core::{ElementId, Millis, Viewport},
        error::{ElevateError, ElevateResult},
    },
    lock::{LockOwner, ScrollLock},
    observe::{
        scroll::{ScrollObserver, ScrollState, SubscriptionId},
        scrub::ScrubBinding,
    },
    overlay::{ClickTarget, DEFAULT_VIDEO_URL, ModalController, ModalPhase},
    pages::{
        booking::{BookingField, BookingFlow, BookingRequest, BookingView},
        catalog::{self, BOOKING_REVEAL, PageDescriptor, RevealDescriptor},
    },
    reveal::{RevealAnimator, RevealHandle, RevealSetId, RevealStatus},
    routing::{self, NAV_LINKS, NavLink, Route},
    transition::PageTransition,
};

/// Lock owner name of the video overlay.
pub const VIDEO_OVERLAY: &str = "video";

/// Resolved style of one element: reveal offset plus any scroll-linked offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ElementStyle {
    pub y: f64,
    pub opacity: f64,
}

/// Point-in-time view of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SiteSnapshot {
    pub at: Millis,
    pub route: Option<Route>,
    pub scroll: ScrollState,
    pub main_opacity: f64,
    pub navbar_mode: NavbarMode,
    /// Label of the highlighted header link, if the current page has one.
    pub active_link: Option<&'static str>,
    pub navbar_backdrop: f64,
    pub menu_phase: MenuPhase,
    pub menu_clip: String,
    pub modal_phase: ModalPhase,
    pub scroll_locked: bool,
    pub elements: Vec<(ElementId, ElementStyle)>,
}

#[derive(Clone, Debug)]
struct MountedPage {
    descriptor: PageDescriptor,
    handles: Vec<RevealHandle>,
    scrubs: Vec<ScrubBinding>,
}

impl MountedPage {
    fn has_live(&self, set: &RevealSetId) -> bool {
        self.handles.iter().any(|h| h.set() == set)
    }

    fn take_handle(&mut self, set: &RevealSetId) -> Option<RevealHandle> {
        let pos = self.handles.iter().position(|h| h.set() == set)?;
        Some(self.handles.remove(pos))
    }
}

pub struct Site {
    cfg: MotionConfig,
    now: Millis,
    route: Option<Route>,
    scroll: ScrollObserver,
    navbar_watch: SubscriptionId,
    lock: ScrollLock,
    reveals: RevealAnimator,
    transition: PageTransition,
    chrome: NavChrome,
    video: ModalController<String>,
    booking: BookingFlow,
    page: Option<MountedPage>,
    log: Vec<TimedEvent>,
}

impl Site {
    /// A site with nothing mounted yet. Call [`Self::navigate`] to show the first page.
    pub fn new(cfg: MotionConfig) -> ElevateResult<Self> {
        cfg.validate()?;
        let mut scroll = ScrollObserver::new();
        let navbar_watch = scroll.subscribe(cfg.scroll_threshold)?;
        Ok(Self {
            now: Millis::ZERO,
            route: None,
            scroll,
            navbar_watch,
            lock: ScrollLock::new(),
            reveals: RevealAnimator::new(cfg.viewport),
            transition: PageTransition::new(cfg.page_fade),
            chrome: NavChrome::new(cfg.navbar, cfg.menu.clone()),
            video: ModalController::new(LockOwner::Overlay(VIDEO_OVERLAY.into()), cfg.modal),
            booking: BookingFlow::new(),
            page: None,
            log: Vec::new(),
            cfg,
        })
    }

    /// Create the site and land on `location`.
    pub fn open(cfg: MotionConfig, location: &str) -> ElevateResult<Self> {
        let mut site = Self::new(cfg)?;
        site.navigate(location)?;
        Ok(site)
    }

    /// Change route. Scroll reset, fade restart, menu and overlay shutdown, and the page swap all
    /// happen here before any tick. Returns `false` when `location` is the current route.
    #[tracing::instrument(skip(self), fields(at = %self.now))]
    pub fn navigate(&mut self, location: &str) -> ElevateResult<bool> {
        let route = match Route::parse(location) {
            Ok(route) => route,
            Err(err) => {
                tracing::warn!(location, "navigation rejected");
                self.record(vec![MotionEvent::NavigationRejected {
                    path: location.to_owned(),
                }]);
                return Err(err);
            }
        };
        if self.route == Some(route) {
            tracing::debug!(%route, "already showing route");
            return Ok(false);
        }

        let mut out = vec![MotionEvent::RouteChanged {
            from: self.route,
            to: route,
        }];
        self.route = Some(route);

        out.push(MotionEvent::ScrollReset);
        self.apply_scroll(0.0, &mut out);
        self.transition.begin(route, self.now, &mut out);
        self.chrome.on_navigate(&mut self.lock, &mut out);
        self.video.force_close(&mut self.lock, &mut out);
        self.unmount(&mut out);
        let mounted = self.mount(route, &mut out);

        self.record(out);
        mounted.map(|()| true)
    }

    /// User scroll. Ignored (returns `false`) while the scroll lock is held; otherwise clamped to
    /// the page extent.
    pub fn scroll_to(&mut self, offset_y: f64) -> bool {
        if self.lock.is_locked() {
            tracing::debug!(offset_y, "scroll suppressed by lock");
            return false;
        }
        if !offset_y.is_finite() {
            return false;
        }
        let y = offset_y.clamp(0.0, self.max_scroll());
        if y == self.scroll.offset_y() {
            return true;
        }
        let mut out = vec![MotionEvent::Scrolled { offset_y: y }];
        self.apply_scroll(y, &mut out);
        self.reveals.on_scroll(y, self.now, &mut out);
        self.record(out);
        true
    }

    pub fn resize(&mut self, viewport: Viewport) -> ElevateResult<()> {
        viewport.validate()?;
        self.cfg.viewport = viewport;
        let mut out = Vec::new();
        let max = self.max_scroll();
        if self.scroll.offset_y() > max {
            out.push(MotionEvent::Scrolled { offset_y: max });
            self.apply_scroll(max, &mut out);
            self.reveals.on_scroll(max, self.now, &mut out);
        }
        self.reveals.on_resize(viewport, self.now, &mut out);
        self.record(out);
        Ok(())
    }

    pub fn toggle_menu(&mut self) {
        let mut out = Vec::new();
        self.chrome.toggle_menu(self.now, &mut self.lock, &mut out);
        self.record(out);
    }

    /// Open the video overlay on `url`, or on the default video.
    pub fn open_video(&mut self, url: Option<&str>) -> bool {
        let url = url.unwrap_or(DEFAULT_VIDEO_URL).to_owned();
        let mut out = Vec::new();
        let opened = self.video.open(url, self.now, &mut self.lock, &mut out);
        self.record(out);
        opened
    }

    pub fn close_video(&mut self) -> bool {
        let mut out = Vec::new();
        let closed = self.video.close(self.now, &mut self.lock, &mut out);
        self.record(out);
        closed
    }

    pub fn click_video(&mut self, target: ClickTarget) -> bool {
        let mut out = Vec::new();
        let closed = self.video.click(target, self.now, &mut self.lock, &mut out);
        self.record(out);
        closed
    }

    /// Move the clock forward by `ms`, ticking once per frame step (the last step may be shorter).
    pub fn advance(&mut self, ms: u64) {
        let end = self.now + Millis(ms);
        while self.now < end {
            let step = self.cfg.frame.min(end.saturating_sub(self.now));
            self.now = self.now + step;
            self.tick();
        }
    }

    fn tick(&mut self) {
        let mut out = Vec::new();
        self.reveals.tick(self.now, &mut out);
        self.transition.tick(self.now, &mut out);
        self.chrome.tick(self.now, &mut self.lock, &mut out);
        self.video.tick(self.now, &mut self.lock, &mut out);
        self.record(out);
    }

    /// Re-render the mounted page. Mount effects already armed stay as they are; only sets that
    /// should be live but are not get armed. Returns how many were armed.
    pub fn rerender(&mut self) -> ElevateResult<usize> {
        let Some(page) = self.page.as_mut() else {
            return Ok(0);
        };
        let confirming = self.booking.view() == BookingView::Confirmation;
        let mut out = Vec::new();
        let mut armed = 0;
        let mut result = Ok(());
        for reveal in &page.descriptor.reveals {
            if page.has_live(&reveal.id) || (confirming && reveal.id.0 == BOOKING_REVEAL) {
                continue;
            }
            match arm(&mut self.reveals, &page.descriptor, reveal, self.now, &mut out) {
                Ok(handle) => {
                    page.handles.push(handle);
                    armed += 1;
                }
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }
        self.record(out);
        result.map(|()| armed)
    }

    pub fn fill_booking(&mut self, field: BookingField, value: &str) -> ElevateResult<()> {
        self.require_route(Route::Book)?;
        self.booking.fill(field, value)
    }

    /// Submit the booking form. The form and its entrance go away; the confirmation view shows.
    pub fn submit_booking(&mut self) -> ElevateResult<BookingRequest> {
        self.require_route(Route::Book)?;
        let request = self.booking.submit()?.clone();
        tracing::info!(focus = %request.focus, "booking submitted");

        let mut out = Vec::new();
        if let Some(handle) = self
            .page
            .as_mut()
            .and_then(|p| p.take_handle(&RevealSetId::new(BOOKING_REVEAL)))
        {
            self.reveals.detach(&handle, &mut out);
        }
        out.push(MotionEvent::BookingSubmitted);
        self.record(out);
        Ok(request)
    }

    /// Leave the confirmation view for a fresh form and replay the booking entrance. Returns
    /// `false` when the form is already shown.
    pub fn return_from_confirmation(&mut self) -> ElevateResult<bool> {
        self.require_route(Route::Book)?;
        if !self.booking.return_to_form() {
            return Ok(false);
        }
        let mut out = vec![MotionEvent::BookingReset];
        let mut result = Ok(());
        if let Some(page) = self.page.as_mut()
            && let Some(reveal) = page.descriptor.reveal(&RevealSetId::new(BOOKING_REVEAL))
        {
            match arm(&mut self.reveals, &page.descriptor, reveal, self.now, &mut out) {
                Ok(handle) => page.handles.push(handle),
                Err(err) => result = Err(err),
            }
        }
        self.record(out);
        result.map(|()| true)
    }

    fn require_route(&self, route: Route) -> ElevateResult<()> {
        if self.route != Some(route) {
            return Err(ElevateError::validation(format!(
                "{route} is not the current page"
            )));
        }
        Ok(())
    }

    fn apply_scroll(&mut self, offset_y: f64, out: &mut Vec<MotionEvent>) {
        for change in self.scroll.update(offset_y) {
            if change.subscription == self.navbar_watch {
                self.chrome.on_threshold(change.scrolled, self.now, out);
            }
        }
    }

    fn unmount(&mut self, out: &mut Vec<MotionEvent>) {
        let Some(page) = self.page.take() else {
            return;
        };
        for handle in &page.handles {
            self.reveals.detach(handle, out);
        }
        out.push(MotionEvent::PageUnmounted {
            route: page.descriptor.route,
        });
    }

    fn mount(&mut self, route: Route, out: &mut Vec<MotionEvent>) -> ElevateResult<()> {
        let descriptor = catalog::page(route, &self.cfg);
        let scrubs = descriptor
            .scrubs
            .iter()
            .map(|s| descriptor.resolve_scrub(s))
            .collect::<ElevateResult<Vec<_>>>()?;
        if route == Route::Book {
            self.booking = BookingFlow::new();
        }
        self.reveals.on_scroll(self.scroll.offset_y(), self.now, out);
        out.push(MotionEvent::PageMounted { route });

        let mut page = MountedPage {
            descriptor,
            handles: Vec::new(),
            scrubs,
        };
        let mut result = Ok(());
        for reveal in &page.descriptor.reveals {
            match arm(&mut self.reveals, &page.descriptor, reveal, self.now, out) {
                Ok(handle) => page.handles.push(handle),
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }
        tracing::debug!(%route, sets = page.handles.len(), "page mounted");
        self.page = Some(page);
        result
    }

    fn max_scroll(&self) -> f64 {
        self.page
            .as_ref()
            .map_or(0.0, |p| p.descriptor.max_scroll(self.cfg.viewport))
    }

    fn record(&mut self, out: Vec<MotionEvent>) {
        let at = self.now;
        self.log.extend(out.into_iter().map(|event| {
            tracing::trace!(%at, ?event, "event");
            TimedEvent { at, event }
        }));
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn config(&self) -> &MotionConfig {
        &self.cfg
    }

    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState::at(self.scroll.offset_y(), self.cfg.scroll_threshold)
    }

    pub fn navbar_mode(&self) -> NavbarMode {
        self.chrome.navbar_mode()
    }

    pub fn navbar_backdrop(&self) -> f64 {
        self.chrome.navbar().backdrop()
    }

    pub fn menu_phase(&self) -> MenuPhase {
        self.chrome.menu_phase()
    }

    pub fn menu_clip_path(&self) -> String {
        self.chrome.menu().clip_path()
    }

    pub fn menu_link_style(&self, index: usize) -> Option<RevealStyle> {
        self.chrome.menu().link_style(index)
    }

    pub fn modal_phase(&self) -> ModalPhase {
        self.video.phase()
    }

    pub fn video_url(&self) -> Option<&str> {
        self.video.payload().map(String::as_str)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn main_opacity(&self) -> f64 {
        self.transition.opacity()
    }

    pub fn booking(&self) -> &BookingFlow {
        &self.booking
    }

    pub fn reveal_status(&self, set: &str) -> Option<RevealStatus> {
        self.reveals.status(&RevealSetId::new(set))
    }

    /// Style of an element on the mounted page. Elements with no motion report their resting
    /// style; unknown elements report `None`.
    pub fn element_style(&self, element: &ElementId) -> Option<ElementStyle> {
        let page = self.page.as_ref()?;
        let reveal = self.reveals.style_of(element);
        let scrub = page
            .scrubs
            .iter()
            .find(|s| &s.element == element)
            .map(|s| s.offset_at(self.scroll.offset_y()));
        if reveal.is_none() && scrub.is_none() && page.descriptor.bounds(element).is_none() {
            return None;
        }
        let base = reveal.unwrap_or(RevealStyle::VISIBLE);
        Some(ElementStyle {
            y: base.y + scrub.unwrap_or(0.0),
            opacity: base.opacity,
        })
    }

    pub fn snapshot(&self) -> SiteSnapshot {
        let elements = self
            .page
            .as_ref()
            .map(|p| {
                p.descriptor
                    .layout
                    .elements
                    .keys()
                    .filter_map(|id| Some((id.clone(), self.element_style(id)?)))
                    .collect()
            })
            .unwrap_or_default();
        SiteSnapshot {
            at: self.now,
            route: self.route,
            scroll: self.scroll_state(),
            main_opacity: self.main_opacity(),
            navbar_mode: self.navbar_mode(),
            active_link: self.active_link().map(|l| l.label),
            navbar_backdrop: self.navbar_backdrop(),
            menu_phase: self.menu_phase(),
            menu_clip: self.menu_clip_path(),
            modal_phase: self.modal_phase(),
            scroll_locked: self.is_scroll_locked(),
            elements,
        }
    }

    /// Header link highlighted for the current route. Home and booking have none.
    pub fn active_link(&self) -> Option<&'static NavLink> {
        NAV_LINKS
            .iter()
            .find(|l| routing::is_active(self.route, l.route))
    }

    pub fn events(&self) -> &[TimedEvent] {
        &self.log
    }

    pub fn drain_events(&mut self) -> Vec<TimedEvent> {
        std::mem::take(&mut self.log)
    }
}

fn arm(
    reveals: &mut RevealAnimator,
    page: &PageDescriptor,
    reveal: &RevealDescriptor,
    now: Millis,
    out: &mut Vec<MotionEvent>,
) -> ElevateResult<RevealHandle> {
    let trigger = page.resolve_trigger(reveal)?;
    reveals.register(
        reveal.id.clone(),
        reveal.elements.clone(),
        trigger,
        reveal.spec.clone(),
        now,
        out,
    )
}
