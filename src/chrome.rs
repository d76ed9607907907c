//! Navigation chrome: the fixed header and the full-screen mobile menu.

pub mod menu;
pub mod navbar;

use crate::{
    event::MotionEvent,
    foundation::core::{ElementId, Millis},
    lock::ScrollLock,
    routing::{NAV_LINKS, Route},
};

use menu::{MenuPhase, MenuTiming, MobileMenu};
use navbar::{Navbar, NavbarMode, NavbarTiming};

/// Header mode crossed with menu phase. The two halves move independently; only navigation
/// touches both (it forces the menu shut).
#[derive(Clone, Debug)]
pub struct NavChrome {
    navbar: Navbar,
    menu: MobileMenu,
}

impl NavChrome {
    pub fn new(navbar: NavbarTiming, menu: MenuTiming) -> Self {
        let links = NAV_LINKS
            .iter()
            .map(|link| link.route)
            .chain([Route::Book])
            .map(menu_link_id)
            .collect();
        Self {
            navbar: Navbar::new(navbar),
            menu: MobileMenu::new(menu, links),
        }
    }

    pub fn on_threshold(&mut self, scrolled: bool, now: Millis, out: &mut Vec<MotionEvent>) {
        self.navbar.set_scrolled(scrolled, now, out);
    }

    pub fn toggle_menu(&mut self, now: Millis, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        self.menu.toggle(now, lock, out);
    }

    pub fn on_navigate(&mut self, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        self.menu.force_close(lock, out);
    }

    pub fn tick(&mut self, now: Millis, lock: &mut ScrollLock, out: &mut Vec<MotionEvent>) {
        self.navbar.tick(now);
        self.menu.tick(now, lock, out);
    }

    pub fn navbar_mode(&self) -> NavbarMode {
        self.navbar.mode()
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn menu_phase(&self) -> MenuPhase {
        self.menu.phase()
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }
}

/// Element id of the mobile-menu entry that links to `route`.
pub fn menu_link_id(route: Route) -> ElementId {
    ElementId::new(format!("menu-link-{}", route.slug()))
}
