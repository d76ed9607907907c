use std::{fmt, str::FromStr};

use crate::foundation::error::{ElevateError, ElevateResult};

/// Client-side routes. There is no fallback page: anything else is rejected.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Vision,
    About,
    Journey,
    Programs,
    Book,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Vision,
        Route::About,
        Route::Journey,
        Route::Programs,
        Route::Book,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Vision => "/vision",
            Self::About => "/about",
            Self::Journey => "/journey",
            Self::Programs => "/programs",
            Self::Book => "/book",
        }
    }

    /// Short stable name used in element and reveal-set ids.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Vision => "vision",
            Self::About => "about",
            Self::Journey => "journey",
            Self::Programs => "programs",
            Self::Book => "book",
        }
    }

    /// Resolve a location. Accepts plain paths (`/about`), hash-router locations (`#/about`),
    /// trailing slashes, and query strings.
    pub fn parse(location: &str) -> ElevateResult<Self> {
        let trimmed = location.trim();
        let path = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };

        Self::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(path))
            .ok_or_else(|| ElevateError::routing(location))
    }
}

impl FromStr for Route {
    type Err = ElevateError;

    fn from_str(s: &str) -> ElevateResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Entry in the header's pill navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Vision",
        route: Route::Vision,
    },
    NavLink {
        label: "About",
        route: Route::About,
    },
    NavLink {
        label: "The Journey",
        route: Route::Journey,
    },
    NavLink {
        label: "Programs",
        route: Route::Programs,
    },
];

/// Whether the link for `route` is highlighted while `current` is shown.
pub fn is_active(current: Option<Route>, route: Route) -> bool {
    current == Some(route)
}
