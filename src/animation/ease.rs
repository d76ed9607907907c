use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ElevateError, ElevateResult};

/// Overshoot used by `back.out` when no amount is given.
pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;

/// Easing functions used to map normalized animation progress.
///
/// Serialized with the tweening names the site's markup uses (`power2.out`, `back.out(1.7)`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in (`power1.in`).
    InQuad,
    /// Quadratic ease-out (`power1.out`).
    OutQuad,
    /// Quadratic ease-in/out (`power1.inOut`).
    InOutQuad,
    /// Cubic ease-in (`power2.in`).
    InCubic,
    /// Cubic ease-out (`power2.out`).
    OutCubic,
    /// Cubic ease-in/out (`power2.inOut`).
    InOutCubic,
    /// Quartic ease-in (`power3.in`).
    InQuart,
    /// Quartic ease-out (`power3.out`).
    OutQuart,
    /// Quartic ease-in/out (`power3.inOut`).
    InOutQuart,
    /// Quintic ease-in (`power4.in`).
    InQuint,
    /// Quintic ease-out (`power4.out`).
    OutQuint,
    /// Quintic ease-in/out (`power4.inOut`).
    InOutQuint,
    /// Ease-out that overshoots the target before settling (`back.out(n)`).
    BackOut {
        /// Overshoot amount; larger values swing further past 1.0.
        overshoot: f64,
    },
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// Endpoints are exact. `BackOut` may exceed 1.0 in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(5) / 2.0)
                }
            }
            Self::BackOut { overshoot } => {
                if t >= 1.0 {
                    return 1.0;
                }
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }

    fn power_family(self) -> Option<(u8, &'static str)> {
        Some(match self {
            Self::InQuad => (1, "in"),
            Self::OutQuad => (1, "out"),
            Self::InOutQuad => (1, "inOut"),
            Self::InCubic => (2, "in"),
            Self::OutCubic => (2, "out"),
            Self::InOutCubic => (2, "inOut"),
            Self::InQuart => (3, "in"),
            Self::OutQuart => (3, "out"),
            Self::InOutQuart => (3, "inOut"),
            Self::InQuint => (4, "in"),
            Self::OutQuint => (4, "out"),
            Self::InOutQuint => (4, "inOut"),
            Self::Linear | Self::BackOut { .. } => return None,
        })
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.power_family()) {
            (_, Some((power, dir))) => write!(f, "power{power}.{dir}"),
            (Self::BackOut { overshoot }, None) => write!(f, "back.out({overshoot})"),
            _ => f.write_str("none"),
        }
    }
}

impl FromStr for Ease {
    type Err = ElevateError;

    fn from_str(s: &str) -> ElevateResult<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name.is_empty() {
            return Err(ElevateError::validation("ease name must be non-empty"));
        }

        if let Some(rest) = name.strip_prefix("back.out") {
            let overshoot = match rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
                None if rest.is_empty() => DEFAULT_BACK_OVERSHOOT,
                None => {
                    return Err(ElevateError::validation(format!("malformed ease '{s}'")));
                }
                Some(arg) => arg.trim().parse::<f64>().map_err(|_| {
                    ElevateError::validation(format!("back.out overshoot must be a number in '{s}'"))
                })?,
            };
            if !overshoot.is_finite() {
                return Err(ElevateError::validation("back.out overshoot must be finite"));
            }
            return Ok(Self::BackOut { overshoot });
        }

        let (family, dir) = name.split_once('.').unwrap_or((name.as_str(), "out"));
        let ease = match (family, dir) {
            ("none" | "linear" | "power0", _) => Self::Linear,
            ("power1" | "quad", "in") => Self::InQuad,
            ("power1" | "quad", "out") => Self::OutQuad,
            ("power1" | "quad", "inout") => Self::InOutQuad,
            ("power2" | "cubic", "in") => Self::InCubic,
            ("power2" | "cubic", "out") => Self::OutCubic,
            ("power2" | "cubic", "inout") => Self::InOutCubic,
            ("power3" | "quart", "in") => Self::InQuart,
            ("power3" | "quart", "out") => Self::OutQuart,
            ("power3" | "quart", "inout") => Self::InOutQuart,
            ("power4" | "quint", "in") => Self::InQuint,
            ("power4" | "quint", "out") => Self::OutQuint,
            ("power4" | "quint", "inout") => Self::InOutQuint,
            _ => {
                return Err(ElevateError::validation(format!("unknown ease '{s}'")));
            }
        };
        Ok(ease)
    }
}

impl TryFrom<String> for Ease {
    type Error = ElevateError;

    fn try_from(s: String) -> ElevateResult<Self> {
        s.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
