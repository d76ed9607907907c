use crate::{animation::ease::Ease, foundation::core::Millis};

/// Interpolation contract for animated style values.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` (eased, may leave `[0, 1]`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Vertical offset plus opacity: the property pair every reveal animates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealStyle {
    /// Translate-Y in pixels.
    pub y: f64,
    pub opacity: f64,
}

impl RevealStyle {
    pub const VISIBLE: Self = Self { y: 0.0, opacity: 1.0 };

    pub fn hidden_below(y: f64) -> Self {
        Self { y, opacity: 0.0 }
    }
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl Lerp for RevealStyle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            y: f64::lerp(&a.y, &b.y, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

/// Scale plus opacity, used by overlay content.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleStyle {
    pub scale: f64,
    pub opacity: f64,
}

impl Lerp for ScaleStyle {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            scale: f64::lerp(&a.scale, &b.scale, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

/// One time-based interpolation between two values.
///
/// A tween is inert data: it is sampled against the clock, and cancelling it means dropping it.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: Millis,
    duration: Millis,
    ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    pub fn new(from: T, to: T, start: Millis, duration: Millis, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    pub fn end(&self) -> Millis {
        self.start + self.duration
    }

    /// Linear progress in `[0, 1]`; zero-length tweens jump to 1 at their start.
    pub fn progress(&self, now: Millis) -> f64 {
        if now < self.start {
            return 0.0;
        }
        if self.duration == Millis::ZERO {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start).0 as f64;
        (elapsed / self.duration.0 as f64).clamp(0.0, 1.0)
    }

    pub fn has_started(&self, now: Millis) -> bool {
        now >= self.start
    }

    pub fn is_finished(&self, now: Millis) -> bool {
        now >= self.end()
    }

    /// Sample the eased value at `now`. Finished tweens return the exact target.
    pub fn sample(&self, now: Millis) -> T {
        if self.is_finished(now) {
            return self.to.clone();
        }
        let t = self.ease.apply(self.progress(now));
        T::lerp(&self.from, &self.to, t)
    }
}
