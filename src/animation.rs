//! Time-based tweens with bezier easing curves
//!
//! Used for transient widget effects such as the image button hover shimmer.
//! Every sampling method has an `_at(now)` form so effects can be drawn (and
//! tested) against an explicit clock.

use std::time::{Duration, Instant};

/// Easing curve applied to linear progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    /// Custom cubic bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
    pub const EASE_OUT_QUART: Easing = Easing::CubicBezier(0.25, 1.0, 0.5, 1.0);
    pub const EASE_OUT_EXPO: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

    /// Parse easing from a config name, `None` if unknown
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "linear" => Some(Easing::Linear),
            "ease" => Some(Easing::EASE),
            "ease_in" => Some(Easing::EaseIn),
            "ease_out" => Some(Easing::EaseOut),
            "ease_in_out" => Some(Easing::EaseInOut),
            "ease_out_quart" => Some(Easing::EASE_OUT_QUART),
            "ease_out_expo" => Some(Easing::EASE_OUT_EXPO),
            _ => None,
        }
    }

    /// Eased value for progress `t` (clamped to 0.0-1.0)
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Solve x(s) = t with Newton-Raphson, then return y(s)
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let mut s = t;
    for _ in 0..8 {
        let x = bezier_sample(s, x1, x2) - t;
        if x.abs() < 1e-4 {
            break;
        }
        let dx = bezier_derivative(s, x1, x2);
        if dx.abs() < 1e-4 {
            break;
        }
        s -= x / dx;
    }
    bezier_sample(s.clamp(0.0, 1.0), y1, y2)
}

#[inline]
fn bezier_sample(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// A single tween between two values, anchored at its start instant
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    started: Instant,
    duration: Duration,
    from: f32,
    to: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self::starting_at(Instant::now(), from, to, duration, easing)
    }

    pub fn starting_at(
        started: Instant,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            started,
            duration,
            from,
            to,
            easing,
        }
    }

    /// A 0.0 to 1.0 sweep starting now
    pub fn sweep(duration: Duration, easing: Easing) -> Self {
        Self::new(0.0, 1.0, duration, easing)
    }

    pub fn started_at(&self) -> Instant {
        self.started
    }

    /// Linear progress (0.0-1.0) at `now`
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value at `now`
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.ease(self.progress_at(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn value(&self) -> f32 {
        self.value_at(Instant::now())
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete_at(Instant::now())
    }
}
