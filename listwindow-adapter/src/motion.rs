/// Easing curve for adapter-driven smooth motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// An in-flight smooth scroll, sampled by the host's frame loop.
///
/// This is the fallback path for surfaces that cannot animate a scroll command natively; the
/// controller samples it on every `tick` and pushes the interpolated offsets to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothMotion {
    from: u64,
    to: u64,
    started_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl SmoothMotion {
    pub fn new(from: u64, to: u64, started_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_ms,
            // A zero duration would never make progress at its own start timestamp.
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn target(&self) -> u64 {
        self.to
    }

    pub fn finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) >= self.duration_ms
    }

    /// The interpolated offset at `now_ms`, clamped to the motion's endpoints.
    pub fn position_at(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        if elapsed >= self.duration_ms {
            return self.to;
        }
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);
        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased).max(0.0) as u64
    }

    /// Redirects an in-flight motion toward a new target, starting from the current position.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        let current = self.position_at(now_ms);
        *self = Self::new(current, new_to, now_ms, duration_ms, self.easing);
    }
}
