use std::time::Duration;

use iced::time::Instant;

/// Time-based ease-in-out interpolation of a scalar value.
///
/// Sampling is driven by the caller's clock so that views can render a
/// transition at the frame instant and reducers stay deterministic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transition {
    from: f32,
    to: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Transition {
    /// Create a settled transition resting at `value`.
    pub(crate) fn new(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            to: value,
            started_at: None,
            duration,
        }
    }

    /// Retarget the transition, starting from wherever it is at `now`.
    pub(crate) fn go(&mut self, target: f32, now: Instant) {
        if (self.to - target).abs() <= f32::EPSILON {
            return;
        }

        self.from = self.value_at(now);
        self.to = target;
        self.started_at = Some(now);
    }

    /// Sample the eased value at `now`.
    pub(crate) fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.to;
        };

        let progress = self.progress(started_at, now);
        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    /// Return whether the transition is still moving at `now`.
    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .map(|started_at| self.progress(started_at, now) < 1.0)
            .unwrap_or(false)
    }

    fn progress(&self, started_at: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
