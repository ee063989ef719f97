use std::time::Duration;

use iced::time::Instant;

use crate::motion::Transition;

const GROUP_TRANSITION_MS: u64 = 200;

/// Expand/collapse state of a single route group.
#[derive(Debug)]
pub(super) struct RouteGroupState {
    open: bool,
    reveal: Transition,
}

impl RouteGroupState {
    pub(super) fn is_open(&self) -> bool {
        self.open
    }

    pub(super) fn reveal_at(&self, now: Instant) -> f32 {
        self.reveal.value_at(now)
    }

    pub(super) fn is_animating(&self, now: Instant) -> bool {
        self.reveal.is_animating(now)
    }

    /// Flip the open flag and return the new value.
    pub(super) fn toggle(&mut self, now: Instant) -> bool {
        self.open = !self.open;
        self.reveal.go(if self.open { 1.0 } else { 0.0 }, now);
        self.open
    }
}

impl Default for RouteGroupState {
    fn default() -> Self {
        Self {
            open: false,
            reveal: Transition::new(
                0.0,
                Duration::from_millis(GROUP_TRANSITION_MS),
            ),
        }
    }
}
