use std::time::Duration;

use iced::time::Instant;

use super::model::SIDEBAR_WIDTH;
use crate::motion::Transition;

const SIDEBAR_TRANSITION_MS: u64 = 300;

/// Internal layout state of the dashboard.
#[derive(Debug)]
pub(super) struct DashboardState {
    sidebar_open: bool,
    sidebar_offset: Transition,
    user_menu_open: bool,
}

impl DashboardState {
    pub(super) fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub(super) fn sidebar_offset_at(&self, now: Instant) -> f32 {
        self.sidebar_offset.value_at(now)
    }

    pub(super) fn is_animating(&self, now: Instant) -> bool {
        self.sidebar_offset.is_animating(now)
    }

    pub(super) fn has_user_menu_open(&self) -> bool {
        self.user_menu_open
    }

    pub(super) fn set_sidebar_open(&mut self, open: bool, now: Instant) {
        self.sidebar_open = open;
        let target = if open { SIDEBAR_WIDTH } else { 0.0 };
        self.sidebar_offset.go(target, now);
    }

    pub(super) fn set_user_menu_open(&mut self, open: bool) {
        self.user_menu_open = open;
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            sidebar_open: false,
            sidebar_offset: Transition::new(
                0.0,
                Duration::from_millis(SIDEBAR_TRANSITION_MS),
            ),
            user_menu_open: false,
        }
    }
}
