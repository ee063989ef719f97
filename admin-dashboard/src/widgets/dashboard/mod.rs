mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{DashboardEffect, DashboardEvent, DashboardIntent};
use iced::Task;
use iced::time::Instant;
pub(crate) use model::DashboardViewModel;
pub(crate) use reducer::DashboardCtx;
use state::DashboardState;

/// Dashboard layout widget owning the sidebar and user menu state.
pub(crate) struct DashboardWidget {
    state: DashboardState,
}

impl DashboardWidget {
    /// Construct a dashboard with the sidebar and user menu closed.
    pub(crate) fn new() -> Self {
        Self {
            state: DashboardState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: DashboardIntent,
        ctx: &DashboardCtx,
    ) -> Task<DashboardEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model sampled at `now`.
    pub(crate) fn vm(&self, now: Instant) -> DashboardViewModel {
        let offset = self.state.sidebar_offset_at(now);
        DashboardViewModel {
            sidebar_offset: offset,
            content_offset: offset,
            user_menu_open: self.state.has_user_menu_open(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_sidebar_open(&self) -> bool {
        self.state.is_sidebar_open()
    }

    /// Return whether the user dropdown is open.
    pub(crate) fn has_user_menu_open(&self) -> bool {
        self.state.has_user_menu_open()
    }

    /// Return whether the sidebar slide is running at `now`.
    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }
}
