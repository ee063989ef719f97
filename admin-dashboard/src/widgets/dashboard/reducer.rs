use iced::Task;
use iced::time::Instant;

use super::event::{DashboardEffect, DashboardEvent, DashboardIntent};
use super::state::DashboardState;

/// Read-only context for dashboard reduction.
pub(crate) struct DashboardCtx {
    pub(crate) now: Instant,
}

/// Reduce a dashboard intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut DashboardState,
    event: DashboardIntent,
    ctx: &DashboardCtx,
) -> Task<DashboardEvent> {
    match event {
        DashboardIntent::ToggleSidebar => {
            let open = !state.is_sidebar_open();
            state.set_sidebar_open(open, ctx.now);
            log::debug!("sidebar toggled: open={open}");
            Task::none()
        },
        DashboardIntent::CollapseSidebar => {
            state.set_sidebar_open(false, ctx.now);
            log::debug!("sidebar collapsed");
            Task::none()
        },
        DashboardIntent::ToggleUserMenu => {
            state.set_user_menu_open(!state.has_user_menu_open());
            Task::none()
        },
        DashboardIntent::DismissUserMenu => {
            state.set_user_menu_open(false);
            Task::none()
        },
        DashboardIntent::Logout => {
            state.set_user_menu_open(false);
            Task::done(DashboardEvent::Effect(DashboardEffect::Logout))
        },
    }
}
