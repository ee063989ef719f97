use iced::keyboard::{self, key};
use iced::time::Instant;
use iced::{Size, Task};

use crate::app::{App, AppEvent};
use crate::widgets::dashboard::{DashboardEvent, DashboardIntent};

/// Handle window resize events.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.set_window_size(size);
    Task::none()
}

/// Advance the sampling instant for running transitions.
pub(crate) fn handle_frame(app: &mut App, now: Instant) -> Task<AppEvent> {
    app.now = now;
    Task::none()
}

/// Escape dismisses the user menu while it is open.
pub(crate) fn handle_keyboard(
    app: &App,
    event: keyboard::Event,
) -> Task<AppEvent> {
    let is_escape = matches!(
        event,
        keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }
    );

    if is_escape && app.widgets.dashboard.has_user_menu_open() {
        return Task::done(AppEvent::Dashboard(DashboardEvent::Intent(
            DashboardIntent::DismissUserMenu,
        )));
    }

    Task::none()
}
