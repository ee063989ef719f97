use iced::Task;

use crate::app::{App, AppEvent};

/// Move the navigator to `href`.
pub(crate) fn navigate(app: &mut App, href: &str) -> Task<AppEvent> {
    if app.navigator.navigate(href) {
        log::debug!("navigated to {href}");
    }
    Task::none()
}
