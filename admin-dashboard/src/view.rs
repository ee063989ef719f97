use iced::{Element, Theme};

use super::{App, AppEvent};
use crate::layout;
use crate::navigation::PathProvider;
use crate::pages::{self, PageProps};
use crate::shared::ui::theme::ThemeProps;

/// Render the page for the current path inside the dashboard layout.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let content = pages::view(PageProps {
        path: app.navigator.current_path(),
        theme: ThemeProps::new(app.theme_manager.current()),
        fonts: &app.fonts,
    });

    layout::view(app, content)
}
