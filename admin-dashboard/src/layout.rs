use iced::{Element, Theme};

use crate::app::{App, AppEvent};
use crate::navigation::PathProvider;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::dashboard::view::dashboard_frame::{
    self, DashboardFrameProps,
};
use crate::widgets::dashboard::{DashboardEvent, DashboardIntent};
use crate::widgets::route_group::RouteGroupEvent;
use crate::widgets::route_group::view::route_group_menu::{
    self, RouteGroupMenuProps,
};
use crate::widgets::theme_toggle::ThemeToggleEvent;
use crate::widgets::theme_toggle::view::theme_toggle_button::{
    self, ThemeToggleButtonProps,
};

/// Mount the dashboard layout around `content`.
pub(crate) fn view<'a>(
    app: &'a App,
    content: Element<'a, AppEvent, Theme, iced::Renderer>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let theme = ThemeProps::new(app.theme_manager.current());
    let current_path = app.navigator.current_path();

    let theme_toggle = theme_toggle_button::view(ThemeToggleButtonProps {
        vm: app.widgets.theme_toggle.vm(&app.theme_manager),
        theme,
    })
    .map(|intent| AppEvent::ThemeToggle(ThemeToggleEvent::Intent(intent)));

    let route_groups = app
        .widgets
        .route_groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            route_group_menu::view(RouteGroupMenuProps {
                vm: group.vm(current_path, app.now),
                theme,
                fonts: &app.fonts,
            })
            .map(move |intent| AppEvent::RouteGroup {
                index,
                event: RouteGroupEvent::Intent(intent),
            })
        })
        .collect();

    dashboard_frame::view(DashboardFrameProps {
        vm: app.widgets.dashboard.vm(app.now),
        theme,
        fonts: &app.fonts,
        show_user_label: app.state.is_wide(),
        theme_toggle,
        route_groups,
        content,
        on_intent: dashboard_intent,
    })
}

fn dashboard_intent(intent: DashboardIntent) -> AppEvent {
    AppEvent::Dashboard(DashboardEvent::Intent(intent))
}
