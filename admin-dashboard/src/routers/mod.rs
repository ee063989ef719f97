use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod dashboard;
pub(crate) mod navigation;
pub(crate) mod preferences;
pub(crate) mod route_group;
pub(crate) mod theme_toggle;
pub(crate) mod window;

pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Dashboard widget
        AppEvent::Dashboard(event) => dashboard::route(app, event),
        // Route group widgets
        AppEvent::RouteGroup { index, event } => {
            route_group::route(app, index, event)
        },
        // Theme toggle widget
        AppEvent::ThemeToggle(event) => theme_toggle::route(app, event),
        // Cross-widget workflows
        AppEvent::Navigate { href } => navigation::navigate(app, href),
        AppEvent::PreferencesSaved => preferences::handle_saved(app),
        AppEvent::PreferencesSaveFailed(message) => {
            preferences::handle_save_failed(app, &message)
        },
        // Direct operations
        AppEvent::Frame(now) => window::handle_frame(app, now),
        AppEvent::Keyboard(event) => window::handle_keyboard(app, event),
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use iced::Size;

    use super::route;
    use crate::app::{App, AppEvent};
    use crate::navigation::PathProvider;
    use crate::preferences::Preferences;
    use crate::session::{NoopSession, SessionHandler};
    use crate::shared::ui::theme::{ThemeMode, ThemeProvider};
    use crate::widgets::dashboard::{
        DashboardEffect, DashboardEvent, DashboardIntent,
    };
    use crate::widgets::route_group::{
        RouteGroupEffect, RouteGroupEvent, RouteGroupIntent,
    };
    use crate::widgets::theme_toggle::{
        ThemeToggleEffect, ThemeToggleEvent, ThemeToggleIntent,
    };

    struct CountingSession {
        logouts: Rc<Cell<usize>>,
    }

    impl SessionHandler for CountingSession {
        fn logout(&mut self) {
            self.logouts.set(self.logouts.get() + 1);
        }
    }

    fn app_with_theme(theme: ThemeMode) -> App {
        let mut preferences = Preferences::default();
        preferences.set_theme(theme);
        App::with_parts(preferences, Box::new(NoopSession))
    }

    fn dispatch(app: &mut App, event: AppEvent) {
        let _task = route(app, event);
    }

    fn dashboard_intent(intent: DashboardIntent) -> AppEvent {
        AppEvent::Dashboard(DashboardEvent::Intent(intent))
    }

    fn toggle_group(index: usize) -> AppEvent {
        AppEvent::RouteGroup {
            index,
            event: RouteGroupEvent::Intent(RouteGroupIntent::ToggleOpen),
        }
    }

    fn theme_changed(mode: ThemeMode) -> AppEvent {
        AppEvent::ThemeToggle(ThemeToggleEvent::Effect(
            ThemeToggleEffect::ThemeChanged(mode),
        ))
    }

    #[test]
    fn given_fresh_mount_when_inspected_then_sidebar_hidden_and_groups_closed()
    {
        let app = app_with_theme(ThemeMode::Light);
        let vm = app.widgets.dashboard.vm(app.now);

        assert!(!app.widgets.dashboard.is_sidebar_open());
        assert_eq!(vm.content_offset, 0.0);
        assert!(app.widgets.route_groups.iter().all(|g| !g.is_open()));
        assert!(!app.is_animating());
    }

    #[test]
    fn given_stored_theme_when_mounted_then_toggle_matches_provider() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let app = app_with_theme(mode);

            let vm = app.widgets.theme_toggle.vm(&app.theme_manager);

            assert_eq!(vm.mode, mode);
            assert_eq!(app.theme_manager.read(), mode);
        }
    }

    #[test]
    fn given_menu_button_when_pressed_then_sidebar_starts_sliding_in() {
        let mut app = app_with_theme(ThemeMode::Light);

        dispatch(&mut app, dashboard_intent(DashboardIntent::ToggleSidebar));

        assert!(app.widgets.dashboard.is_sidebar_open());
        assert!(app.is_animating());
    }

    #[test]
    fn given_one_group_when_header_toggled_then_only_that_group_flips() {
        let mut app = app_with_theme(ThemeMode::Light);

        dispatch(&mut app, toggle_group(0));

        assert!(app.widgets.route_groups[0].is_open());
        assert!(
            app.widgets.route_groups[1..]
                .iter()
                .all(|group| !group.is_open())
        );
    }

    #[test]
    fn given_unknown_group_index_when_routed_then_nothing_changes() {
        let mut app = app_with_theme(ThemeMode::Light);

        dispatch(&mut app, toggle_group(99));

        assert!(app.widgets.route_groups.iter().all(|g| !g.is_open()));
    }

    #[test]
    fn given_navigate_effect_when_routed_then_item_becomes_active() {
        let mut app = app_with_theme(ThemeMode::Light);
        let href = "/admin/foods-management/foods";

        dispatch(
            &mut app,
            AppEvent::RouteGroup {
                index: 0,
                event: RouteGroupEvent::Effect(RouteGroupEffect::Navigate {
                    href,
                }),
            },
        );
        dispatch(&mut app, AppEvent::Navigate { href });

        assert_eq!(app.navigator.current_path(), href);
        let active: Vec<_> = app
            .widgets
            .route_groups
            .iter()
            .flat_map(|group| {
                let vm = group.vm(app.navigator.current_path(), app.now);
                vm.items
                    .into_iter()
                    .filter(|item| item.is_active)
                    .map(move |item| (vm.label, item.label))
            })
            .collect();
        assert_eq!(active, vec![("Foods Management", "Foods")]);
    }

    #[test]
    fn given_theme_toggle_when_pressed_twice_then_theme_and_preference_restored()
    {
        let mut app = app_with_theme(ThemeMode::Light);

        dispatch(
            &mut app,
            AppEvent::ThemeToggle(ThemeToggleEvent::Intent(
                ThemeToggleIntent::Toggle,
            )),
        );
        assert_eq!(app.theme_manager.read(), ThemeMode::Dark);

        dispatch(&mut app, theme_changed(ThemeMode::Dark));
        assert_eq!(app.preferences.theme(), ThemeMode::Dark);

        dispatch(
            &mut app,
            AppEvent::ThemeToggle(ThemeToggleEvent::Intent(
                ThemeToggleIntent::Toggle,
            )),
        );
        assert_eq!(app.theme_manager.read(), ThemeMode::Light);
    }

    #[test]
    fn given_back_to_back_theme_changes_when_routed_then_one_save_in_flight()
    {
        let mut app = app_with_theme(ThemeMode::Light);

        dispatch(&mut app, theme_changed(ThemeMode::Dark));
        dispatch(&mut app, theme_changed(ThemeMode::Light));

        assert!(app.preferences_persist.is_in_flight());
        assert!(app.preferences_persist.is_dirty());
        assert_eq!(app.preferences.theme(), ThemeMode::Light);
    }

    #[test]
    fn given_pending_change_when_save_completes_then_follow_up_save_starts() {
        let mut app = app_with_theme(ThemeMode::Light);
        dispatch(&mut app, theme_changed(ThemeMode::Dark));
        dispatch(&mut app, theme_changed(ThemeMode::Light));

        dispatch(&mut app, AppEvent::PreferencesSaved);

        assert!(app.preferences_persist.is_in_flight());
        assert!(!app.preferences_persist.is_dirty());

        dispatch(&mut app, AppEvent::PreferencesSaved);

        assert!(!app.preferences_persist.is_in_flight());
        assert!(!app.preferences_persist.is_dirty());
    }

    #[test]
    fn given_failed_save_without_new_changes_when_routed_then_no_retry() {
        let mut app = app_with_theme(ThemeMode::Light);
        dispatch(&mut app, theme_changed(ThemeMode::Dark));

        dispatch(
            &mut app,
            AppEvent::PreferencesSaveFailed(String::from("disk full")),
        );

        assert!(!app.preferences_persist.is_in_flight());
        assert!(!app.preferences_persist.is_dirty());
    }

    #[test]
    fn given_open_user_menu_when_logging_out_then_session_called_once() {
        let logouts = Rc::new(Cell::new(0));
        let session = CountingSession {
            logouts: Rc::clone(&logouts),
        };
        let mut app =
            App::with_parts(Preferences::default(), Box::new(session));

        dispatch(&mut app, dashboard_intent(DashboardIntent::ToggleUserMenu));
        dispatch(&mut app, dashboard_intent(DashboardIntent::Logout));
        dispatch(
            &mut app,
            AppEvent::Dashboard(DashboardEvent::Effect(
                DashboardEffect::Logout,
            )),
        );

        assert!(!app.widgets.dashboard.has_user_menu_open());
        assert_eq!(logouts.get(), 1);
    }

    #[test]
    fn given_window_resize_when_routed_then_label_breakpoint_follows_width() {
        let mut app = app_with_theme(ThemeMode::Light);

        dispatch(
            &mut app,
            AppEvent::Window(iced::window::Event::Resized(Size::new(
                700.0, 600.0,
            ))),
        );
        assert!(!app.state.is_wide());

        dispatch(
            &mut app,
            AppEvent::Window(iced::window::Event::Resized(Size::new(
                1024.0, 768.0,
            ))),
        );
        assert!(app.state.is_wide());
    }
}
