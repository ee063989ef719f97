#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::time::Instant;
use iced::{Element, Size, Subscription, Task, Theme};

use crate::navigation::Navigator;
use crate::preferences::{
    PersistState, Preferences, PreferencesLoadStatus, load_preferences,
};
use crate::routes::ROUTE_GROUPS;
use crate::session::{NoopSession, SessionHandler};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::dashboard::DashboardEvent;
use crate::widgets::route_group::RouteGroupEvent;
use crate::widgets::theme_toggle::ThemeToggleEvent;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Dashboard widget
    Dashboard(DashboardEvent),
    // Route group widgets, addressed by position in the route table
    RouteGroup {
        index: usize,
        event: RouteGroupEvent,
    },
    // Theme toggle widget
    ThemeToggle(ThemeToggleEvent),
    // Cross-widget workflows
    Navigate { href: &'static str },
    PreferencesSaved,
    PreferencesSaveFailed(String),
    // Direct operations
    Frame(Instant),
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) navigator: Navigator,
    pub(crate) session: Box<dyn SessionHandler>,
    pub(crate) preferences: Preferences,
    pub(crate) preferences_persist: PersistState,
    pub(crate) fonts: FontsConfig,
    pub(crate) state: State,
    /// Instant at which views sample running transitions.
    pub(crate) now: Instant,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let preferences = initial_preferences();
        let app = Self::with_parts(preferences, Box::new(NoopSession));

        (app, Task::none())
    }

    /// Build the application from already loaded parts.
    pub(crate) fn with_parts(
        preferences: Preferences,
        session: Box<dyn SessionHandler>,
    ) -> Self {
        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };

        Self {
            theme_manager: ThemeManager::new(preferences.theme()),
            navigator: Navigator::new(preferences.start_path()),
            session,
            preferences,
            preferences_persist: PersistState::default(),
            fonts: FontsConfig::default(),
            state: State::new(window_size),
            now: Instant::now(),
            widgets: Widgets::new(ROUTE_GROUPS),
        }
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Admin Dashboard")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Return whether any visual transition is still running.
    pub(crate) fn is_animating(&self) -> bool {
        self.widgets.dashboard.is_animating(self.now)
            || self
                .widgets
                .route_groups
                .iter()
                .any(|group| group.is_animating(self.now))
    }
}

fn initial_preferences() -> Preferences {
    match load_preferences() {
        Ok(load) => {
            let (preferences, status) = load.into_parts();
            match status {
                PreferencesLoadStatus::Loaded => {
                    log::info!("preferences loaded");
                },
                PreferencesLoadStatus::Missing => {
                    log::info!("preferences file not found, using defaults");
                },
                PreferencesLoadStatus::Invalid(message) => {
                    log::warn!(
                        "preferences file is invalid, using defaults: {message}"
                    );
                },
            }
            preferences
        },
        Err(err) => {
            log::warn!("preferences load failed: {err}");
            Preferences::default()
        },
    }
}
