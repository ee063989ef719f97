use iced::Task;

use super::preferences;
use crate::app::{App, AppEvent};
use crate::shared::ui::theme::ThemeMode;
use crate::widgets::theme_toggle::{
    ThemeToggleCtx, ThemeToggleEffect, ThemeToggleEvent, ThemeToggleIntent,
};

/// Route a theme toggle event through widget reduction or persistence.
pub(crate) fn route(app: &mut App, event: ThemeToggleEvent) -> Task<AppEvent> {
    match event {
        ThemeToggleEvent::Intent(event) => route_intent(app, event),
        ThemeToggleEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: ThemeToggleIntent) -> Task<AppEvent> {
    let mut ctx = ThemeToggleCtx {
        provider: &mut app.theme_manager,
    };
    app.widgets
        .theme_toggle
        .reduce(event, &mut ctx)
        .map(AppEvent::ThemeToggle)
}

fn route_effect(app: &mut App, effect: ThemeToggleEffect) -> Task<AppEvent> {
    match effect {
        ThemeToggleEffect::ThemeChanged(mode) => persist_theme(app, mode),
    }
}

fn persist_theme(app: &mut App, mode: ThemeMode) -> Task<AppEvent> {
    log::info!("theme changed: {}", mode.id());
    app.preferences.set_theme(mode);
    preferences::request_save(app)
}
