use iced::Task;
use iced::time::Instant;

use crate::app::{App, AppEvent};
use crate::widgets::dashboard::{
    DashboardCtx, DashboardEffect, DashboardEvent, DashboardIntent,
};

/// Route a dashboard event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: DashboardEvent) -> Task<AppEvent> {
    match event {
        DashboardEvent::Intent(event) => route_intent(app, event),
        DashboardEvent::Effect(effect) => route_effect(app, effect),
    }
}

fn route_intent(app: &mut App, event: DashboardIntent) -> Task<AppEvent> {
    let now = Instant::now();
    app.now = now;
    app.widgets
        .dashboard
        .reduce(event, &DashboardCtx { now })
        .map(AppEvent::Dashboard)
}

fn route_effect(app: &mut App, effect: DashboardEffect) -> Task<AppEvent> {
    match effect {
        DashboardEffect::Logout => {
            log::info!("logout requested");
            app.session.logout();
            Task::none()
        },
    }
}
