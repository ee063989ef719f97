use iced::Task;
use iced::time::Instant;

use crate::app::{App, AppEvent};
use crate::widgets::route_group::{
    RouteGroupCtx, RouteGroupEffect, RouteGroupEvent, RouteGroupIntent,
};

/// Route an event for the route group at `index`.
pub(crate) fn route(
    app: &mut App,
    index: usize,
    event: RouteGroupEvent,
) -> Task<AppEvent> {
    match event {
        RouteGroupEvent::Intent(event) => route_intent(app, index, event),
        RouteGroupEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(
    app: &mut App,
    index: usize,
    event: RouteGroupIntent,
) -> Task<AppEvent> {
    let now = Instant::now();
    app.now = now;

    let Some(group) = app.widgets.route_groups.get_mut(index) else {
        log::warn!("route group event for unknown index {index}");
        return Task::none();
    };

    let is_toggle = matches!(event, RouteGroupIntent::ToggleOpen);
    let task = group.reduce(event, &RouteGroupCtx { now });
    if is_toggle {
        log::debug!(
            "route group toggled: group={} open={}",
            group.label(),
            group.is_open()
        );
    }

    task.map(move |event| AppEvent::RouteGroup { index, event })
}

fn route_effect(effect: RouteGroupEffect) -> Task<AppEvent> {
    match effect {
        RouteGroupEffect::Navigate { href } => {
            Task::done(AppEvent::Navigate { href })
        },
    }
}
