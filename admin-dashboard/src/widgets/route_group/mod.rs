mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{RouteGroupEffect, RouteGroupEvent, RouteGroupIntent};
use iced::Task;
use iced::time::Instant;
pub(crate) use model::{RouteGroupViewModel, RouteItemViewModel};
pub(crate) use reducer::RouteGroupCtx;
use state::RouteGroupState;

use crate::routes::RouteGroup;

/// One collapsible group of navigation links in the sidebar.
pub(crate) struct RouteGroupWidget {
    definition: &'static RouteGroup,
    state: RouteGroupState,
}

impl RouteGroupWidget {
    /// Construct a closed group for a static route table entry.
    pub(crate) fn new(definition: &'static RouteGroup) -> Self {
        Self {
            definition,
            state: RouteGroupState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: RouteGroupIntent,
        ctx: &RouteGroupCtx,
    ) -> Task<RouteGroupEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for `current_path` sampled at `now`.
    pub(crate) fn vm(
        &self,
        current_path: &str,
        now: Instant,
    ) -> RouteGroupViewModel {
        let items = self
            .definition
            .items
            .iter()
            .map(|item| RouteItemViewModel {
                href: item.href,
                label: item.label,
                icon: item.icon,
                is_active: item.is_active(current_path),
            })
            .collect();

        RouteGroupViewModel {
            label: self.definition.group,
            items,
            is_open: self.state.is_open(),
            reveal: self.state.reveal_at(now),
        }
    }

    /// Return the group label.
    pub(crate) fn label(&self) -> &'static str {
        self.definition.group
    }

    /// Return whether the group is expanded.
    pub(crate) fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Return whether the expand/collapse transition is running at `now`.
    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }
}
