mod event;
mod model;
mod reducer;
pub(crate) mod view;

pub(crate) use event::{ThemeToggleEffect, ThemeToggleEvent, ThemeToggleIntent};
use iced::Task;
pub(crate) use model::ThemeToggleViewModel;
pub(crate) use reducer::ThemeToggleCtx;

use crate::shared::ui::theme::ThemeProvider;

/// Theme toggle widget. The theme value itself lives in the provider.
pub(crate) struct ThemeToggleWidget;

impl ThemeToggleWidget {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Reduce an intent event into provider writes and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: ThemeToggleIntent,
        ctx: &mut ThemeToggleCtx<'_>,
    ) -> Task<ThemeToggleEvent> {
        reducer::reduce(event, ctx)
    }

    /// Build a read-only view model from the provider's current value.
    pub(crate) fn vm(
        &self,
        provider: &dyn ThemeProvider,
    ) -> ThemeToggleViewModel {
        ThemeToggleViewModel {
            mode: provider.read(),
        }
    }
}
