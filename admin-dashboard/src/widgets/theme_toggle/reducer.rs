use iced::Task;

use super::event::{ThemeToggleEffect, ThemeToggleEvent, ThemeToggleIntent};
use crate::shared::ui::theme::ThemeProvider;

/// Mutable context for theme toggle reduction.
pub(crate) struct ThemeToggleCtx<'a> {
    pub(crate) provider: &'a mut dyn ThemeProvider,
}

/// Reduce a theme toggle intent into a provider write and effect events.
pub(crate) fn reduce(
    event: ThemeToggleIntent,
    ctx: &mut ThemeToggleCtx<'_>,
) -> Task<ThemeToggleEvent> {
    match event {
        ThemeToggleIntent::Toggle => {
            let next = ctx.provider.read().toggled();
            ctx.provider.write(next);
            Task::done(ThemeToggleEvent::Effect(
                ThemeToggleEffect::ThemeChanged(next),
            ))
        },
    }
}
