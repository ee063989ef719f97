use crate::shared::ui::theme::ThemeMode;

/// Intent events handled by the theme toggle presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum ThemeToggleIntent {
    Toggle,
}

/// Effect events produced by the theme toggle reducer.
#[derive(Debug, Clone)]
pub(crate) enum ThemeToggleEffect {
    ThemeChanged(ThemeMode),
}

/// Theme toggle event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ThemeToggleEvent {
    /// Intent event reduced by the theme toggle widget.
    Intent(ThemeToggleIntent),
    /// External effect orchestrated by app-level routing.
    Effect(ThemeToggleEffect),
}
