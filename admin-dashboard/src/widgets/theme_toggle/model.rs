use crate::shared::ui::theme::ThemeMode;

/// View model for the theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ThemeToggleViewModel {
    pub(crate) mode: ThemeMode,
}
