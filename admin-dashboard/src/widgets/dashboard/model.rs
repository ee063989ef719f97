/// Width of the slide-in sidebar panel.
pub(crate) const SIDEBAR_WIDTH: f32 = 256.0;
/// Height of the fixed top bar.
pub(crate) const TOP_BAR_HEIGHT: f32 = 48.0;

/// Read-only snapshot of dashboard layout for the view layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DashboardViewModel {
    /// Visible width of the sidebar panel at the sampled instant.
    pub(crate) sidebar_offset: f32,
    /// Left offset of the main content at the sampled instant.
    pub(crate) content_offset: f32,
    pub(crate) user_menu_open: bool,
}
