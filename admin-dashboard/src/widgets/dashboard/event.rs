/// Intent events handled by the dashboard presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum DashboardIntent {
    ToggleSidebar,
    CollapseSidebar,
    ToggleUserMenu,
    DismissUserMenu,
    Logout,
}

/// Effect events produced by the dashboard reducer.
#[derive(Debug, Clone)]
pub(crate) enum DashboardEffect {
    Logout,
}

/// Dashboard event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum DashboardEvent {
    /// Intent event reduced by the dashboard widget.
    Intent(DashboardIntent),
    /// External effect orchestrated by app-level routing.
    Effect(DashboardEffect),
}
