pub(crate) mod dashboard;
pub(crate) mod route_group;
pub(crate) mod theme_toggle;

use crate::routes::RouteGroup;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) dashboard: dashboard::DashboardWidget,
    pub(crate) route_groups: Vec<route_group::RouteGroupWidget>,
    pub(crate) theme_toggle: theme_toggle::ThemeToggleWidget,
}

impl Widgets {
    /// Build widgets with one route group instance per table entry.
    pub(crate) fn new(groups: &'static [RouteGroup]) -> Self {
        Self {
            dashboard: dashboard::DashboardWidget::new(),
            route_groups: groups
                .iter()
                .map(route_group::RouteGroupWidget::new)
                .collect(),
            theme_toggle: theme_toggle::ThemeToggleWidget::new(),
        }
    }
}
