use crate::routes::RouteIcon;

/// A route entry as seen by the group view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RouteItemViewModel {
    pub(crate) href: &'static str,
    pub(crate) label: &'static str,
    pub(crate) icon: RouteIcon,
    pub(crate) is_active: bool,
}

/// View model for a route group.
#[derive(Debug, Clone)]
pub(crate) struct RouteGroupViewModel {
    pub(crate) label: &'static str,
    pub(crate) items: Vec<RouteItemViewModel>,
    pub(crate) is_open: bool,
    /// How far the item list is expanded (0.0 collapsed, 1.0 open).
    pub(crate) reveal: f32,
}
