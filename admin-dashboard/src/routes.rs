use crate::shared::ui::icons;

/// Icon shown next to a route entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RouteIcon {
    Apple,
    Boxes,
    Ruler,
    Utensils,
}

impl RouteIcon {
    pub(crate) fn svg(self) -> &'static [u8] {
        match self {
            RouteIcon::Apple => icons::ROUTE_APPLE,
            RouteIcon::Boxes => icons::ROUTE_BOXES,
            RouteIcon::Ruler => icons::ROUTE_RULER,
            RouteIcon::Utensils => icons::ROUTE_UTENSILS,
        }
    }
}

/// A navigable entry inside a route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RouteItem {
    pub(crate) href: &'static str,
    pub(crate) label: &'static str,
    pub(crate) icon: RouteIcon,
}

impl RouteItem {
    /// Exact, case-sensitive match against the current path.
    pub(crate) fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

/// A labelled, ordered set of route entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RouteGroup {
    pub(crate) group: &'static str,
    pub(crate) items: &'static [RouteItem],
}

pub(crate) const ROUTE_GROUPS: &[RouteGroup] = &[
    RouteGroup {
        group: "Foods Management",
        items: &[
            RouteItem {
                href: "/admin/foods-management/foods",
                label: "Foods",
                icon: RouteIcon::Apple,
            },
            RouteItem {
                href: "/admin/foods-management/categories",
                label: "Categories",
                icon: RouteIcon::Boxes,
            },
            RouteItem {
                href: "/admin/foods-management/serving-units",
                label: "Serving Units",
                icon: RouteIcon::Ruler,
            },
        ],
    },
    RouteGroup {
        group: "Meals Management",
        items: &[RouteItem {
            href: "/client",
            label: "Meals",
            icon: RouteIcon::Utensils,
        }],
    },
];

/// Find the group and entry registered for `path`.
pub(crate) fn find_route(
    path: &str,
) -> Option<(&'static RouteGroup, &'static RouteItem)> {
    ROUTE_GROUPS.iter().find_map(|group| {
        group
            .items
            .iter()
            .find(|item| item.is_active(path))
            .map(|item| (group, item))
    })
}
