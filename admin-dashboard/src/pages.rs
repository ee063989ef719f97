use iced::widget::{column, text};
use iced::{Element, Length};

use crate::routes::find_route;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const PAGE_SPACING: f32 = 8.0;
const PAGE_TITLE_SCALE: f32 = 1.5;
const WELCOME_TITLE: &str = "Dashboard";
const WELCOME_BODY: &str =
    "Welcome back. Open the menu to manage foods and meals.";

/// What the main content region shows for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Route {
        group: &'static str,
        label: &'static str,
    },
    Welcome,
}

impl Page {
    /// Resolve the page registered for `path`, or the welcome page.
    pub(crate) fn for_path(path: &str) -> Self {
        match find_route(path) {
            Some((group, item)) => Page::Route {
                group: group.group,
                label: item.label,
            },
            None => Page::Welcome,
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Page::Route { label, .. } => label,
            Page::Welcome => WELCOME_TITLE,
        }
    }
}

/// Props for rendering the page for the current path.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageProps<'a> {
    pub(crate) path: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the placeholder page for the current path.
pub(crate) fn view<'a, Message: 'a>(
    props: PageProps<'a>,
) -> Element<'a, Message> {
    let page = Page::for_path(props.path);
    let muted = props.theme.theme.iced_palette().muted_foreground;

    let title = text(page.title())
        .size(props.fonts.heading.size * PAGE_TITLE_SCALE)
        .font(props.fonts.heading.font_type);

    let content = match page {
        Page::Route { group, label } => column![
            text(group).size(props.fonts.ui.size).color(muted),
            title,
            text(format!("{label} will be listed here."))
                .size(props.fonts.ui.size)
                .color(muted),
        ],
        Page::Welcome => column![
            title,
            text(WELCOME_BODY).size(props.fonts.ui.size).color(muted),
        ],
    };

    content.spacing(PAGE_SPACING).width(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn given_registered_path_when_resolving_page_then_shows_route_and_group() {
        let page = Page::for_path("/admin/foods-management/serving-units");

        assert_eq!(
            page,
            Page::Route {
                group: "Foods Management",
                label: "Serving Units",
            }
        );
        assert_eq!(page.title(), "Serving Units");
    }

    #[test]
    fn given_unregistered_path_when_resolving_page_then_shows_welcome() {
        let page = Page::for_path("/admin");

        assert_eq!(page, Page::Welcome);
        assert_eq!(page.title(), "Dashboard");
    }
}
