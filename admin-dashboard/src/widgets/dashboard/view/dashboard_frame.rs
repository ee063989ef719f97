use iced::widget::{Space, Stack, column, container, row};
use iced::{Element, Length};

use super::super::event::DashboardIntent;
use super::super::model::DashboardViewModel;
use super::{sidebar_panel, top_bar, user_menu};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const CONTENT_PADDING: f32 = 16.0;

/// Props for composing the full dashboard around page content.
pub(crate) struct DashboardFrameProps<'a, Message> {
    pub(crate) vm: DashboardViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) show_user_label: bool,
    pub(crate) theme_toggle: Element<'a, Message>,
    pub(crate) route_groups: Vec<Element<'a, Message>>,
    pub(crate) content: Element<'a, Message>,
    pub(crate) on_intent: fn(DashboardIntent) -> Message,
}

/// Stack the top bar and offset content, the sidebar panel above them and
/// the user menu on top when open.
pub(crate) fn view<'a, Message: Clone + 'a>(
    props: DashboardFrameProps<'a, Message>,
) -> Element<'a, Message> {
    let vm = props.vm;

    let top_bar = top_bar::view(top_bar::TopBarProps {
        theme: props.theme,
        fonts: props.fonts,
        show_user_label: props.show_user_label,
        theme_toggle: props.theme_toggle,
        on_intent: props.on_intent,
    });

    let main = container(props.content)
        .padding(CONTENT_PADDING)
        .width(Length::Fill)
        .height(Length::Fill);

    let body = row![Space::new().width(Length::Fixed(vm.content_offset)), main]
        .width(Length::Fill)
        .height(Length::Fill);

    let base = column![top_bar, body]
        .width(Length::Fill)
        .height(Length::Fill);

    let sidebar = sidebar_panel::view(sidebar_panel::SidebarPanelProps {
        offset: vm.sidebar_offset,
        theme: props.theme,
        fonts: props.fonts,
        route_groups: props.route_groups,
        on_intent: props.on_intent,
    });

    let mut layers: Vec<Element<'a, Message>> = vec![base.into(), sidebar];

    if vm.user_menu_open {
        layers.push(user_menu::view(user_menu::UserMenuProps {
            theme: props.theme,
            fonts: props.fonts,
            on_intent: props.on_intent,
        }));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
