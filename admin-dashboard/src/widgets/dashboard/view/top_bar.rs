use iced::widget::text::Wrapping;
use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::DashboardIntent;
use super::super::model::TOP_BAR_HEIGHT;
use crate::components::primitive::avatar::{AvatarProps, view as avatar_view};
use crate::components::primitive::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::MENU;
use crate::shared::ui::style::{ghost_button_style, surface_style};
use crate::shared::ui::theme::ThemeProps;

const TOP_BAR_PADDING_X: f32 = 8.0;
const TOP_BAR_SPACING: f32 = 4.0;
const MENU_BUTTON_SIZE: f32 = 36.0;
const MENU_ICON_SIZE: f32 = 16.0;
const USER_BUTTON_HEIGHT: f32 = 36.0;
const USER_BUTTON_PADDING_X: f32 = 8.0;
const USER_BUTTON_SPACING: f32 = 8.0;
const USER_AVATAR_SIZE: f32 = 32.0;
const USER_INITIALS: &str = "A";
const USER_NAME: &str = "Admin";

/// Props for rendering the fixed top bar.
pub(crate) struct TopBarProps<'a, Message> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
    /// Show the user name next to the avatar.
    pub(crate) show_user_label: bool,
    pub(crate) theme_toggle: Element<'a, Message>,
    pub(crate) on_intent: fn(DashboardIntent) -> Message,
}

/// Render the menu button on the left and user controls on the right.
pub(crate) fn view<'a, Message: Clone + 'a>(
    props: TopBarProps<'a, Message>,
) -> Element<'a, Message> {
    let on_intent = props.on_intent;

    let menu_button = icon_button_view(IconButtonProps {
        icon: MENU,
        theme: props.theme,
        size: MENU_BUTTON_SIZE,
        icon_size: MENU_ICON_SIZE,
    })
    .map(move |_| on_intent(DashboardIntent::ToggleSidebar));

    let user_button = user_button(&props);

    let controls = row![props.theme_toggle, user_button]
        .spacing(TOP_BAR_SPACING)
        .align_y(alignment::Vertical::Center);

    let content = row![menu_button, Space::new().width(Length::Fill), controls]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .padding([0.0, TOP_BAR_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .style(surface_style(props.theme, true))
        .into()
}

fn user_button<'a, Message: Clone + 'a>(
    props: &TopBarProps<'a, Message>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette().clone();

    let avatar: Element<'a, Message> = avatar_view(AvatarProps {
        initials: USER_INITIALS,
        size: USER_AVATAR_SIZE,
        theme: props.theme,
    });

    let mut content = row![avatar]
        .spacing(USER_BUTTON_SPACING)
        .align_y(alignment::Vertical::Center);

    if props.show_user_label {
        content = content.push(
            text(USER_NAME)
                .size(props.fonts.ui.size)
                .font(props.fonts.ui.font_type)
                .wrapping(Wrapping::None),
        );
    }

    button(content)
        .on_press((props.on_intent)(DashboardIntent::ToggleUserMenu))
        .padding([0.0, USER_BUTTON_PADDING_X])
        .height(Length::Fixed(USER_BUTTON_HEIGHT))
        .style(move |_, status| ghost_button_style(&palette, status))
        .into()
}
