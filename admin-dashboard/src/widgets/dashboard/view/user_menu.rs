use iced::widget::{column, container, mouse_area, row, text};
use iced::{Element, Length, alignment};

use super::super::event::DashboardIntent;
use super::super::model::TOP_BAR_HEIGHT;
use crate::components::primitive::avatar::{AvatarProps, view as avatar_view};
use crate::components::primitive::menu_item::{
    MenuItemEvent, MenuItemProps, view as menu_item_view,
};
use crate::components::primitive::separator::{
    SeparatorProps, view as separator_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::LOG_OUT;
use crate::shared::ui::style::menu_panel_style;
use crate::shared::ui::theme::ThemeProps;

const MENU_WIDTH: f32 = 224.0;
const MENU_PADDING: f32 = 4.0;
const MENU_MARGIN_RIGHT: f32 = 8.0;
const MENU_MARGIN_TOP: f32 = 4.0;
const MENU_LABEL_PADDING: [f32; 2] = [6.0, 8.0];
const ACCOUNT_AVATAR_SIZE: f32 = 40.0;
const ACCOUNT_SPACING: f32 = 12.0;
const ACCOUNT_EMAIL_SIZE: f32 = 12.0;
const MENU_LABEL: &str = "My Account";
const ACCOUNT_NAME: &str = "Admin";
const ACCOUNT_EMAIL: &str = "admin@test.com";
const ACCOUNT_INITIALS: &str = "A";
const LOGOUT_LABEL: &str = "Logout";

/// Props for rendering the user dropdown overlay.
pub(crate) struct UserMenuProps<'a, Message> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) on_intent: fn(DashboardIntent) -> Message,
}

/// Render the dropdown anchored under the top bar's right edge, with a
/// full-window layer behind it that dismisses on click.
pub(crate) fn view<'a, Message: Clone + 'a>(
    props: UserMenuProps<'a, Message>,
) -> Element<'a, Message> {
    let on_intent = props.on_intent;
    let muted = props.theme.theme.iced_palette().muted_foreground;

    let label = container(
        text(MENU_LABEL)
            .size(props.fonts.ui.size)
            .font(props.fonts.heading.font_type),
    )
    .padding(MENU_LABEL_PADDING);

    let avatar: Element<'a, Message> = avatar_view(AvatarProps {
        initials: ACCOUNT_INITIALS,
        size: ACCOUNT_AVATAR_SIZE,
        theme: props.theme,
    });

    let account = row![
        avatar,
        column![
            text(ACCOUNT_NAME)
                .size(props.fonts.ui.size)
                .font(props.fonts.heading.font_type),
            text(ACCOUNT_EMAIL).size(ACCOUNT_EMAIL_SIZE).color(muted),
        ],
    ]
    .spacing(ACCOUNT_SPACING)
    .align_y(alignment::Vertical::Center);

    let logout = menu_item_view(MenuItemProps {
        label: LOGOUT_LABEL,
        icon: Some(LOG_OUT),
        theme: props.theme,
    })
    .map(move |event| match event {
        MenuItemEvent::Pressed => on_intent(DashboardIntent::Logout),
    });

    let menu = container(
        column![
            label,
            separator_view(SeparatorProps { theme: props.theme }),
            container(account).padding(MENU_LABEL_PADDING),
            separator_view(SeparatorProps { theme: props.theme }),
            logout,
        ]
        .width(Length::Fill),
    )
    .padding(MENU_PADDING)
    .width(Length::Fixed(MENU_WIDTH))
    .style(menu_panel_style(props.theme));

    let positioned_menu = container(menu)
        .padding(iced::Padding {
            top: TOP_BAR_HEIGHT + MENU_MARGIN_TOP,
            right: MENU_MARGIN_RIGHT,
            ..iced::Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    let dismiss = on_intent(DashboardIntent::DismissUserMenu);
    let dismiss_layer = mouse_area(
        container(text("")).width(Length::Fill).height(Length::Fill),
    )
    .on_press(dismiss.clone())
    .on_right_press(dismiss);

    iced::widget::stack!(dismiss_layer, positioned_menu)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
