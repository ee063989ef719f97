use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, row, svg, text};
use iced::{Element, Length, alignment};

use crate::shared::ui::style::CONTROL_RADIUS;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_alpha};

const MENU_ITEM_HEIGHT: f32 = 32.0;
const MENU_ITEM_FONT_SIZE: f32 = 14.0;
const MENU_ITEM_ICON_SIZE: f32 = 16.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 8.0;
const MENU_ITEM_SPACING: f32 = 8.0;
const DESTRUCTIVE_HOVER_ALPHA: f32 = 0.1;

/// UI events emitted by a menu item.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

/// Props for rendering a menu item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) icon: Option<&'static [u8]>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a single destructive dropdown menu row.
pub(crate) fn view<'a>(props: MenuItemProps<'a>) -> Element<'a, MenuItemEvent> {
    let palette = props.theme.theme.iced_palette().clone();
    let content_color = palette.destructive;

    let icon: Element<'a, MenuItemEvent> = match props.icon {
        Some(icon) => svg::Svg::new(svg::Handle::from_memory(icon))
            .width(Length::Fixed(MENU_ITEM_ICON_SIZE))
            .height(Length::Fixed(MENU_ITEM_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(content_color),
            })
            .into(),
        None => Space::new().width(Length::Shrink).into(),
    };

    let label = text(props.label)
        .size(MENU_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    let content = row![icon, label]
        .spacing(MENU_ITEM_SPACING)
        .align_y(alignment::Vertical::Center);

    button(content)
        .padding([0.0, MENU_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(move |_, status| menu_button_style(&palette, status))
        .on_press(MenuItemEvent::Pressed)
        .into()
}

fn menu_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
) -> button::Style {
    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed => Some(
            with_alpha(palette.destructive, DESTRUCTIVE_HOVER_ALPHA).into(),
        ),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.destructive,
        border: iced::Border {
            width: 0.0,
            radius: iced::border::Radius::new(CONTROL_RADIUS),
            ..Default::default()
        },
        ..Default::default()
    }
}
