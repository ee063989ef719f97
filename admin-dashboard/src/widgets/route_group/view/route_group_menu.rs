use iced::widget::text::Wrapping;
use iced::widget::{Column, Space, button, column, container, row, svg, text};
use iced::{Element, Length, alignment};

use super::super::event::RouteGroupIntent;
use super::super::model::RouteGroupViewModel;
use crate::components::primitive::nav_link::{
    NavLinkEvent, NavLinkProps, view as nav_link_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{CHEVRON_DOWN, CHEVRON_UP};
use crate::shared::ui::style::ghost_button_style;
use crate::shared::ui::theme::{ThemeProps, with_alpha};

const HEADER_HEIGHT: f32 = 36.0;
const HEADER_PADDING_X: f32 = 16.0;
const HEADER_TEXT_ALPHA: f32 = 0.8;
const CHEVRON_SIZE: f32 = 16.0;
const ITEM_HEIGHT: f32 = 28.0;
const ITEM_SPACING: f32 = 8.0;

/// Props for rendering a route group menu.
pub(crate) struct RouteGroupMenuProps<'a> {
    pub(crate) vm: RouteGroupViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the group header and its (possibly collapsed) link list.
pub(crate) fn view<'a>(
    props: RouteGroupMenuProps<'a>,
) -> Element<'a, RouteGroupIntent> {
    let header = group_header(&props);
    let items = group_items(&props);

    column![header, items].width(Length::Fill).into()
}

fn group_header<'a>(
    props: &RouteGroupMenuProps<'a>,
) -> Element<'a, RouteGroupIntent> {
    let palette = props.theme.theme.iced_palette().clone();
    let label_color = with_alpha(palette.foreground, HEADER_TEXT_ALPHA);
    let chevron_color = palette.foreground;
    let chevron = if props.vm.is_open {
        CHEVRON_UP
    } else {
        CHEVRON_DOWN
    };

    let label = text(props.vm.label)
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type)
        .color(label_color)
        .wrapping(Wrapping::None);

    let chevron = svg::Svg::new(svg::Handle::from_memory(chevron))
        .width(Length::Fixed(CHEVRON_SIZE))
        .height(Length::Fixed(CHEVRON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(chevron_color),
        });

    let content = row![label, Space::new().width(Length::Fill), chevron]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill);

    button(content)
        .on_press(RouteGroupIntent::ToggleOpen)
        .padding([0.0, HEADER_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .style(move |_, status| ghost_button_style(&palette, status))
        .into()
}

fn group_items<'a>(
    props: &RouteGroupMenuProps<'a>,
) -> Element<'a, RouteGroupIntent> {
    let reveal = props.vm.reveal.clamp(0.0, 1.0);
    let is_interactive = props.vm.is_open;

    let links = props.vm.items.iter().map(|item| {
        nav_link_view(NavLinkProps {
            href: item.href,
            label: item.label,
            icon: item.icon.svg(),
            is_active: item.is_active,
            is_interactive,
            opacity: reveal,
            theme: props.theme,
        })
        .map(|event| match event {
            NavLinkEvent::Navigate(href) => {
                RouteGroupIntent::ItemPressed { href }
            },
        })
    });

    let list = Column::with_children(links)
        .spacing(ITEM_SPACING)
        .padding([ITEM_SPACING / 2.0, 0.0])
        .width(Length::Fill);

    container(list)
        .width(Length::Fill)
        .height(list_height(props.vm.items.len(), reveal))
        .clip(true)
        .into()
}

/// Height of the item list at the given reveal fraction.
fn list_height(item_count: usize, reveal: f32) -> Length {
    if reveal >= 1.0 {
        return Length::Shrink;
    }

    let count = item_count as f32;
    let full = count * ITEM_HEIGHT + count * ITEM_SPACING;
    Length::Fixed(full * reveal)
}

#[cfg(test)]
mod tests {
    use iced::Length;

    use super::{ITEM_HEIGHT, ITEM_SPACING, list_height};

    #[test]
    fn given_collapsed_group_when_sizing_list_then_height_is_zero() {
        assert_eq!(list_height(3, 0.0), Length::Fixed(0.0));
    }

    #[test]
    fn given_open_group_when_sizing_list_then_height_shrinks_to_content() {
        assert_eq!(list_height(3, 1.0), Length::Shrink);
    }

    #[test]
    fn given_half_revealed_group_when_sizing_list_then_height_is_proportional()
    {
        let full = 2.0 * (ITEM_HEIGHT + ITEM_SPACING);

        assert_eq!(list_height(2, 0.5), Length::Fixed(full * 0.5));
    }
}
