use iced::widget::text::Wrapping;
use iced::widget::{button, row, svg, text};
use iced::{Background, Border, Color, Element, Length, alignment};

use crate::shared::ui::style::CONTROL_RADIUS;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_alpha};

const NAV_LINK_HEIGHT: f32 = 28.0;
const NAV_LINK_FONT_SIZE: f32 = 14.0;
const NAV_LINK_ICON_SIZE: f32 = 12.0;
const NAV_LINK_PADDING_X: f32 = 20.0;
const NAV_LINK_ICON_SPACING: f32 = 8.0;
const ACTIVE_ALPHA: f32 = 0.1;
const ACTIVE_HOVER_ALPHA: f32 = 0.05;
const HOVER_ALPHA: f32 = 0.1;

/// UI events emitted by a navigation link.
#[derive(Debug, Clone)]
pub(crate) enum NavLinkEvent {
    Navigate(&'static str),
}

/// Props for rendering a navigation link.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavLinkProps<'a> {
    pub(crate) href: &'static str,
    pub(crate) label: &'static str,
    pub(crate) icon: &'static [u8],
    pub(crate) is_active: bool,
    /// Links inside a collapsed group stay mounted but take no input.
    pub(crate) is_interactive: bool,
    /// Fade applied to text, icon and backgrounds (0.0..=1.0).
    pub(crate) opacity: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a client-side navigation link. Navigation itself is performed
/// by whoever handles [`NavLinkEvent::Navigate`].
pub(crate) fn view<'a>(props: NavLinkProps<'a>) -> Element<'a, NavLinkEvent> {
    let palette = props.theme.theme.iced_palette().clone();
    let opacity = props.opacity;
    let content_color = with_alpha(palette.foreground, opacity);

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(NAV_LINK_ICON_SIZE))
        .height(Length::Fixed(NAV_LINK_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(content_color),
        });

    let label = text(props.label)
        .size(NAV_LINK_FONT_SIZE)
        .color(content_color)
        .wrapping(Wrapping::None);

    let content = row![icon, label]
        .spacing(NAV_LINK_ICON_SPACING)
        .align_y(alignment::Vertical::Center);

    let is_active = props.is_active;
    button(content)
        .on_press_maybe(
            props
                .is_interactive
                .then_some(NavLinkEvent::Navigate(props.href)),
        )
        .padding([0.0, NAV_LINK_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fixed(NAV_LINK_HEIGHT))
        .style(move |_, status| {
            nav_link_style(&palette, is_active, status, opacity)
        })
        .into()
}

fn nav_link_style(
    palette: &IcedColorPalette,
    is_active: bool,
    status: button::Status,
    opacity: f32,
) -> button::Style {
    let hovered = matches!(
        status,
        button::Status::Hovered | button::Status::Pressed
    );

    let alpha = match (is_active, hovered) {
        (true, true) => Some(ACTIVE_HOVER_ALPHA),
        (true, false) => Some(ACTIVE_ALPHA),
        (false, true) => Some(HOVER_ALPHA),
        (false, false) => None,
    };

    button::Style {
        background: alpha.map(|alpha| {
            Background::Color(with_alpha(palette.foreground, alpha * opacity))
        }),
        text_color: with_alpha(palette.foreground, opacity),
        border: Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: iced::border::Radius::new(CONTROL_RADIUS),
        },
        ..Default::default()
    }
}
