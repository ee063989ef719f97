use iced::widget::{container, text};
use iced::{Border, Element, Length, alignment};

use crate::shared::ui::theme::ThemeProps;

const AVATAR_FONT_SCALE: f32 = 0.42;

/// Props for rendering a fallback avatar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AvatarProps<'a> {
    pub(crate) initials: &'a str,
    pub(crate) size: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a round avatar showing the user's initials.
pub(crate) fn view<'a, Message: 'a>(
    props: AvatarProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette().clone();
    let radius = props.size / 2.0;

    container(text(props.initials).size(props.size * AVATAR_FONT_SCALE))
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.muted.into()),
            text_color: Some(palette.foreground),
            border: Border {
                radius: iced::border::Radius::new(radius),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
