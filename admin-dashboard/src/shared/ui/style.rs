use iced::widget::{button, container};
use iced::{Background, Border};

use super::theme::{IcedColorPalette, ThemeProps, with_alpha};

pub(crate) const CONTROL_RADIUS: f32 = 6.0;
const HOVER_ALPHA: f32 = 0.1;

/// Return a styled container closure for dropdown panels.
pub(crate) fn menu_panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.popover.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::new(CONTROL_RADIUS),
        },
        ..Default::default()
    }
}

/// Return a styled container closure for fixed chrome surfaces.
pub(crate) fn surface_style(
    theme: ThemeProps<'_>,
    bordered: bool,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: if bordered { 1.0 } else { 0.0 },
            color: palette.border,
            radius: iced::border::Radius::new(0.0),
        },
        ..Default::default()
    }
}

/// Button with a visible border that fills on hover.
pub(crate) fn outline_button_style(
    palette: &IcedColorPalette,
    status: button::Status,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.muted))
        },
        _ => Some(Background::Color(palette.background)),
    };

    button::Style {
        background,
        text_color: palette.foreground,
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::new(CONTROL_RADIUS),
        },
        ..Default::default()
    }
}

/// Borderless button that only shows a background on hover.
pub(crate) fn ghost_button_style(
    palette: &IcedColorPalette,
    status: button::Status,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(
            Background::Color(with_alpha(palette.foreground, HOVER_ALPHA)),
        ),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.foreground,
        border: Border {
            width: 0.0,
            color: iced::Color::TRANSPARENT,
            radius: iced::border::Radius::new(CONTROL_RADIUS),
        },
        ..Default::default()
    }
}
