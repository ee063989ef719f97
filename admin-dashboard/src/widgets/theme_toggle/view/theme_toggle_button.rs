use iced::Element;

use super::super::event::ThemeToggleIntent;
use super::super::model::ThemeToggleViewModel;
use crate::components::primitive::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::shared::ui::icons::{THEME_MOON, THEME_SUN};
use crate::shared::ui::theme::{ThemeMode, ThemeProps};

const TOGGLE_BUTTON_SIZE: f32 = 36.0;
const TOGGLE_ICON_SIZE: f32 = 19.0;

/// Props for rendering the theme toggle button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeToggleButtonProps<'a> {
    pub(crate) vm: ThemeToggleViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the outline button showing the icon for the current mode.
pub(crate) fn view<'a>(
    props: ThemeToggleButtonProps<'a>,
) -> Element<'a, ThemeToggleIntent> {
    icon_button_view(IconButtonProps {
        icon: mode_icon(props.vm.mode),
        theme: props.theme,
        size: TOGGLE_BUTTON_SIZE,
        icon_size: TOGGLE_ICON_SIZE,
    })
    .map(|_| ThemeToggleIntent::Toggle)
}

fn mode_icon(mode: ThemeMode) -> &'static [u8] {
    match mode {
        ThemeMode::Light => THEME_SUN,
        ThemeMode::Dark => THEME_MOON,
    }
}

#[cfg(test)]
mod tests {
    use super::mode_icon;
    use crate::shared::ui::icons::{THEME_MOON, THEME_SUN};
    use crate::shared::ui::theme::ThemeMode;

    #[test]
    fn given_mode_when_picking_icon_then_sun_is_light_and_moon_is_dark() {
        assert_eq!(mode_icon(ThemeMode::Light), THEME_SUN);
        assert_eq!(mode_icon(ThemeMode::Dark), THEME_MOON);
    }
}
