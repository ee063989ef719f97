use iced::widget::text::Wrapping;
use iced::widget::{Column, Space, column, container, pin, row, text};
use iced::{Element, Length, alignment};

use super::super::event::DashboardIntent;
use super::super::model::SIDEBAR_WIDTH;
use crate::components::primitive::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::components::primitive::separator::{
    SeparatorProps, view as separator_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::CHEVRON_LEFT;
use crate::shared::ui::style::surface_style;
use crate::shared::ui::theme::ThemeProps;

const SIDEBAR_TITLE: &str = "Admin Dashboard";
const SIDEBAR_PADDING: f32 = 16.0;
const SIDEBAR_SECTION_SPACING: f32 = 8.0;
const SIDEBAR_GROUPS_TOP_MARGIN: f32 = 8.0;
const COLLAPSE_BUTTON_SIZE: f32 = 36.0;
const COLLAPSE_ICON_SIZE: f32 = 16.0;

/// Props for rendering the slide-in sidebar panel.
pub(crate) struct SidebarPanelProps<'a, Message> {
    /// Visible width of the panel, between 0 and the full panel width.
    pub(crate) offset: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) route_groups: Vec<Element<'a, Message>>,
    pub(crate) on_intent: fn(DashboardIntent) -> Message,
}

/// Render the full-width panel slid in by `offset` from the left edge.
pub(crate) fn view<'a, Message: Clone + 'a>(
    props: SidebarPanelProps<'a, Message>,
) -> Element<'a, Message> {
    let on_intent = props.on_intent;

    let title = text(SIDEBAR_TITLE)
        .size(props.fonts.heading.size)
        .font(props.fonts.heading.font_type)
        .wrapping(Wrapping::None);

    let collapse_button = icon_button_view(IconButtonProps {
        icon: CHEVRON_LEFT,
        theme: props.theme,
        size: COLLAPSE_BUTTON_SIZE,
        icon_size: COLLAPSE_ICON_SIZE,
    })
    .map(move |_| on_intent(DashboardIntent::CollapseSidebar));

    let header = row![title, Space::new().width(Length::Fill), collapse_button]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill);

    let separator = separator_view(SeparatorProps { theme: props.theme });

    let groups = Column::with_children(props.route_groups)
        .padding(iced::Padding {
            top: SIDEBAR_GROUPS_TOP_MARGIN,
            ..iced::Padding::ZERO
        })
        .width(Length::Fill);

    let panel = container(
        column![header, separator, groups]
            .spacing(SIDEBAR_SECTION_SPACING)
            .width(Length::Fill),
    )
    .padding(SIDEBAR_PADDING)
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .style(surface_style(props.theme, true));

    let visible = visible_width(props.offset);

    container(pin(panel).x(panel_x(visible)))
        .width(Length::Fixed(visible))
        .height(Length::Fill)
        .clip(true)
        .into()
}

fn visible_width(offset: f32) -> f32 {
    offset.clamp(0.0, SIDEBAR_WIDTH)
}

/// Left edge of the panel; negative while part of it is off screen.
fn panel_x(visible: f32) -> f32 {
    visible - SIDEBAR_WIDTH
}
