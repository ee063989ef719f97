pub(crate) mod dashboard_frame;
pub(crate) mod sidebar_panel;
pub(crate) mod top_bar;
pub(crate) mod user_menu;
