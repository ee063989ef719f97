pub(crate) mod theme_toggle_button;
