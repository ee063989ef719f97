pub(crate) mod avatar;
pub(crate) mod icon_button;
pub(crate) mod menu_item;
pub(crate) mod nav_link;
pub(crate) mod separator;
