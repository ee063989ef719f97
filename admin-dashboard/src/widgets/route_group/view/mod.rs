pub(crate) mod route_group_menu;
