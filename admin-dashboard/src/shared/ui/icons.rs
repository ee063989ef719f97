pub(crate) const MENU: &[u8] = include_bytes!("../../../assets/svg/menu.svg");
pub(crate) const CHEVRON_DOWN: &[u8] =
    include_bytes!("../../../assets/svg/chevron-down.svg");
pub(crate) const CHEVRON_UP: &[u8] =
    include_bytes!("../../../assets/svg/chevron-up.svg");
pub(crate) const CHEVRON_LEFT: &[u8] =
    include_bytes!("../../../assets/svg/chevron-left.svg");
pub(crate) const LOG_OUT: &[u8] =
    include_bytes!("../../../assets/svg/log-out.svg");
pub(crate) const THEME_SUN: &[u8] =
    include_bytes!("../../../assets/svg/sun.svg");
pub(crate) const THEME_MOON: &[u8] =
    include_bytes!("../../../assets/svg/moon.svg");
pub(crate) const ROUTE_APPLE: &[u8] =
    include_bytes!("../../../assets/svg/apple.svg");
pub(crate) const ROUTE_BOXES: &[u8] =
    include_bytes!("../../../assets/svg/boxes.svg");
pub(crate) const ROUTE_RULER: &[u8] =
    include_bytes!("../../../assets/svg/ruler.svg");
pub(crate) const ROUTE_UTENSILS: &[u8] =
    include_bytes!("../../../assets/svg/utensils.svg");
