use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Two-valued appearance preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Return the opposite mode.
    pub(crate) fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub(crate) fn id(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Capability for reading and writing the process-wide theme preference.
pub(crate) trait ThemeProvider {
    fn read(&self) -> ThemeMode;
    fn write(&mut self, mode: ThemeMode);
}

#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) muted: String,
    pub(crate) muted_foreground: String,
    pub(crate) border: String,
    pub(crate) popover: String,
    pub(crate) destructive: String,
    pub(crate) success: String,
    pub(crate) warning: String,
}

impl ColorPalette {
    pub(crate) fn light() -> Self {
        Self {
            foreground: String::from("#0A0A0A"),
            background: String::from("#FFFFFF"),
            muted: String::from("#F5F5F5"),
            muted_foreground: String::from("#737373"),
            border: String::from("#E5E5E5"),
            popover: String::from("#FFFFFF"),
            destructive: String::from("#E7000B"),
            success: String::from("#16A34A"),
            warning: String::from("#CA8A04"),
        }
    }

    pub(crate) fn dark() -> Self {
        Self {
            foreground: String::from("#FAFAFA"),
            background: String::from("#0A0A0A"),
            muted: String::from("#262626"),
            muted_foreground: String::from("#A1A1A1"),
            border: String::from("#2E2E2E"),
            popover: String::from("#171717"),
            destructive: String::from("#FF6467"),
            success: String::from("#4ADE80"),
            warning: String::from("#FACC15"),
        }
    }

    pub(crate) fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) muted: Color,
    pub(crate) muted_foreground: Color,
    pub(crate) border: Color,
    pub(crate) popover: Color,
    pub(crate) destructive: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: hex_or_black(&p.foreground),
            background: hex_or_black(&p.background),
            muted: hex_or_black(&p.muted),
            muted_foreground: hex_or_black(&p.muted_foreground),
            border: hex_or_black(&p.border),
            popover: hex_or_black(&p.popover),
            destructive: hex_or_black(&p.destructive),
            success: hex_or_black(&p.success),
            warning: hex_or_black(&p.warning),
        }
    }
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return None;
    }

    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16);
    let r = channel(0).ok()?;
    let g = channel(2).ok()?;
    let b = channel(4).ok()?;
    let a = if hex.len() == 8 { channel(6).ok()? } else { u8::MAX };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

fn hex_or_black(value: &str) -> Color {
    parse_hex_color(value).unwrap_or(Color::BLACK)
}

/// Return `color` with its alpha multiplied by `factor`.
pub(crate) fn with_alpha(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

/// Application theme resolved for one mode.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    mode: ThemeMode,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    pub(crate) fn for_mode(mode: ThemeMode) -> Self {
        let raw_palette = ColorPalette::for_mode(mode);
        Self {
            mode,
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }

    pub(crate) fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.foreground,
            success: palette.success,
            danger: palette.destructive,
            warning: palette.warning,
        };

        Theme::custom(value.mode.id().to_string(), palette)
    }
}

/// Theme props passed through App -> Layout -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Owns the active theme and serves as the app's theme provider.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(mode: ThemeMode) -> Self {
        Self {
            current: AppTheme::for_mode(mode),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

impl ThemeProvider for ThemeManager {
    fn read(&self) -> ThemeMode {
        self.current.mode()
    }

    fn write(&mut self, mode: ThemeMode) {
        if self.current.mode() != mode {
            self.current = AppTheme::for_mode(mode);
        }
    }
}
