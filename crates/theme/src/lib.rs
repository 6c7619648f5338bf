pub mod colors;

pub use colors::Color;

use pulse_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub accent:     Color,
    pub cpu_line:   Color,
    pub ram_line:   Color,
    pub sent_line:  Color,
    pub recv_line:  Color,
    pub font_size:  f32,
    pub padding:    u16,
    pub gap:        u16,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background: Color::from_hex(&cfg.background).unwrap_or(Color::DARK),
            foreground: Color::from_hex(&cfg.foreground).unwrap_or(Color::WHITE),
            accent:     Color::from_hex(&cfg.accent).unwrap_or(Color::PURPLE),
            cpu_line:   Color::from_hex(&cfg.cpu_line).unwrap_or(Color::LINE),
            ram_line:   Color::from_hex(&cfg.ram_line).unwrap_or(Color::LINE),
            sent_line:  Color::from_hex(&cfg.sent_line).unwrap_or(Color::YELLOW),
            recv_line:  Color::from_hex(&cfg.recv_line).unwrap_or(Color::CYAN),
            font_size:  cfg.font_size,
            padding:    cfg.padding,
            gap:        cfg.gap,
        }
    }

    /// Faint colour for plot frames and grid lines.
    pub fn grid(&self) -> Color {
        self.foreground.with_alpha(0.15)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_colors_fall_back() {
        let cfg = ThemeConfig {
            sent_line: "not-a-color".into(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.sent_line, Color::YELLOW);
    }

    #[test]
    fn bad_line_color_falls_back_to_default_line() {
        let cfg = ThemeConfig {
            cpu_line: "#zzz".into(),
            ram_line: String::new(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.cpu_line, Theme::default().cpu_line);
        assert_eq!(theme.ram_line, Color::LINE);
    }

    #[test]
    fn defaults_match_config_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::from_hex("#cba6f7").unwrap());
        assert_eq!(theme.font_size, 14.0);
    }
}
