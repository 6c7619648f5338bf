use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lower bound for the sampling cadence; a zero interval would spin the timer.
pub const MIN_INTERVAL_MS: u64 = 100;

/// Root configuration structure parsed from `pulse.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Sampling and window settings.
    pub global: GlobalConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Sampling cadence and window geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Milliseconds between two samples.
    pub update_interval_ms: u64,
    /// Initial window width in logical pixels.
    pub window_width: f32,
    /// Initial window height in logical pixels.
    pub window_height: f32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 1000,
            window_width:       1000.0,
            window_height:      600.0,
        }
    }
}

impl GlobalConfig {
    /// Sampling interval, floored at [`MIN_INTERVAL_MS`].
    #[must_use]
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms.max(MIN_INTERVAL_MS))
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Accent color used for gauges and plot frames.
    pub accent: String,
    /// CPU plot line color.
    pub cpu_line: String,
    /// RAM plot line color.
    pub ram_line: String,
    /// Network "sent" series color.
    pub sent_line: String,
    /// Network "received" series color.
    pub recv_line: String,
    /// Font size in points.
    pub font_size: f32,
    /// Outer padding of each panel (pixels).
    pub padding: u16,
    /// Gap between panels (pixels).
    pub gap: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1e1e2e".to_string(), // Catppuccin Mocha — base
            foreground: "#cdd6f4".to_string(), // Catppuccin Mocha — text
            accent:     "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            cpu_line:   "#f5f5f5".to_string(),
            ram_line:   "#f5f5f5".to_string(),
            sent_line:  "#f9e2af".to_string(), // yellow
            recv_line:  "#89dceb".to_string(), // cyan
            font_size:  14.0,
            padding:    10,
            gap:        8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_fills_defaults() {
        let cfg: PulseConfig = toml::from_str(
            r##"
            [global]
            update_interval_ms = 2500

            [theme]
            accent = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(cfg.global.update_interval_ms, 2500);
        assert_eq!(cfg.global.window_width, 1000.0);
        assert_eq!(cfg.theme.accent, "#ff0000");
        assert_eq!(cfg.theme.background, "#1e1e2e");
    }

    #[test]
    fn interval_is_floored() {
        let global = GlobalConfig { update_interval_ms: 0, ..GlobalConfig::default() };
        assert_eq!(global.update_interval(), Duration::from_millis(MIN_INTERVAL_MS));
    }

    #[test]
    fn default_interval_is_one_second() {
        assert_eq!(GlobalConfig::default().update_interval(), Duration::from_secs(1));
    }
}
