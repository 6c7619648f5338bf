pub mod schema;
pub mod watcher;

pub use schema::{GlobalConfig, PulseConfig, ThemeConfig};
pub use watcher::ConfigWatcher;

use pulse_core::{PulseError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read `pulse.toml` at `path`.
///
/// A missing file is not an error: the monitor runs on defaults until one
/// is created (the watcher picks it up).
pub fn load(path: impl AsRef<Path>) -> Result<PulseConfig> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(raw) => parse(&raw),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "no config file; using defaults");
            Ok(PulseConfig::default())
        }
        Err(e) => Err(PulseError::Config(format!("cannot read '{}': {e}", path.display()))),
    }
}

/// Parse a config document; omitted keys take their defaults.
pub fn parse(raw: &str) -> Result<PulseConfig> {
    toml::from_str(raw).map_err(|e| PulseError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("pulse").join("pulse.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load("/nonexistent/pulse/pulse.toml").unwrap();
        assert_eq!(cfg.global.update_interval_ms, 1000);
    }

    #[test]
    fn unreadable_path_is_config_error() {
        // A directory exists but cannot be read as a file.
        let err = load(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, PulseError::Config(_)));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = parse("[global\nupdate_interval_ms = ").unwrap_err();
        assert!(matches!(err, PulseError::Config(_)));
    }

    #[test]
    fn default_path_ends_with_pulse_toml() {
        assert!(default_path().ends_with("pulse/pulse.toml"));
    }
}
