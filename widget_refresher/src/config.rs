use serde::Deserialize;

/// Daemon configuration, extracted from environment variables at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// JSON file holding the per-instance image URLs.
    pub preferences_path: String,

    /// Directory whose subdirectories are the placed widget instances.
    pub widgets_root: String,

    /// Cadence of the synthetic time tick, in seconds.
    #[serde(default = "default_tick_interval_seconds")]
    pub tick_interval_seconds: u64,

    /// Display power state reported to the policy. Headless deployments
    /// have no real display, so "on" is the useful default.
    #[serde(default = "default_screen_on")]
    pub assume_screen_on: bool,

    /// Whether the policy should use the short Wi-Fi refresh interval.
    #[serde(default)]
    pub assume_wifi: bool,
}

fn default_tick_interval_seconds() -> u64 {
    60
}

fn default_screen_on() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_have_defaults() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "preferences_path": "/var/lib/picframe/preferences.json",
            "widgets_root": "/var/lib/picframe/widgets",
        }))
        .unwrap();

        assert_eq!(config.tick_interval_seconds, 60);
        assert!(config.assume_screen_on);
        assert!(!config.assume_wifi);
    }
}
