use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::easing::EasingType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Tween settings for animated transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Interpolate index changes and release snaps
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Tween duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Easing curve applied to every tween
    #[serde(default)]
    pub easing: EasingType,
    /// Display refresh rate driving the frame clock
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            duration_ms: default_duration_ms(),
            easing: EasingType::default(),
            fps: default_fps(),
        }
    }
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Interval between two display refresh ticks
    pub fn frame_interval(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(1000 / default_fps() as u64)
        } else {
            Duration::from_millis((1000 / self.fps as u64).max(1))
        }
    }

    /// Check if animating transitions are actually interpolated
    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.duration_ms > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Release velocity (px/ms) above which a short drag still changes tab
    #[serde(default = "default_fling_velocity")]
    pub fling_velocity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            fling_velocity: default_fling_velocity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Header labels, one per tab
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
        }
    }
}

impl TabsConfig {
    pub fn tab_count(&self) -> usize {
        self.labels.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Approximate pixel width of one terminal column
    #[serde(default = "default_column_width_px")]
    pub column_width_px: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            column_width_px: default_column_width_px(),
        }
    }
}

impl UiConfig {
    /// Fling threshold converted from px/ms to columns/ms
    pub fn fling_velocity_columns(&self, gesture: &GestureConfig) -> f64 {
        gesture.fling_velocity / self.column_width_px
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swipetabs")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    200
}

fn default_fps() -> u32 {
    60
}

fn default_fling_velocity() -> f64 {
    0.5
}

fn default_labels() -> Vec<String> {
    vec!["One".to_string(), "Two".to_string(), "Three".to_string()]
}

fn default_tick_rate() -> u64 {
    100
}

fn default_column_width_px() -> f64 {
    8.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the tab group cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        if self.tabs.labels.is_empty() {
            return Err(crate::Error::Config(
                "tabs.labels must name at least one tab".to_string(),
            ));
        }
        if !(self.ui.column_width_px.is_finite() && self.ui.column_width_px > 0.0) {
            return Err(crate::Error::Config(format!(
                "ui.column_width_px must be positive, got {}",
                self.ui.column_width_px
            )));
        }
        Ok(())
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/swipetabs/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("swipetabs")
            .join("config.toml")
    }

    /// Get the log file path used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("swipetabs.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.animation.smooth_enabled);
        assert_eq!(config.animation.duration_ms, 200);
        assert_eq!(config.animation.easing, EasingType::CubicInOut);
        assert_eq!(config.animation.fps, 60);
        assert!((config.gesture.fling_velocity - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.tabs.tab_count(), 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [animation]
            duration_ms = 350
            easing = "elastic-in-out"

            [tabs]
            labels = ["Inbox", "Archive"]
            "#,
        )
        .unwrap();

        assert_eq!(config.animation.duration(), Duration::from_millis(350));
        assert_eq!(config.animation.easing, EasingType::ElasticInOut);
        assert_eq!(config.animation.fps, 60);
        assert_eq!(config.tabs.tab_count(), 2);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("animation = 3").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_empty_labels_rejected() {
        let err = AppConfig::from_toml("[tabs]\nlabels = []").unwrap_err();
        assert!(matches!(err, crate::Error::Config(msg) if msg.contains("tabs.labels")));
    }

    #[test]
    fn test_bad_column_width_rejected() {
        let err = AppConfig::from_toml("[ui]\ncolumn_width_px = 0.0").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_fling_velocity_in_columns() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ui.fling_velocity_columns(&config.gesture), 0.0625);
    }

    #[test]
    fn test_toml_round_trip_keeps_easing() {
        let mut config = AppConfig::default();
        config.animation.easing = EasingType::Linear;
        let text = config.to_toml().unwrap();
        assert!(text.contains("easing = \"linear\""));
        assert_eq!(AppConfig::from_toml(&text).unwrap().animation.easing, EasingType::Linear);
    }

    #[test]
    fn test_is_smooth() {
        let mut config = AnimationConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_frame_interval_fallback() {
        let mut config = AnimationConfig::default();
        assert_eq!(config.frame_interval(), Duration::from_millis(16));

        config.fps = 0;
        assert_eq!(config.frame_interval(), Duration::from_millis(16));

        config.fps = 10_000;
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }
}
