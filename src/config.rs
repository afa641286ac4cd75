use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// RGB color represented as a 3-element array.
pub type Rgb = [u8; 3];

/// Color configuration for the UI.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Accent used for highlights, links and the active chat (blue by default)
    pub accent: Rgb,
    /// Main background color
    pub bg_primary: Rgb,
    /// Sidebar background color
    pub bg_sidebar: Rgb,
    /// Primary text color
    pub text_primary: Rgb,
    /// Muted text color for hints and breadcrumbs
    pub text_muted: Rgb,
    /// Border color for cards and panes
    pub border: Rgb,
    /// Logo gradient start color
    pub logo_gradient_start: Rgb,
    /// Logo gradient end color
    pub logo_gradient_end: Rgb,

    // Difficulty badges
    /// Badge color for easy cases
    pub difficulty_easy: Rgb,
    /// Badge color for moderate cases
    pub difficulty_moderate: Rgb,
    /// Badge color for hard cases
    pub difficulty_hard: Rgb,

    // Status colors
    /// Uploaded-file banner and chat upload marker
    pub status_uploaded: Rgb,
    /// Notification dot and sign out entry
    pub status_alert: Rgb,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: [59, 130, 246],               // Blue
            bg_primary: [20, 20, 25],
            bg_sidebar: [30, 30, 35],
            text_primary: [230, 230, 235],
            text_muted: [140, 140, 160],
            border: [80, 80, 100],
            logo_gradient_start: [59, 130, 246],  // Blue
            logo_gradient_end: [6, 182, 212],     // Cyan
            difficulty_easy: [34, 197, 94],       // Green
            difficulty_moderate: [234, 179, 8],   // Yellow
            difficulty_hard: [239, 68, 68],       // Red
            status_uploaded: [34, 197, 94],       // Green
            status_alert: [239, 68, 68],          // Red
        }
    }
}

/// Behavior configuration for the UI.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Idle polling interval in milliseconds
    pub idle_poll_ms: u64,
    /// Cursor blink interval in milliseconds
    pub cursor_blink_ms: u64,
    /// Maximum number of notifications shown at once
    pub max_toasts: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            idle_poll_ms: 50,
            cursor_blink_ms: 530,
            max_toasts: 3,
        }
    }
}

/// The signed-in user shown in the sidebar and greeting.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub display_name: String,
    pub email: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: "Mon".to_string(),
            email: "mon@example.com".to_string(),
        }
    }
}

/// Log output settings. `RUST_LOG` overrides `level` when set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Whether to write a log file at all
    pub enabled: bool,
    /// Filter directive, e.g. "info" or "casewise=debug"
    pub level: String,
    /// File name inside the config directory
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file_name: "casewise.log".to_string(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub behavior: BehaviorConfig,
    pub profile: ProfileConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Returns the config directory: ~/.config/casewise
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("casewise"))
    }

    /// Returns the default config file path: ~/.config/casewise/config.toml
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::default_path()
            .and_then(|path| Self::load_from_path(&path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::default_path() {
            self.save_to_path(&path)
        } else {
            Err(anyhow::anyhow!("Could not determine config directory"))
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl ThemeConfig {
    /// Convert an RGB array to a ratatui Color.
    pub fn to_color(rgb: &Rgb) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Convert an RGB array to a tuple for gradient math.
    pub fn to_tuple(rgb: &Rgb) -> (u8, u8, u8) {
        (rgb[0], rgb[1], rgb[2])
    }

    pub fn accent(&self) -> ratatui::style::Color {
        Self::to_color(&self.accent)
    }

    pub fn bg_primary(&self) -> ratatui::style::Color {
        Self::to_color(&self.bg_primary)
    }

    pub fn bg_sidebar(&self) -> ratatui::style::Color {
        Self::to_color(&self.bg_sidebar)
    }

    pub fn text_primary(&self) -> ratatui::style::Color {
        Self::to_color(&self.text_primary)
    }

    pub fn text_muted(&self) -> ratatui::style::Color {
        Self::to_color(&self.text_muted)
    }

    pub fn border(&self) -> ratatui::style::Color {
        Self::to_color(&self.border)
    }

    pub fn status_uploaded(&self) -> ratatui::style::Color {
        Self::to_color(&self.status_uploaded)
    }

    pub fn status_alert(&self) -> ratatui::style::Color {
        Self::to_color(&self.status_alert)
    }

    /// Get logo gradient colors as tuples.
    pub fn logo_gradient(&self) -> ((u8, u8, u8), (u8, u8, u8)) {
        (
            Self::to_tuple(&self.logo_gradient_start),
            Self::to_tuple(&self.logo_gradient_end),
        )
    }

    /// Badge color for a case difficulty.
    pub fn difficulty(&self, difficulty: crate::catalog::Difficulty) -> ratatui::style::Color {
        use crate::catalog::Difficulty;
        match difficulty {
            Difficulty::Easy => Self::to_color(&self.difficulty_easy),
            Difficulty::Moderate => Self::to_color(&self.difficulty_moderate),
            Difficulty::Hard => Self::to_color(&self.difficulty_hard),
        }
    }
}
