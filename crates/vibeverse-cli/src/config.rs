use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vibeverse_core::config::{DEFAULT_IMAGE_DIR, DEFAULT_VIDEO_DIR};
use vibeverse_core::{Quote, SessionConfig, StaticEnvironment};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    pub assets: Option<Assets>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    pub environment: Option<EnvironmentPrefs>,
    pub storage: Option<Storage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Assets {
    pub video_dir: Option<String>,
    pub image_dir: Option<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Stand-ins for the browser media queries a terminal does not have.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnvironmentPrefs {
    pub reduced_data: Option<bool>,
    pub reduced_motion: Option<bool>,
    pub prefers_light: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Storage {
    pub path: Option<PathBuf>,
    /// Emulate a storage quota; writes past it are dropped.
    pub quota_bytes: Option<usize>,
}

impl Settings {
    pub fn session_config(&self) -> SessionConfig {
        let assets = self.assets.clone().unwrap_or_default();
        SessionConfig {
            video_dir: non_blank(assets.video_dir).unwrap_or_else(|| DEFAULT_VIDEO_DIR.into()),
            image_dir: non_blank(assets.image_dir).unwrap_or_else(|| DEFAULT_IMAGE_DIR.into()),
            videos: assets.videos,
            images: assets.images,
            starter_quotes: self.quotes.clone(),
        }
    }

    /// Settings values, overridden by `VIBEVERSE_*` variables. Command-line
    /// flags are applied on top by the caller.
    pub fn environment(&self) -> StaticEnvironment {
        let prefs = self.environment.clone().unwrap_or_default();
        let mut env = StaticEnvironment {
            reduced_data: prefs.reduced_data.unwrap_or(false),
            reduced_motion: prefs.reduced_motion.unwrap_or(false),
            prefers_light: prefs.prefers_light.unwrap_or(false),
        };
        if let Some(v) = env_flag("VIBEVERSE_REDUCED_DATA") {
            env.reduced_data = v;
        }
        if let Some(v) = env_flag("VIBEVERSE_REDUCED_MOTION") {
            env.reduced_motion = v;
        }
        if let Ok(scheme) = std::env::var("VIBEVERSE_COLOR_SCHEME") {
            match scheme.trim().to_ascii_lowercase().as_str() {
                "light" => env.prefers_light = true,
                "dark" => env.prefers_light = false,
                _ => {}
            }
        }
        env
    }

    pub fn store_path(&self) -> PathBuf {
        self.storage
            .as_ref()
            .and_then(|s| s.path.clone())
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| state_dir().join("storage.json"))
    }

    pub fn quota_bytes(&self) -> Option<usize> {
        self.storage.as_ref().and_then(|s| s.quota_bytes)
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

fn env_flag(name: &str) -> Option<bool> {
    let v = std::env::var(name).ok()?;
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn config_dir() -> PathBuf {
    if let Some(bd) = directories::BaseDirs::new() {
        bd.config_dir().join("vibeverse")
    } else {
        PathBuf::from("./.config/vibeverse")
    }
}

pub fn state_dir() -> PathBuf {
    // Prefer XDG state dir when available; fall back to config dir
    if let Some(bd) = directories::BaseDirs::new() {
        if let Some(sd) = bd.state_dir() {
            return sd.join("vibeverse");
        }
    }
    config_dir()
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

/// Missing or unreadable settings fall back to defaults.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(s) => toml::from_str(&s).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings, using defaults");
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}
