use serde::{Deserialize, Serialize};

use crate::quote::Quote;

pub const DEFAULT_VIDEO_DIR: &str = "assets/Videos";
pub const DEFAULT_IMAGE_DIR: &str = "assets/images";

/// Static startup configuration. Every field is optional in serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub video_dir: String,
    pub image_dir: String,
    pub videos: Vec<String>,
    pub images: Vec<String>,
    pub starter_quotes: Vec<Quote>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            video_dir: DEFAULT_VIDEO_DIR.to_string(),
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            videos: Vec::new(),
            images: Vec::new(),
            starter_quotes: Vec::new(),
        }
    }
}
