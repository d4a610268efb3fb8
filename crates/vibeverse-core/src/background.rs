//! Background asset selection.
//!
//! Two modes with a fallback ladder: as long as either asset list is
//! non-empty, a selection always yields something to show.

use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::store::{keys, Prefs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Video,
    Image,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Video => "video",
            Mode::Image => "image",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Some(Mode::Video),
            "image" => Some(Mode::Image),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Mode::Video => Mode::Image,
            Mode::Image => Mode::Video,
        }
    }
}

/// A resolved background: which kind, the bare filename, and the path under
/// the configured asset directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Background {
    pub mode: Mode,
    pub file: String,
    pub path: String,
}

// "clip (1).mp4" and "clip.mp4" name the same asset
static COPY_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\(\d+\)(\.\w+)$").expect("static regex"));

/// Collapses filenames differing only by a parenthesized number before the
/// extension, keeping the first occurrence in original order.
pub fn normalize_video_list(files: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(files.len());
    for f in files {
        let base = COPY_SUFFIX.replace(f, "$1").into_owned();
        if seen.insert(base) {
            out.push(f.clone());
        }
    }
    out
}

pub struct BackgroundSelector {
    mode: Mode,
    video_index: Option<usize>,
    videos: Vec<String>,
    images: Vec<String>,
    video_dir: String,
    image_dir: String,
    downgrade: bool,
    prefs: Prefs,
}

impl BackgroundSelector {
    /// Reads the persisted mode (default video). The video list is used as
    /// given; call [`BackgroundSelector::normalize`] before the first selection.
    pub fn load(
        prefs: Prefs,
        video_dir: &str,
        image_dir: &str,
        videos: Vec<String>,
        images: Vec<String>,
    ) -> Self {
        let mode = Mode::parse(&prefs.get_string(keys::BG_MODE, Mode::Video.as_str()))
            .unwrap_or(Mode::Video);
        Self {
            mode,
            video_index: None,
            videos,
            images,
            video_dir: video_dir.trim_end_matches('/').to_string(),
            image_dir: image_dir.trim_end_matches('/').to_string(),
            downgrade: false,
            prefs,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn video_index(&self) -> Option<usize> {
        self.video_index
    }

    pub fn videos(&self) -> &[String] {
        &self.videos
    }

    pub fn normalize(&mut self) {
        let before = self.videos.len();
        self.videos = normalize_video_list(&self.videos);
        if self.videos.len() != before {
            debug!(
                dropped = before - self.videos.len(),
                "collapsed duplicate video files"
            );
        }
    }

    /// Reduced-data / reduced-motion: prefer images. Only the in-memory mode
    /// changes here; unforced selections keep avoiding video afterwards, an
    /// explicit [`BackgroundSelector::toggle_mode`] still wins.
    pub fn apply_downgrade(&mut self) {
        self.downgrade = true;
        self.mode = Mode::Image;
    }

    /// Picks the next background. Returns `None`, leaving mode and index
    /// untouched, only when both asset lists are empty.
    pub fn select_next<R: Rng + ?Sized>(
        &mut self,
        forced: Option<Mode>,
        rng: &mut R,
    ) -> Option<Background> {
        let wanted = forced.unwrap_or(
            if self.mode == Mode::Video && !self.downgrade && !self.videos.is_empty() {
                Mode::Video
            } else {
                Mode::Image
            },
        );

        let picked = match wanted {
            Mode::Video => self.advance_video().or_else(|| self.random_image(rng)),
            Mode::Image => self.random_image(rng).or_else(|| self.advance_video()),
        }?;

        if picked.mode != wanted {
            debug!(wanted = wanted.as_str(), got = picked.mode.as_str(), "background fell back");
        }
        self.mode = picked.mode;
        self.prefs.set_string(keys::BG_MODE, self.mode.as_str());
        Some(picked)
    }

    /// User toggle: flip and persist the mode, then select in the new mode.
    pub fn toggle_mode<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Background> {
        self.mode = self.mode.flipped();
        self.prefs.set_string(keys::BG_MODE, self.mode.as_str());
        self.select_next(Some(self.mode), rng)
    }

    fn advance_video(&mut self) -> Option<Background> {
        if self.videos.is_empty() {
            return None;
        }
        let next = self
            .video_index
            .map_or(0, |i| (i + 1) % self.videos.len());
        self.video_index = Some(next);
        let file = self.videos[next].clone();
        Some(Background {
            mode: Mode::Video,
            path: format!("{}/{}", self.video_dir, file),
            file,
        })
    }

    fn random_image<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Background> {
        let file = self.images.choose(rng)?.clone();
        Some(Background {
            mode: Mode::Image,
            path: format!("{}/{}", self.image_dir, file),
            file,
        })
    }
}
