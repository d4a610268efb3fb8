use std::borrow::Cow;
use std::time::Duration;

/// How long a transient status stays up unless replaced.
pub const DEFAULT_CLEAR_AFTER: Duration = Duration::from_millis(1400);

pub mod text {
    pub const NO_QUOTES: &str = "No quotes yet. Add one!";
    pub const SAVED: &str = "Saved your quote.";
    pub const BLANK_INPUT: &str = "Type something uplifting first.";
    pub const FAVORITE_ADDED: &str = "Added to favorites.";
    pub const FAVORITE_REMOVED: &str = "Removed from favorites.";
    pub const FAVORITE_DELETED: &str = "Removed favorite.";
    pub const COPIED: &str = "Copied to clipboard.";
    pub const COPY_FAILED: &str = "Copy failed.";
    pub const SHARED: &str = "Shared.";
    pub const SHARE_CANCELED: &str = "Share canceled.";
    pub const SHARE_FAILED: &str = "Share failed.";
    pub const SHARE_FALLBACK: &str = "Share not supported — copied instead.";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: Cow<'static, str>,
    pub clear_after: Duration,
}

impl StatusMessage {
    pub fn transient(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            clear_after: DEFAULT_CLEAR_AFTER,
        }
    }
}
