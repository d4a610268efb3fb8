//! Capabilities the engine consumes but does not implement: presentation,
//! clipboard and native share.
//!
//! Copy and share always resolve to an outcome value. A failure or a user
//! cancel becomes a status message and never stops the session.

use thiserror::Error;
use tracing::debug;

use crate::background::Background;
use crate::quote::Quote;
use crate::status::{text, StatusMessage};
use crate::theme::Theme;

/// Presentation sink. Implementations decide how (and whether) to show things.
pub trait Renderer {
    fn render_quote(&mut self, quote: &Quote, is_favorite: bool);
    fn render_background(&mut self, background: &Background);
    /// Called with the full current list whenever it should be redrawn.
    fn render_favorites(&mut self, favorites: &[Quote]);
    fn render_theme(&mut self, theme: Theme);
    fn set_status(&mut self, status: &StatusMessage);
}

pub trait Clipboard {
    fn set_text(&self, text: &str) -> anyhow::Result<()>;
}

#[derive(Default)]
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn set_text(&self, _text: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share canceled")]
    Canceled,
    #[error("share failed: {0}")]
    Failed(#[from] anyhow::Error),
}

/// Native share sheet. Absent entirely where the platform has none.
pub trait Share {
    fn share_text(&self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    pub fn status(self) -> StatusMessage {
        match self {
            CopyOutcome::Copied => StatusMessage::transient(text::COPIED),
            CopyOutcome::Failed => StatusMessage::transient(text::COPY_FAILED),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Canceled,
    Failed,
    /// No share capability; the text went to the clipboard instead.
    CopiedInstead,
    /// No share capability and the clipboard fallback failed too.
    CopyFailed,
}

impl ShareOutcome {
    pub fn status(self) -> StatusMessage {
        match self {
            ShareOutcome::Shared => StatusMessage::transient(text::SHARED),
            ShareOutcome::Canceled => StatusMessage::transient(text::SHARE_CANCELED),
            ShareOutcome::Failed => StatusMessage::transient(text::SHARE_FAILED),
            ShareOutcome::CopiedInstead => StatusMessage::transient(text::SHARE_FALLBACK),
            ShareOutcome::CopyFailed => StatusMessage::transient(text::COPY_FAILED),
        }
    }
}

pub fn copy_text(clipboard: &dyn Clipboard, text: &str) -> CopyOutcome {
    match clipboard.set_text(text) {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            debug!(error = %e, "clipboard write failed");
            CopyOutcome::Failed
        }
    }
}

pub fn share_text(share: Option<&dyn Share>, clipboard: &dyn Clipboard, text: &str) -> ShareOutcome {
    let Some(share) = share else {
        return match copy_text(clipboard, text) {
            CopyOutcome::Copied => ShareOutcome::CopiedInstead,
            CopyOutcome::Failed => ShareOutcome::CopyFailed,
        };
    };
    match share.share_text(text) {
        Ok(()) => ShareOutcome::Shared,
        Err(ShareError::Canceled) => ShareOutcome::Canceled,
        Err(ShareError::Failed(e)) => {
            debug!(error = %e, "share failed");
            ShareOutcome::Failed
        }
    }
}
