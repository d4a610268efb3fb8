use std::io::Write;
use vibeverse_core::{Background, Quote, Renderer, StatusMessage, Theme};

/// Prints one tagged line per render call. While muted, calls are dropped;
/// one-shot commands mute the startup render and only show their own result.
pub struct TerminalRenderer<W: Write> {
    out: W,
    muted: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, muted: false }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn line(&mut self, line: &str) {
        if !self.muted {
            let _ = writeln!(self.out, "{line}");
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_quote(&mut self, quote: &Quote, is_favorite: bool) {
        let star = if is_favorite { " ★" } else { "" };
        self.line(&format!("quote: {} — {}{}", quote.text, quote.source, star));
    }

    fn render_background(&mut self, background: &Background) {
        self.line(&format!(
            "background: {} {}",
            background.mode.as_str(),
            background.path
        ));
    }

    fn render_favorites(&mut self, favorites: &[Quote]) {
        self.line("favorites:");
        if favorites.is_empty() {
            self.line("  (no favorites yet)");
        }
        for (i, f) in favorites.iter().enumerate() {
            self.line(&format!("  {i}. {} — {}", f.text, f.source));
        }
    }

    fn render_theme(&mut self, theme: Theme) {
        self.line(&format!("theme: {}", theme.as_str()));
    }

    fn set_status(&mut self, status: &StatusMessage) {
        self.line(&format!("status: {}", status.text));
    }
}
