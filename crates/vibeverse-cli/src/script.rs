//! Line-oriented action scripts for `vibeverse run`.

use vibeverse_core::{Clipboard, Panel, Renderer, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NewQuote,
    NextBackground,
    ToggleMode,
    ToggleTheme,
    ToggleFavorite,
    Copy,
    Share,
    Open(Panel),
    Close(Panel),
    /// `add <text> | <source>`; the source part is optional.
    Add { text: String, source: String },
    CopyFavorite(usize),
    ShareFavorite(usize),
    RemoveFavorite(usize),
    Quit,
}

/// `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let action = match word.to_ascii_lowercase().as_str() {
        "new" | "next" => Action::NewQuote,
        "bg" => Action::NextBackground,
        "mode" => Action::ToggleMode,
        "theme" => Action::ToggleTheme,
        "fav" => Action::ToggleFavorite,
        "copy" => Action::Copy,
        "share" => Action::Share,
        "open" => Action::Open(panel(rest)?),
        "close" => Action::Close(panel(rest)?),
        "add" => {
            let (text, source) = rest.split_once('|').unwrap_or((rest, ""));
            Action::Add {
                text: text.to_string(),
                source: source.to_string(),
            }
        }
        "copy-fav" => Action::CopyFavorite(index(rest)?),
        "share-fav" => Action::ShareFavorite(index(rest)?),
        "remove-fav" => Action::RemoveFavorite(index(rest)?),
        "quit" | "exit" => Action::Quit,
        other => return Err(format!("unknown action '{other}'")),
    };
    Ok(Some(action))
}

fn panel(s: &str) -> Result<Panel, String> {
    Panel::parse(s).ok_or_else(|| format!("unknown panel '{s}' (expected add|favorites)"))
}

fn index(s: &str) -> Result<usize, String> {
    s.parse()
        .map_err(|_| format!("expected a row number, got '{s}'"))
}

/// Applies one action. Returns `false` when the script should stop.
pub fn apply(
    session: &mut Session,
    action: Action,
    clipboard: &dyn Clipboard,
    renderer: &mut dyn Renderer,
) -> bool {
    match action {
        Action::NewQuote => {
            session.new_quote(renderer);
        }
        Action::NextBackground => {
            session.next_background(renderer);
        }
        Action::ToggleMode => {
            session.toggle_mode(renderer);
        }
        Action::ToggleTheme => {
            session.toggle_theme(renderer);
        }
        Action::ToggleFavorite => {
            session.toggle_favorite(renderer);
        }
        Action::Copy => {
            session.copy_current(clipboard, renderer);
        }
        Action::Share => {
            session.share_current(None, clipboard, renderer);
        }
        Action::Open(p) => session.open_panel(p, renderer),
        Action::Close(p) => session.close_panel(p),
        Action::Add { text, source } => {
            // blank input already produced a status line
            let _ = session.submit_quote(&text, &source, renderer);
        }
        Action::CopyFavorite(i) => {
            session.copy_favorite(i, clipboard, renderer);
        }
        Action::ShareFavorite(i) => {
            session.share_favorite(i, None, clipboard, renderer);
        }
        Action::RemoveFavorite(i) => {
            session.remove_favorite(i, renderer);
        }
        Action::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions_with_arguments() {
        assert_eq!(parse_line("  # note").unwrap(), None);
        assert_eq!(parse_line("open favorites").unwrap(), Some(Action::Open(Panel::Favorites)));
        assert_eq!(parse_line("remove-fav 2").unwrap(), Some(Action::RemoveFavorite(2)));
        assert_eq!(
            parse_line("add Be kind | Me").unwrap(),
            Some(Action::Add {
                text: "Be kind ".into(),
                source: " Me".into()
            })
        );
        assert_eq!(
            parse_line("add Alone").unwrap(),
            Some(Action::Add {
                text: "Alone".into(),
                source: String::new()
            })
        );
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(parse_line("dance").is_err());
        assert!(parse_line("open drawer").is_err());
        assert!(parse_line("copy-fav x").is_err());
    }
}
