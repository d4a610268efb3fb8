//! System clipboard for the terminal front end. Tries the native helpers and
//! `arboard` in turn; the first one that accepts the text wins.

use anyhow::{anyhow, Result};
use std::io::Write as _;
use std::process::{Command, Stdio};
use vibeverse_core::Clipboard;

#[cfg(target_os = "macos")]
const FALLBACKS: &[(&str, &[&str])] = &[("pbcopy", &[])];
#[cfg(target_os = "windows")]
const FALLBACKS: &[(&str, &[&str])] = &[("clip", &[])];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FALLBACKS: &[(&str, &[&str])] = &[("xclip", &["-selection", "clipboard"]), ("xsel", &["-b"])];

/// Feeds `input` to an external copy utility. `Ok(false)` when the program
/// is missing or exits unsuccessfully.
fn try_prog(prog: &str, args: &[&str], input: &str) -> Result<bool> {
    let mut child = match Command::new(prog)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(c) => c,
        Err(_) => return Ok(false),
    };
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }
    let status = child.wait()?;
    Ok(status.success())
}

#[derive(Default)]
pub struct SystemClipboard {
    force_wl_copy: bool,
}

impl SystemClipboard {
    pub fn new(force_wl_copy: bool) -> Self {
        Self { force_wl_copy }
    }

    #[cfg(feature = "clipboard")]
    fn arboard(&self, text: &str) -> Result<()> {
        let mut cb = arboard::Clipboard::new()?;
        cb.set_text(text.to_string())?;
        Ok(())
    }

    #[cfg(not(feature = "clipboard"))]
    fn arboard(&self, _text: &str) -> Result<()> {
        Err(anyhow!("built without clipboard support"))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        if cfg!(target_os = "linux")
            && (self.force_wl_copy || std::env::var_os("WAYLAND_DISPLAY").is_some())
            && try_prog("wl-copy", &[], text)?
        {
            return Ok(());
        }
        let err = match self.arboard(text) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        tracing::debug!(error = %err, "arboard unavailable, trying copy utilities");
        for (prog, args) in FALLBACKS {
            if try_prog(prog, args, text)? {
                return Ok(());
            }
        }
        Err(anyhow!("no clipboard available: {err}"))
    }
}
