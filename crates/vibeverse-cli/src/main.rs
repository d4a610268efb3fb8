mod clipboard;
mod config;
mod render;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vibeverse_core::{status, FileStore, KvStore, Quote, Renderer, Session, StatusMessage};

use crate::clipboard::SystemClipboard;
use crate::render::TerminalRenderer;

#[derive(Parser)]
#[command(name = "vibeverse", version, about = "Ambient quotes and backgrounds for your terminal")]
struct Cli {
    /// Settings file (defaults to <config dir>/vibeverse/settings.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Storage file (overrides settings)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Seed random picks for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Act as if the user asked to save data (image backgrounds only)
    #[arg(long, global = true)]
    reduced_data: bool,
    /// Act as if the user asked for reduced motion (image backgrounds only)
    #[arg(long, global = true)]
    reduced_motion: bool,
    /// Ambient color scheme is light
    #[arg(long, global = true, conflicts_with = "dark")]
    light: bool,
    /// Ambient color scheme is dark
    #[arg(long, global = true)]
    dark: bool,
    /// Always try wl-copy first (Linux)
    #[arg(long, global = true)]
    wl_copy: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a session and show the first quote and background (default)
    Show,
    /// Show a new random quote; the background rotates too
    Next,
    /// Rotate the background, or flip between video and image with --toggle
    Background {
        #[arg(long)]
        toggle: bool,
    },
    /// Add a quote (read from STDIN if TEXT is omitted)
    Add {
        text: Option<String>,
        #[arg(long, default_value = "")]
        source: String,
    },
    /// Add the given quote to favorites, or remove it if already there
    Favorite {
        text: String,
        #[arg(long, default_value = "")]
        source: String,
    },
    /// List favorites
    Favorites {
        #[arg(long)]
        json: bool,
    },
    /// List every quote in the catalog
    Quotes {
        #[arg(long)]
        json: bool,
    },
    /// Remove the favorite at INDEX (clamped to the list)
    RemoveFavorite { index: usize },
    /// Copy the favorite at INDEX to the clipboard
    CopyFavorite { index: usize },
    /// Share the favorite at INDEX (falls back to copying)
    ShareFavorite { index: usize },
    /// Print the theme, or flip it with --toggle
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Print resolved paths and settings
    Config {
        #[arg(long)]
        json: bool,
    },
    /// Read actions from STDIN, one per line (new, bg, mode, theme, fav,
    /// copy, share, open/close add|favorites, add TEXT | SOURCE,
    /// copy-fav N, share-fav N, remove-fav N, quit)
    Run,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("VIBEVERSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let settings_path = cli.config.clone().unwrap_or_else(config::settings_path);
    let settings = config::load_settings(&settings_path);
    let store_path = cli.store.clone().unwrap_or_else(|| settings.store_path());
    let command = cli.command.unwrap_or(Commands::Show);

    if let Commands::Config { json } = command {
        if json {
            let v = serde_json::json!({
                "config_dir": config::config_dir(),
                "settings_path": settings_path,
                "store_path": store_path,
                "settings": settings,
            });
            println!("{}", serde_json::to_string_pretty(&v)?);
        } else {
            println!("config dir: {}", config::config_dir().display());
            println!("settings:   {}", settings_path.display());
            println!("store:      {}", store_path.display());
        }
        return Ok(());
    }

    let mut env = settings.environment();
    if cli.reduced_data {
        env.reduced_data = true;
    }
    if cli.reduced_motion {
        env.reduced_motion = true;
    }
    if cli.light {
        env.prefers_light = true;
    } else if cli.dark {
        env.prefers_light = false;
    }

    let mut file_store = FileStore::new(&store_path);
    if let Some(quota) = settings.quota_bytes() {
        file_store = file_store.with_quota(quota);
    }
    let store: Arc<dyn KvStore> = Arc::new(file_store);
    let rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };
    let clipboard = SystemClipboard::new(cli.wl_copy);

    let mut out = TerminalRenderer::new(io::stdout());
    let show_startup = matches!(command, Commands::Show | Commands::Run);
    out.set_muted(!show_startup);
    let mut session = Session::bootstrap(&settings.session_config(), store, &env, rng, &mut out);
    out.set_muted(false);

    match command {
        Commands::Show | Commands::Config { .. } => {}
        Commands::Next => {
            session.new_quote(&mut out);
        }
        Commands::Background { toggle } => {
            if toggle {
                session.toggle_mode(&mut out);
            } else {
                session.next_background(&mut out);
            }
        }
        Commands::Add { text, source } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            // a blank submission has already reported its status
            if let Ok(quote) = session.submit_quote(&text, &source, &mut out) {
                out.line(&format!("added {}", quote.id));
            }
        }
        Commands::Favorite { text, source } => {
            match Quote::from_input(&text, &source) {
                Some(quote) => {
                    session.toggle_favorite_of(&quote, &mut out);
                }
                None => out.set_status(&StatusMessage::transient(status::text::BLANK_INPUT)),
            }
        }
        Commands::Favorites { json } => {
            let favorites = session.catalog().favorites();
            if json {
                println!("{}", serde_json::to_string_pretty(favorites)?);
            } else {
                out.render_favorites(favorites);
            }
        }
        Commands::Quotes { json } => {
            let quotes = session.catalog().quotes();
            if json {
                println!("{}", serde_json::to_string_pretty(quotes)?);
            } else {
                for (i, q) in quotes.iter().enumerate() {
                    out.line(&format!("{i}\t{}\t{}", q.text, q.source));
                }
            }
        }
        Commands::RemoveFavorite { index } => {
            if session.remove_favorite(index, &mut out).is_none() {
                out.line("status: No favorites yet.");
            }
        }
        Commands::CopyFavorite { index } => {
            if session.copy_favorite(index, &clipboard, &mut out).is_none() {
                out.line("status: No favorites yet.");
            }
        }
        Commands::ShareFavorite { index } => {
            // terminals have no share sheet
            if session
                .share_favorite(index, None, &clipboard, &mut out)
                .is_none()
            {
                out.line("status: No favorites yet.");
            }
        }
        Commands::Theme { toggle } => {
            if toggle {
                session.toggle_theme(&mut out);
            } else {
                out.render_theme(session.theme());
            }
        }
        Commands::Run => {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                        out.line(&format!("error: {e}"));
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                match script::parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(action)) => {
                        if !script::apply(&mut session, action, &clipboard, &mut out) {
                            break;
                        }
                    }
                    Err(msg) => out.line(&format!("error: {msg}")),
                }
            }
        }
    }

    Ok(())
}
