//! vibeverse-core: quote catalog, background selection, panel state and
//! best-effort persistence for the VibeVerse ambient quote widget.
//!
//! Everything here is single-threaded and action driven. A [`Session`] owns
//! the state, persists through an injected [`KvStore`], and reports what
//! changed to an external [`Renderer`].

pub mod background;
pub mod catalog;
pub mod config;
pub mod env;
pub mod error;
pub mod io;
pub mod panels;
pub mod quote;
pub mod session;
pub mod status;
pub mod store;
pub mod theme;

pub use background::{normalize_video_list, Background, BackgroundSelector, Mode};
pub use catalog::{Catalog, FavoriteToggle};
pub use config::SessionConfig;
pub use env::{Environment, Signal, StaticEnvironment};
pub use error::Error;
pub use io::{Clipboard, CopyOutcome, NoopClipboard, Renderer, Share, ShareError, ShareOutcome};
pub use panels::{Panel, Panels};
pub use quote::{Quote, QuoteKey, DEFAULT_SOURCE};
pub use session::Session;
pub use status::StatusMessage;
pub use store::{keys, FileStore, KvStore, MemStore, Prefs};
pub use theme::Theme;
