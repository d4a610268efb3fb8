//! The coordinating session: owns every piece of state, runs the startup
//! sequence, and exposes one method per user action.

use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, info};

use crate::background::{Background, BackgroundSelector, Mode};
use crate::catalog::{Catalog, FavoriteToggle};
use crate::config::SessionConfig;
use crate::env::{Environment, Signal};
use crate::error::{Error, Result};
use crate::io::{self, Clipboard, CopyOutcome, Renderer, Share, ShareOutcome};
use crate::panels::{Panel, Panels};
use crate::quote::Quote;
use crate::status::{text, StatusMessage};
use crate::store::{keys, KvStore, Prefs};
use crate::theme::Theme;

pub struct Session {
    prefs: Prefs,
    catalog: Catalog,
    background: BackgroundSelector,
    panels: Panels,
    theme: Theme,
    current: Option<Quote>,
    rng: Box<dyn RngCore>,
}

impl Session {
    /// Startup sequence: load and reseed the catalog, apply the theme,
    /// normalize videos, apply the environment downgrade, then show a first
    /// background and a first quote.
    pub fn bootstrap(
        config: &SessionConfig,
        store: Arc<dyn KvStore>,
        env: &dyn Environment,
        rng: Box<dyn RngCore>,
        renderer: &mut dyn Renderer,
    ) -> Self {
        let prefs = Prefs::new(store);
        let catalog = Catalog::load(prefs.clone(), &config.starter_quotes);

        let env_theme = Theme::from_prefers_light(env.signal(Signal::PrefersLight));
        let theme =
            Theme::parse(&prefs.get_string(keys::THEME, env_theme.as_str())).unwrap_or(env_theme);

        let background = BackgroundSelector::load(
            prefs.clone(),
            &config.video_dir,
            &config.image_dir,
            config.videos.clone(),
            config.images.clone(),
        );

        let mut session = Self {
            prefs,
            catalog,
            background,
            panels: Panels::default(),
            theme,
            current: None,
            rng,
        };

        session.apply_theme(renderer);
        session.background.normalize();
        if env.wants_downgrade() {
            info!("reduced data or motion requested, using image backgrounds");
            session.background.apply_downgrade();
        }
        let mode = session.background.mode();
        session.show_background(Some(mode), renderer);
        session.show_random_quote(renderer);
        info!(
            quotes = session.catalog.quotes().len(),
            favorites = session.catalog.favorites().len(),
            mode = session.background.mode().as_str(),
            theme = session.theme.as_str(),
            "session ready"
        );
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn background(&self) -> &BackgroundSelector {
        &self.background
    }

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn current(&self) -> Option<&Quote> {
        self.current.as_ref()
    }

    /// New random quote, plus a background rotation.
    pub fn new_quote(&mut self, renderer: &mut dyn Renderer) -> Option<Quote> {
        let quote = self.show_random_quote(renderer)?;
        self.show_background(None, renderer);
        Some(quote)
    }

    pub fn next_background(&mut self, renderer: &mut dyn Renderer) -> Option<Background> {
        self.show_background(None, renderer)
    }

    pub fn toggle_mode(&mut self, renderer: &mut dyn Renderer) -> Option<Background> {
        let bg = self.background.toggle_mode(&mut *self.rng)?;
        renderer.render_background(&bg);
        Some(bg)
    }

    pub fn toggle_theme(&mut self, renderer: &mut dyn Renderer) -> Theme {
        self.theme = self.theme.toggled();
        self.apply_theme(renderer);
        self.theme
    }

    /// Favorite toggle for the quote on screen. No-op before any quote shows.
    pub fn toggle_favorite(&mut self, renderer: &mut dyn Renderer) -> Option<FavoriteToggle> {
        let quote = self.current.clone()?;
        Some(self.toggle_favorite_of(&quote, renderer))
    }

    pub fn toggle_favorite_of(
        &mut self,
        quote: &Quote,
        renderer: &mut dyn Renderer,
    ) -> FavoriteToggle {
        let outcome = self.catalog.toggle_favorite(quote);
        renderer.set_status(&StatusMessage::transient(match outcome {
            FavoriteToggle::Added => text::FAVORITE_ADDED,
            FavoriteToggle::Removed => text::FAVORITE_REMOVED,
        }));
        self.refresh_current(renderer);
        if self.panels.is_open(Panel::Favorites) {
            renderer.render_favorites(self.catalog.favorites());
        }
        outcome
    }

    /// Add-form submission. Blank text only sets a status, leaving the form
    /// and every collection as they were.
    pub fn submit_quote(
        &mut self,
        text: &str,
        source: &str,
        renderer: &mut dyn Renderer,
    ) -> Result<Quote> {
        match self.catalog.add(text, source) {
            Ok(quote) => {
                renderer.set_status(&StatusMessage::transient(text::SAVED));
                self.panels.close(Panel::Add);
                self.current = Some(quote.clone());
                self.refresh_current(renderer);
                Ok(quote)
            }
            Err(e) => {
                renderer.set_status(&StatusMessage::transient(text::BLANK_INPUT));
                Err(e)
            }
        }
    }

    pub fn copy_current(
        &self,
        clipboard: &dyn Clipboard,
        renderer: &mut dyn Renderer,
    ) -> Option<CopyOutcome> {
        let quote = self.current.as_ref()?;
        Some(copy_and_report(clipboard, quote, renderer))
    }

    pub fn share_current(
        &self,
        share: Option<&dyn Share>,
        clipboard: &dyn Clipboard,
        renderer: &mut dyn Renderer,
    ) -> Option<ShareOutcome> {
        let quote = self.current.as_ref()?;
        Some(share_and_report(share, clipboard, quote, renderer))
    }

    /// Opening Favorites always redraws the list from current state.
    pub fn open_panel(&mut self, panel: Panel, renderer: &mut dyn Renderer) {
        self.panels.open(panel);
        if panel == Panel::Favorites {
            renderer.render_favorites(self.catalog.favorites());
        }
    }

    pub fn close_panel(&mut self, panel: Panel) {
        self.panels.close(panel);
    }

    // Favorite row actions take indices captured at render time; the catalog
    // clamps them against the list as it is now.

    pub fn copy_favorite(
        &self,
        index: usize,
        clipboard: &dyn Clipboard,
        renderer: &mut dyn Renderer,
    ) -> Option<CopyOutcome> {
        let quote = self.catalog.favorite_at(index)?;
        Some(copy_and_report(clipboard, quote, renderer))
    }

    pub fn share_favorite(
        &self,
        index: usize,
        share: Option<&dyn Share>,
        clipboard: &dyn Clipboard,
        renderer: &mut dyn Renderer,
    ) -> Option<ShareOutcome> {
        let quote = self.catalog.favorite_at(index)?;
        Some(share_and_report(share, clipboard, quote, renderer))
    }

    pub fn remove_favorite(&mut self, index: usize, renderer: &mut dyn Renderer) -> Option<Quote> {
        let removed = self.catalog.remove_favorite_at(index)?;
        renderer.render_favorites(self.catalog.favorites());
        renderer.set_status(&StatusMessage::transient(text::FAVORITE_DELETED));
        if self.current.as_ref().is_some_and(|c| c.same_as(&removed)) {
            self.refresh_current(renderer);
        }
        Some(removed)
    }

    fn show_random_quote(&mut self, renderer: &mut dyn Renderer) -> Option<Quote> {
        match self.catalog.pick_random(&mut *self.rng) {
            Ok(quote) => {
                self.current = Some(quote.clone());
                self.refresh_current(renderer);
                Some(quote)
            }
            Err(Error::EmptyCatalog) => {
                renderer.set_status(&StatusMessage::transient(text::NO_QUOTES));
                None
            }
            Err(e) => {
                debug!(error = %e, "unexpected catalog error");
                None
            }
        }
    }

    fn show_background(
        &mut self,
        forced: Option<Mode>,
        renderer: &mut dyn Renderer,
    ) -> Option<Background> {
        let bg = self.background.select_next(forced, &mut *self.rng);
        match &bg {
            Some(bg) => renderer.render_background(bg),
            None => debug!("no background assets configured"),
        }
        bg
    }

    fn refresh_current(&self, renderer: &mut dyn Renderer) {
        if let Some(quote) = &self.current {
            renderer.render_quote(quote, self.catalog.is_favorite(quote));
        }
    }

    fn apply_theme(&self, renderer: &mut dyn Renderer) {
        self.prefs.set_string(keys::THEME, self.theme.as_str());
        renderer.render_theme(self.theme);
    }
}

fn copy_and_report(
    clipboard: &dyn Clipboard,
    quote: &Quote,
    renderer: &mut dyn Renderer,
) -> CopyOutcome {
    let outcome = io::copy_text(clipboard, &quote.share_text());
    renderer.set_status(&outcome.status());
    outcome
}

fn share_and_report(
    share: Option<&dyn Share>,
    clipboard: &dyn Clipboard,
    quote: &Quote,
    renderer: &mut dyn Renderer,
) -> ShareOutcome {
    let outcome = io::share_text(share, clipboard, &quote.share_text());
    renderer.set_status(&outcome.status());
    outcome
}
