#![allow(dead_code)]
use anyhow::bail;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use vibeverse_core::{
    Background, KvStore, MemStore, Prefs, Quote, Renderer, StatusMessage, Theme,
};

/// Renderer that remembers every call in order.
#[derive(Default)]
pub struct Recorder {
    pub quotes: Vec<(Quote, bool)>,
    pub backgrounds: Vec<Background>,
    pub favorites: Vec<Vec<Quote>>,
    pub themes: Vec<Theme>,
    pub statuses: Vec<String>,
}

impl Recorder {
    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(|s| s.as_str())
    }
}

impl Renderer for Recorder {
    fn render_quote(&mut self, quote: &Quote, is_favorite: bool) {
        self.quotes.push((quote.clone(), is_favorite));
    }
    fn render_background(&mut self, background: &Background) {
        self.backgrounds.push(background.clone());
    }
    fn render_favorites(&mut self, favorites: &[Quote]) {
        self.favorites.push(favorites.to_vec());
    }
    fn render_theme(&mut self, theme: Theme) {
        self.themes.push(theme);
    }
    fn set_status(&mut self, status: &StatusMessage) {
        self.statuses.push(status.text.to_string());
    }
}

/// Storage that is switched off: every call fails.
pub struct BrokenStore;

impl KvStore for BrokenStore {
    fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        bail!("storage disabled")
    }
    fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        bail!("quota exceeded")
    }
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

pub fn boxed_rng() -> Box<dyn RngCore> {
    Box::new(rng())
}

pub fn mem() -> Arc<MemStore> {
    Arc::new(MemStore::new())
}

pub fn prefs(store: &Arc<MemStore>) -> Prefs {
    Prefs::new(store.clone())
}

pub fn quote(text: &str, source: &str) -> Quote {
    Quote::from_input(text, source).expect("non-blank quote")
}

pub fn files(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
