//! The quote catalog and the favorites collection.
//!
//! Both are ordered and persisted after every mutation. Favorites hold copies,
//! not references into the catalog, and are keyed on [`Quote::key`].

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::quote::{new_id, Quote, DEFAULT_SOURCE};
use crate::store::{keys, Prefs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

pub struct Catalog {
    quotes: Vec<Quote>,
    favorites: Vec<Quote>,
    prefs: Prefs,
}

impl Catalog {
    /// Loads catalog and favorites, reseeding the catalog from `starter` when
    /// the stored one is missing, malformed or empty.
    pub fn load(prefs: Prefs, starter: &[Quote]) -> Self {
        let mut quotes =
            sanitize(read_records(&prefs, keys::QUOTES).unwrap_or_else(|| starter.to_vec()));
        if quotes.is_empty() {
            quotes = sanitize(starter.to_vec());
            info!(count = quotes.len(), "seeding catalog from starter quotes");
            prefs.set_json(keys::QUOTES, &quotes);
        }

        let stored_favs = sanitize(read_records(&prefs, keys::FAVORITES).unwrap_or_default());
        let before = stored_favs.len();
        let favorites = dedup(stored_favs);
        if favorites.len() != before {
            debug!(dropped = before - favorites.len(), "collapsed duplicate favorites");
            prefs.set_json(keys::FAVORITES, &favorites);
        }

        Self {
            quotes,
            favorites,
            prefs,
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn favorites(&self) -> &[Quote] {
        &self.favorites
    }

    /// Uniform pick over the whole catalog.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Quote> {
        self.quotes.choose(rng).cloned().ok_or(Error::EmptyCatalog)
    }

    /// Appends a user quote. Blank text is rejected without touching state.
    pub fn add(&mut self, text: &str, source: &str) -> Result<Quote> {
        let quote = Quote::from_input(text, source).ok_or(Error::BlankText)?;
        self.quotes.push(quote.clone());
        self.prefs.set_json(keys::QUOTES, &self.quotes);
        debug!(id = %quote.id, "quote added");
        Ok(quote)
    }

    pub fn is_favorite(&self, quote: &Quote) -> bool {
        self.favorites.iter().any(|f| f.same_as(quote))
    }

    pub fn toggle_favorite(&mut self, quote: &Quote) -> FavoriteToggle {
        let outcome = match self.favorites.iter().position(|f| f.same_as(quote)) {
            Some(idx) => {
                self.favorites.remove(idx);
                FavoriteToggle::Removed
            }
            None => {
                let mut copy = quote.clone();
                if copy.id.trim().is_empty() {
                    copy.id = new_id();
                }
                self.favorites.push(copy);
                FavoriteToggle::Added
            }
        };
        self.prefs.set_json(keys::FAVORITES, &self.favorites);
        outcome
    }

    /// Favorite at a UI-supplied index, clamped into range.
    pub fn favorite_at(&self, index: usize) -> Option<&Quote> {
        clamp_index(index, self.favorites.len()).map(|i| &self.favorites[i])
    }

    /// Removes the favorite at a UI-supplied index, clamped into range.
    /// Returns `None` without persisting when there are no favorites.
    pub fn remove_favorite_at(&mut self, index: usize) -> Option<Quote> {
        let idx = clamp_index(index, self.favorites.len())?;
        let removed = self.favorites.remove(idx);
        self.prefs.set_json(keys::FAVORITES, &self.favorites);
        Some(removed)
    }
}

fn clamp_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    }
}

// Decodes a stored list record by record so one bad entry costs only itself.
// `None` when the key is missing or does not hold a list.
fn read_records(prefs: &Prefs, key: &str) -> Option<Vec<Quote>> {
    let records: Option<Vec<serde_json::Value>> = prefs.get_json(key, None);
    records.map(|records| {
        records
            .into_iter()
            .filter_map(|v| match serde_json::from_value::<Quote>(v) {
                Ok(q) => Some(q),
                Err(e) => {
                    debug!(key, error = %e, "dropping malformed stored quote");
                    None
                }
            })
            .collect()
    })
}

// Drop records that would break the non-empty text invariant; repair blank sources.
fn sanitize(quotes: Vec<Quote>) -> Vec<Quote> {
    quotes
        .into_iter()
        .filter_map(|mut q| {
            if q.text.trim().is_empty() {
                debug!(id = %q.id, "dropping stored quote with blank text");
                return None;
            }
            if q.source.trim().is_empty() {
                q.source = DEFAULT_SOURCE.to_string();
            }
            Some(q)
        })
        .collect()
}

fn dedup(quotes: Vec<Quote>) -> Vec<Quote> {
    let mut out: Vec<Quote> = Vec::with_capacity(quotes.len());
    for q in quotes {
        if !out.iter().any(|seen| seen.same_as(&q)) {
            out.push(q);
        }
    }
    out
}
