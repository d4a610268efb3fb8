use serde::{Deserialize, Deserializer, Serialize};

pub type QuoteId = String;

/// Source shown when a quote has no attribution.
pub const DEFAULT_SOURCE: &str = "—";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    #[serde(default = "new_id", deserialize_with = "id_from_any")]
    pub id: QuoteId,
    pub text: String,
    #[serde(default = "default_source", deserialize_with = "source_or_default")]
    pub source: String,
}

impl Quote {
    /// Builds a quote from raw user input. Returns `None` when the trimmed text
    /// is empty; a blank source becomes [`DEFAULT_SOURCE`].
    pub fn from_input(text: &str, source: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let source = match source.trim() {
            "" => DEFAULT_SOURCE,
            s => s,
        };
        Some(Self {
            id: new_id(),
            text: text.to_string(),
            source: source.to_string(),
        })
    }

    /// Identity used for favorites and dedup. The id plays no part in it.
    pub fn key(&self) -> QuoteKey<'_> {
        QuoteKey {
            text: self.text.trim(),
            source: self.source.trim(),
        }
    }

    pub fn same_as(&self, other: &Quote) -> bool {
        self.key() == other.key()
    }

    /// Text handed to copy/share, e.g. `Stay curious. — Anon`.
    pub fn share_text(&self) -> String {
        format!("{} — {}", self.text, self.source)
    }
}

/// Borrowed `(text, source)` identity pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteKey<'a> {
    pub text: &'a str,
    pub source: &'a str,
}

pub fn new_id() -> QuoteId {
    uuid::Uuid::new_v4().simple().to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

// Older records carry numeric ids.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

fn id_from_any<'de, D: Deserializer<'de>>(d: D) -> Result<QuoteId, D::Error> {
    Ok(match Option::<RawId>::deserialize(d)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Float(f)) => f.to_string(),
        None => new_id(),
    })
}

fn source_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_else(default_source))
}
