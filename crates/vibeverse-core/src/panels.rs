use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Add,
    Favorites,
}

impl Panel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Some(Panel::Add),
            "favorites" | "favs" => Some(Panel::Favorites),
            _ => None,
        }
    }
}

/// Open/closed flags for the overlay panels. The two are independent:
/// opening one leaves the other as it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Panels {
    add_open: bool,
    favorites_open: bool,
}

impl Panels {
    pub fn open(&mut self, panel: Panel) {
        self.set(panel, true);
    }

    pub fn close(&mut self, panel: Panel) {
        self.set(panel, false);
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Add => self.add_open,
            Panel::Favorites => self.favorites_open,
        }
    }

    pub fn any_open(&self) -> bool {
        self.add_open || self.favorites_open
    }

    fn set(&mut self, panel: Panel, open: bool) {
        match panel {
            Panel::Add => self.add_open = open,
            Panel::Favorites => self.favorites_open = open,
        }
    }
}
