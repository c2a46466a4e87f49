//! HUD listener that writes into the page's DOM elements

use web_sys::Document;

use super::HudListener;

/// Updates `#hud-score`, `#hud-lives`, `#hud-status` and the pause button label
pub struct DomHud {
    document: Document,
}

impl DomHud {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_text(&self, selector: &str, text: &str) {
        if let Some(el) = self.document.query_selector(selector).ok().flatten() {
            el.set_text_content(Some(text));
        }
    }
}

impl HudListener for DomHud {
    fn set_score(&mut self, score: u32) {
        self.set_text("#hud-score .hud-value", &score.to_string());
    }

    fn set_lives(&mut self, lives: u8) {
        self.set_text("#hud-lives .hud-value", &lives.to_string());
    }

    fn set_paused(&mut self, paused: bool) {
        self.set_text("#hud-status", if paused { "Paused" } else { "Running" });
        self.set_text("#pause-btn", if paused { "Resume (P)" } else { "Pause (P)" });
    }
}
