// Badge rendering for probe status
use crate::core::probe::types::{DisplayState, Status};

/// Renders the display model as a one-line badge
pub struct StatusRenderer;

impl StatusRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Emoji: 🟢/🔴/⚪/🟡 map to `online/offline/checking/error`
    pub fn emoji(status: Status) -> &'static str {
        match status {
            Status::Online => "🟢",
            Status::Offline => "🔴",
            Status::Checking => "⚪",
            Status::Error => "🟡",
        }
    }

    fn emoji_for_keyword(keyword: &str) -> &'static str {
        match keyword {
            "online" => Self::emoji(Status::Online),
            "offline" => Self::emoji(Status::Offline),
            "error" => Self::emoji(Status::Error),
            _ => Self::emoji(Status::Checking),
        }
    }

    /// `"<emoji> <label> <text> (<tooltip>)"`; label and tooltip are omitted when empty
    pub fn render(&self, display: &DisplayState) -> String {
        let mut line = Self::emoji_for_keyword(&display.keyword).to_string();

        if !display.label.is_empty() {
            line.push(' ');
            line.push_str(&display.label);
        }

        line.push(' ');
        line.push_str(&display.text);

        if !display.tooltip.is_empty() {
            line.push_str(&format!(" ({})", display.tooltip));
        }

        line
    }

    /// Machine-readable form of the display model
    pub fn render_json(&self, display: &DisplayState) -> String {
        serde_json::to_string(display).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for StatusRenderer {
    fn default() -> Self {
        Self::new()
    }
}
