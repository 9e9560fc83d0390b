use ratatui::style::Color;

use crate::project::ProjectStatus;

// Context primaries
pub const ACTIVE_PRIMARY: Color = Color::Blue;
pub const FINISHED_PRIMARY: Color = Color::Green;
pub const FORM_PRIMARY: Color = Color::Cyan;

// Drop target indicator
pub const DROPPABLE_BORDER: Color = Color::Yellow;

// Alert dialog
pub const ALERT_BORDER: Color = Color::Red;
pub const ALERT_ACCEPT: Color = Color::Green;

// Help overlay
pub const HELP_BORDER: Color = Color::Cyan;

// Border colors
pub const BORDER_MUTED: Color = Color::DarkGray;

// Text colors
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_ON_ACCENT: Color = Color::Black;
pub const STATUS_BG: Color = Color::Yellow;

/// Accent for a list, used for its focused border and selection cursor.
#[must_use]
pub fn list_primary(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Active => ACTIVE_PRIMARY,
        ProjectStatus::Finished => FINISHED_PRIMARY,
    }
}

// Glyphs
pub const GLYPH_CURSOR: &str = "→ ";
pub const GLYPH_BLANK: &str = "  ";

// Labels
pub const TITLE_FORM: &str = " New project ";
pub const TITLE_ALERT: &str = " Invalid input ";
pub const TITLE_HELP: &str = " Keybindings ";
pub const LABEL_ALERT_OK: &str = "[Enter]";
pub const LABEL_OK: &str = " OK";
pub const LABEL_EMPTY_LIST: &str = "Nothing here yet";

// Layout
pub const FORM_HEIGHT: u16 = 5;
pub const FORM_LABEL_WIDTH: u16 = 13;
pub const ITEM_HEIGHT: u16 = 3;
pub const ITEM_STRIDE: u16 = ITEM_HEIGHT + 1;
