mod footer;
mod form;
pub mod layout;
mod lists;
mod overlay;
pub mod theme;

pub use footer::render_footer;
pub use layout::{Regions, ScreenLayout, centered_rect, compute_layout, visible_items};

use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use crate::app::{App, InputMode};
use crate::project::ProjectStatus;

/// Keeps each list's selection scrolled into view, then records hit areas
/// for mouse handling.
pub fn prepare_render(app: &mut App, area: Rect) {
    let regions = Regions::new(area);
    for status in ProjectStatus::ALL {
        let i = status.index();
        let visible = visible_items(regions.lists[i]);
        let count = app.list_items(status).len();
        let selected = app.selected[i];
        let scroll = &mut app.scroll[i];

        if selected < *scroll {
            *scroll = selected;
        } else if selected >= *scroll + visible {
            *scroll = selected + 1 - visible;
        }
        *scroll = (*scroll).min(count.saturating_sub(visible));
    }
    app.layout = compute_layout(area, app);
}

pub fn render(f: &mut Frame<'_>, app: &mut App) {
    prepare_render(app, f.area());
    let app = &*app;

    form::render_form(f, app);
    lists::render_lists(f, app);
    f.render_widget(Paragraph::new(render_footer(app)), app.layout.footer);

    match &app.input_mode {
        InputMode::Alert(message) => overlay::render_alert(f, message),
        InputMode::Help => overlay::render_help(f, &app.keymap),
        InputMode::Normal => {}
    }
}
