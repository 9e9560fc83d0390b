use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line as RatatuiLine, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, Focus};
use crate::views::{ProjectItem, host_id};

pub fn render_lists(f: &mut Frame<'_>, app: &App) {
    let tree = app.tree.borrow();
    let selected = app.selected_item().map(|item| item.project_id);
    let dragged = app.dragged_project();

    for (status, panel) in &app.layout.lists {
        let host = tree.host(&host_id(*status));
        let heading = host.map_or(status.heading(), |h| h.heading.as_str());
        let droppable = host.is_some_and(|h| h.droppable);
        let count = host.map_or(0, |h| h.nodes.len());
        let focused = app.focus == Focus::List(*status);
        let accent = theme::list_primary(*status);

        let border = if droppable {
            theme::DROPPABLE_BORDER
        } else if focused {
            accent
        } else {
            theme::BORDER_MUTED
        };
        let block = Block::default()
            .title(format!(" {heading} ({count}) "))
            .borders(Borders::ALL)
            .border_type(if droppable {
                BorderType::Double
            } else {
                BorderType::Plain
            })
            .border_style(Style::default().fg(border));
        let inner = block.inner(*panel);
        f.render_widget(block, *panel);

        let Some(host) = host.filter(|h| !h.nodes.is_empty()) else {
            let empty = Paragraph::new(Span::styled(
                theme::LABEL_EMPTY_LIST,
                Style::default().fg(theme::TEXT_MUTED),
            ));
            f.render_widget(empty, inner);
            continue;
        };

        for mounted in &host.nodes {
            let id = &mounted.item.project_id;
            if let Some(rect) = app.layout.item_rect(id) {
                let is_selected = focused && selected.as_ref() == Some(id);
                let is_dragged = dragged == Some(id);
                render_item(f, &mounted.item, rect, accent, is_selected, is_dragged);
            }
        }
    }
}

fn render_item(
    f: &mut Frame<'_>,
    item: &ProjectItem,
    area: Rect,
    accent: Color,
    selected: bool,
    dragged: bool,
) {
    let base = if dragged {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    let (cursor, title_style) = if selected {
        (
            theme::GLYPH_CURSOR,
            base.fg(accent).add_modifier(Modifier::BOLD),
        )
    } else {
        (theme::GLYPH_BLANK, base.add_modifier(Modifier::BOLD))
    };

    let lines = vec![
        RatatuiLine::from(vec![
            Span::styled(cursor, base.fg(accent)),
            Span::styled(item.title.clone(), title_style),
        ]),
        RatatuiLine::from(vec![
            Span::raw(theme::GLYPH_BLANK),
            Span::styled(item.description.clone(), base),
        ]),
        RatatuiLine::from(vec![
            Span::raw(theme::GLYPH_BLANK),
            Span::styled(item.persons(), base.fg(theme::TEXT_MUTED)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
