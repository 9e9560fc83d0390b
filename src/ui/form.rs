use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, Focus, InputMode};
use crate::views::FormField;

pub fn render_form(f: &mut Frame<'_>, app: &App) {
    let area = app.layout.form;
    let focused = app.focus == Focus::Form;
    let border = if focused {
        theme::FORM_PRIMARY
    } else {
        theme::BORDER_MUTED
    };

    let block = Block::default()
        .title(theme::TITLE_FORM)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let label_width = theme::FORM_LABEL_WIDTH as usize;
    let lines: Vec<RatatuiLine<'_>> = FormField::ALL
        .into_iter()
        .map(|field| {
            let input = app.input.field(field);
            let label_style = if focused && app.input.focused() == field {
                Style::default()
                    .fg(theme::FORM_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_MUTED)
            };
            RatatuiLine::from(vec![
                Span::styled(
                    format!("{:<label_width$}", format!("{}:", input.label())),
                    label_style,
                ),
                Span::raw(input.content()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);

    if focused && app.input_mode == InputMode::Normal && app.drag.is_none() {
        let field = app.input.focused();
        if let Some((_, row)) = app.layout.fields.iter().find(|(fld, _)| *fld == field) {
            #[allow(clippy::cast_possible_truncation)]
            let offset = theme::FORM_LABEL_WIDTH
                + app.input.field(field).cursor_display_pos() as u16;
            let x = (row.x + offset).min(row.right().saturating_sub(1));
            f.set_cursor_position((x, row.y));
        }
    }
}
