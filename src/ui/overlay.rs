use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line as RatatuiLine, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::layout::centered_rect;
use super::theme;
use crate::dispatch::{KeyAction, Keymap};

const ALERT_HEIGHT: u16 = 6;

pub fn render_alert(f: &mut Frame<'_>, message: &str) {
    let popup_area = fixed_height(centered_rect(50, 100, f.area()), ALERT_HEIGHT);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(theme::TITLE_ALERT)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ALERT_BORDER));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let lines = vec![
        RatatuiLine::raw(""),
        RatatuiLine::raw(message.to_string()),
        RatatuiLine::raw(""),
        RatatuiLine::from(vec![
            Span::styled(
                theme::LABEL_ALERT_OK,
                Style::default().fg(theme::ALERT_ACCEPT),
            ),
            Span::raw(theme::LABEL_OK),
        ]),
    ];
    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}

pub fn render_help(f: &mut Frame<'_>, keymap: &Keymap) {
    let popup_area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(theme::TITLE_HELP)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::HELP_BORDER));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let mut lines: Vec<RatatuiLine<'_>> = KeyAction::ALL
        .into_iter()
        .map(|action| {
            let keys = keymap.keys_for(action).join(" ");
            RatatuiLine::from(vec![
                Span::styled(
                    format!("{keys:>16}  "),
                    Style::default().fg(theme::HELP_BORDER),
                ),
                Span::raw(action.description()),
            ])
        })
        .collect();

    lines.push(RatatuiLine::raw(""));
    for (keys, description) in [
        ("drag", "Drag a project onto the other list"),
        ("tab / S-tab", "Next / previous form field"),
        ("ret", "Add the project"),
        ("esc", "Leave the form"),
    ] {
        lines.push(RatatuiLine::from(vec![
            Span::styled(
                format!("{keys:>16}  "),
                Style::default().fg(theme::HELP_BORDER),
            ),
            Span::raw(description),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn fixed_height(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height,
        ..area
    }
}
