use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line as RatatuiLine, Span},
};

use super::theme;
use crate::app::{App, Focus, InputMode};
use crate::dispatch::KeyAction;

const LIST_HINTS: [(KeyAction, &str); 5] = [
    (KeyAction::MoveProject, "move"),
    (KeyAction::SwitchList, "switch"),
    (KeyAction::FocusForm, "new"),
    (KeyAction::ToggleHelp, "help"),
    (KeyAction::Quit, "quit"),
];

pub fn render_footer(app: &App) -> RatatuiLine<'static> {
    if let Some(message) = &app.status_message {
        return RatatuiLine::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(theme::TEXT_ON_ACCENT).bg(theme::STATUS_BG),
        ));
    }

    if app.drag.is_some() {
        return mode_line(" DRAG ", theme::DROPPABLE_BORDER, &[("release", "over a list to drop")]);
    }

    match (&app.input_mode, app.focus) {
        (InputMode::Alert(_), _) => {
            mode_line(" ALERT ", theme::ALERT_BORDER, &[("ret/esc", "dismiss")])
        }
        (InputMode::Help, _) => mode_line(" HELP ", theme::HELP_BORDER, &[("?/esc", "close")]),
        (InputMode::Normal, Focus::Form) => mode_line(
            " NEW ",
            theme::FORM_PRIMARY,
            &[("ret", "add"), ("tab", "next field"), ("esc", "lists"), ("C-c", "quit")],
        ),
        (InputMode::Normal, Focus::List(status)) => {
            let hints: Vec<(String, &str)> = LIST_HINTS
                .iter()
                .filter_map(|(action, label)| {
                    let key = app.keymap.keys_for(*action).into_iter().next()?;
                    Some((key, *label))
                })
                .collect();
            let hints: Vec<(&str, &str)> = hints.iter().map(|(k, l)| (k.as_str(), *l)).collect();
            let badge = format!(" {} ", status.as_str().to_uppercase());
            mode_line(&badge, theme::list_primary(status), &hints)
        }
    }
}

fn mode_line(badge: &str, color: Color, hints: &[(&str, &str)]) -> RatatuiLine<'static> {
    let mut spans = vec![Span::styled(
        badge.to_string(),
        Style::default().fg(theme::TEXT_ON_ACCENT).bg(color),
    )];
    for (key, label) in hints {
        spans.push(Span::styled(format!("  {key}"), Style::default().fg(Color::Gray)));
        spans.push(Span::styled(format!(" {label}"), Style::default().dim()));
    }
    RatatuiLine::from(spans)
}
