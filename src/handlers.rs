use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Focus, InputMode};
use crate::dispatch::KeyAction;
use crate::project::ProjectStatus;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match &app.input_mode {
        InputMode::Alert(_) => handle_alert_key(app, key.code),
        InputMode::Help => handle_help_key(app, key.code),
        InputMode::Normal => match app.focus {
            Focus::Form => handle_form_key(app, key),
            Focus::List(_) => handle_list_key(app, key),
        },
    }
}

/// The alert swallows every key except the ones that dismiss it.
pub fn handle_alert_key(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Enter | KeyCode::Esc) {
        app.dismiss_alert();
    }
}

pub fn handle_help_key(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Char('?' | 'q') | KeyCode::Esc) {
        app.toggle_help();
    }
}

pub fn handle_form_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let field = app.input.focused_field_mut();

    match key.code {
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Char('w') if ctrl => field.delete_word_before(),
        KeyCode::Char('u') if ctrl => field.clear(),
        KeyCode::Char('a') if ctrl => field.move_to_start(),
        KeyCode::Char('e') if ctrl => field.move_to_end(),
        KeyCode::Char(c) if !ctrl => field.insert_char(c),
        KeyCode::Backspace => {
            field.backspace();
        }
        KeyCode::Delete => {
            field.delete();
        }
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_to_start(),
        KeyCode::End => field.move_to_end(),
        KeyCode::Tab | KeyCode::Down => app.input.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.input.focus_prev(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.focus_list(ProjectStatus::Active),
        _ => {}
    }
}

pub fn handle_list_key(app: &mut App, key: KeyEvent) {
    let Some(action) = app.keymap.lookup(&key) else {
        return;
    };

    match action {
        KeyAction::Quit => app.should_quit = true,
        KeyAction::MoveUp => app.select_prev(),
        KeyAction::MoveDown => app.select_next(),
        KeyAction::SwitchList => app.switch_list(),
        KeyAction::MoveProject => {
            app.move_selected();
        }
        KeyAction::FocusForm => app.focus_form(),
        KeyAction::ToggleHelp => app.toggle_help(),
    }
}

/// Left press on an item picks it up, dragging over a list shows whether it
/// would accept the drop, and release drops (or cancels outside any list).
pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    if app.input_mode != InputMode::Normal {
        return;
    }
    let (column, row) = (event.column, event.row);

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.status_message = None;
            // A release outside the terminal never arrives, so a new press
            // replaces any drag still in flight
            app.cancel_drag();
            if let Some(id) = app.layout.item_at(column, row).cloned() {
                app.select_project(&id);
                app.begin_drag(&id);
            } else if let Some(field) = app.layout.field_at(column, row) {
                app.focus_field(field);
            } else if let Some(status) = app.layout.list_at(column, row) {
                app.focus_list(status);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.is_some() {
                let target = app.layout.list_at(column, row);
                app.drag_to(target);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.drag.is_some() {
                let target = app.layout.list_at(column, row);
                app.drag_to(target);
                if target.is_some() {
                    app.finish_drag();
                } else {
                    app.cancel_drag();
                }
            }
        }
        _ => {}
    }
}
