//! Event handling and key bindings

use super::app::App;
use crate::contact::FormField;
use crate::sections::Section;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// Handle all user input events. Returns whether the event changed anything.
pub fn handle_events(event: Event, app: &mut App) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.quit();
                return true;
            }

            // Handle error/info message dialogs
            if app.error_message.is_some() || app.info_message.is_some() {
                return handle_message_dialog(key, app);
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return handle_help_panel(key, app);
            }

            // Handle contact form editing
            if app.contact_focus.is_some() {
                return handle_contact_editing(key, app);
            }

            handle_normal_mode(key, app)
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => {
                app.scroll_down();
                true
            }
            MouseEventKind::ScrollUp => {
                app.scroll_up();
                true
            }
            _ => false,
        },
        _ => false,
    }
}

/// Handle events when an error or info message is shown
fn handle_message_dialog(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.dismiss_message();
            true
        }
        _ => false,
    }
}

/// Handle events when help panel is open
fn handle_help_panel(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
            true
        }
        _ => false,
    }
}

/// Handle events while a contact form field is focused
fn handle_contact_editing(key: KeyEvent, app: &mut App) -> bool {
    let on_industry = app.contact_focus == Some(FormField::Industry);
    match key.code {
        KeyCode::Esc => app.stop_contact_edit(),
        KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous_field(),
        KeyCode::Enter => app.submit_contact(),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_industry => app.cycle_contact_industry(),
        KeyCode::Backspace => app.remove_char_from_contact(),
        KeyCode::Char(c) if !c.is_control() => app.add_char_to_contact(c),
        _ => return false,
    }
    true
}

/// Handle normal navigation and actions
fn handle_normal_mode(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('j') | KeyCode::Tab => app.next_section(),
        KeyCode::Char('k') | KeyCode::BackTab => app.previous_section(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Home => app.select_section(Section::Home),
        KeyCode::End => app.select_section(Section::Contact),
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            app.select_section(Section::ALL[index]);
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
        }
        KeyCode::Char('l') => {
            app.cycle_language();
        }
        KeyCode::Char('f') | KeyCode::Right => return app.next_filter(),
        KeyCode::Char('F') | KeyCode::Left => return app.previous_filter(),
        KeyCode::Char('a') => return app.reset_filter(),
        KeyCode::Char('m') | KeyCode::Enter => app.start_contact_edit(),
        _ => return false,
    }
    true
}
