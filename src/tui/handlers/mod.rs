use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use inputsense_core::RawEvent;

use crate::tui::app::App;

/// Handle a terminal event and return true if the app should quit
pub fn handle_event(app: &mut App, event: Event) -> io::Result<bool> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // Demo controls are consumed by the app, never dispatched
    match key.code {
        KeyCode::Char('q') if !app.field_focused => return true,
        KeyCode::F(2) => {
            app.toggle_field();
            return false;
        }
        KeyCode::F(5) => {
            app.simulate_tap();
            return false;
        }
        KeyCode::F(6) => {
            app.simulate_stylus();
            return false;
        }
        _ => {}
    }

    app.press_key(key.code);

    if app.field_focused {
        app.edit_field(key.code);
    } else {
        match key.code {
            KeyCode::PageUp => app.scroll_log_up(),
            KeyCode::PageDown => app.scroll_log_down(),
            _ => {}
        }
    }

    false
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    app.pointer = Some((mouse.column, mouse.row));

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.dispatch(RawEvent::MouseMove, "mousemove");
        }
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => {
            app.dispatch(RawEvent::Wheel, "wheel");
        }
        MouseEventKind::Down(_) => app.click(),
        MouseEventKind::Up(_) => {}
    }
}
