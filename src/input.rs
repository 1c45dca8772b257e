use crate::app::App;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

pub fn handle_event(app: &mut App, event: &Event) {
    match event {
        // Only handle key press events, ignore release/repeat
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
                app.point_at(mouse.column);
            }
            _ => {}
        },
        Event::Resize(columns, _) => app.resize(*columns),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: &KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}
