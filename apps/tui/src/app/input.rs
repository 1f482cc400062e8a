//! Keyboard dispatch. Search mode captures printable keys; everything
//! else maps onto the interaction pipelines in [`super::actions`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::App;
use crate::map::service::MapService;

pub fn handle_input(app: &mut App, key: KeyEvent) {
    if app.searching {
        handle_search_input(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Esc => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.map.close_popup();
            }
        }
        KeyCode::F(1) | KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Enter => app.inspect_at(app.cursor),
        KeyCode::Char('/') => {
            app.searching = true;
            app.search_input.clear();
            app.status_message = String::new();
        }
        KeyCode::Char('f') => app.cycle_filter(1),
        KeyCode::Char('F') => app.cycle_filter(-1),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Tab => app.switch_dataset(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.zoom_by(1.0),
        KeyCode::Char('-') => app.zoom_by(-1.0),
        KeyCode::Up => app.move_cursor(0.0, -1.0),
        KeyCode::Down => app.move_cursor(0.0, 1.0),
        KeyCode::Left => app.move_cursor(-2.0, 0.0),
        KeyCode::Right => app.move_cursor(2.0, 0.0),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.searching = false;
            app.search_input.clear();
        }
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = App::new();
        handle_input(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = App::new();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        handle_input(&mut app, ctrl_c);
        assert!(!app.running);
    }

    #[test]
    fn slash_enters_search_mode_and_captures_text() {
        let mut app = App::new();
        handle_input(&mut app, key(KeyCode::Char('/')));
        assert!(app.searching);

        for c in "girona".chars() {
            handle_input(&mut app, key(KeyCode::Char(c)));
        }
        handle_input(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.search_input, "giron");

        // 'q' must not quit while typing.
        handle_input(&mut app, key(KeyCode::Char('q')));
        assert!(app.running);

        handle_input(&mut app, key(KeyCode::Esc));
        assert!(!app.searching);
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn escape_prefers_help_over_popup() {
        let mut app = App::new();
        app.show_help = true;
        handle_input(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }
}
