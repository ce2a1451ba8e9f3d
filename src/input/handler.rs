use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Typing => handle_typing_mode(app, key),
        UiMode::EditingItem => handle_edit_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_delete_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        // Context toggle
        KeyCode::Char('w') | KeyCode::Char('W') => app.select_work(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.select_travel(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_context(),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Focus input field
        KeyCode::Char('a') | KeyCode::Char('i') => app.start_typing(),

        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.start_edit_selected(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.request_delete_selected(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}

/// Handle keys while the input field has focus
fn handle_typing_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc => app.stop_typing(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys in the edit dialog
fn handle_edit_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => app.submit_edit_form(),
        KeyCode::Esc => app.cancel_edit_form(),
        KeyCode::Backspace => app.edit_form_backspace(),
        KeyCode::Char(c) => app.edit_form_add_char(c),
        _ => {}
    }
    false
}

/// Handle keys in the delete confirmation dialog
fn handle_confirm_delete_mode<S: KeyValueStore>(app: &mut AppState<S>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.resolve_delete(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.resolve_delete(false),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Context;
    use crate::persistence::{MemoryStore, Persistence};

    fn create_test_app() -> AppState<MemoryStore> {
        AppState::load(Persistence::new(MemoryStore::new())).unwrap()
    }

    fn press(app: &mut AppState<MemoryStore>, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut AppState<MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_typing_adds_item() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::Typing);

        // 'q' is text while typing, not quit
        type_text(&mut app, "quiz");
        press(&mut app, KeyCode::Backspace);
        assert!(!press(&mut app, KeyCode::Enter));

        assert_eq!(app.visible_items()[0].text, "qui");
        assert!(app.input.is_empty());
        assert_eq!(app.ui_mode, UiMode::Typing);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_context_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.context, Context::Travel);
        press(&mut app, KeyCode::Char('w'));
        assert_eq!(app.context, Context::Work);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.context, Context::Travel);
    }

    #[test]
    fn test_toggle_edit_delete_keys() {
        let mut app = create_test_app();
        app.add_item("Pack").unwrap();

        press(&mut app, KeyCode::Char(' '));
        assert!(app.visible_items()[0].completed);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "ed");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.visible_items()[0].text, "Packed");

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.items.len(), 1);

        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.items.is_empty());
    }
}
