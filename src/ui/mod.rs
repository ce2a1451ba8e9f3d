pub mod header;
pub mod input_bar;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod styles;

use crate::app::AppState;
use crate::confirm::ConfirmPrompt;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use header::render_header;
use input_bar::render_input_bar;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_confirm_modal, render_edit_modal};
use ratatui::{text::Span, widgets::Paragraph, Frame};
use styles::error_style;

/// Main render function - draws the entire UI
pub fn render<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_header(f, app.context, layout.header_area);
    render_input_bar(f, &app.input, app.context, app.ui_mode, layout.input_area);
    render_list_pane(f, &app.visible_items(), app.selected_index, layout.list_area);

    if let Some(status) = &app.status {
        let line = Paragraph::new(Span::styled(status.clone(), error_style()));
        f.render_widget(line, layout.status_area);
    }

    match app.ui_mode {
        UiMode::ConfirmDelete => render_confirm_modal(f, &ConfirmPrompt::DELETE_ITEM, size),
        UiMode::EditingItem => {
            if let Some(form) = &app.edit_form {
                render_edit_modal(f, form, size);
            }
        }
        UiMode::Normal | UiMode::Typing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, Persistence};
    use ratatui::{backend::TestBackend, Terminal};

    fn create_test_app() -> AppState<MemoryStore> {
        AppState::load(Persistence::new(MemoryStore::new())).unwrap()
    }

    /// Render into a test buffer and return its rows as strings
    fn draw(app: &AppState<MemoryStore>) -> Vec<String> {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn screen_contains(rows: &[String], text: &str) -> bool {
        rows.iter().any(|row| row.contains(text))
    }

    #[test]
    fn test_placeholder_follows_context() {
        let mut app = create_test_app();
        assert!(screen_contains(&draw(&app), "Add a To Do"));

        app.select_travel();
        let rows = draw(&app);
        assert!(screen_contains(&rows, "Where do you want to go?"));
        assert!(!screen_contains(&rows, "Add a To Do"));
    }

    #[test]
    fn test_only_active_context_items_are_drawn() {
        let mut app = create_test_app();
        app.add_item("Quarterly report").unwrap();
        app.select_travel();
        app.add_item("Visit Porto").unwrap();

        let rows = draw(&app);
        assert!(screen_contains(&rows, "Visit Porto"));
        assert!(!screen_contains(&rows, "Quarterly report"));

        app.select_work();
        let rows = draw(&app);
        assert!(screen_contains(&rows, "[ ] Quarterly report"));
        assert!(!screen_contains(&rows, "Visit Porto"));
    }

    #[test]
    fn test_delete_modal_is_drawn() {
        let mut app = create_test_app();
        app.add_item("Old task").unwrap();
        app.request_delete_selected();

        let rows = draw(&app);
        assert!(screen_contains(&rows, "Delete To Do?"));
        assert!(screen_contains(&rows, "I'm sure"));
    }

    #[test]
    fn test_edit_modal_is_prefilled() {
        let mut app = create_test_app();
        app.add_item("Call mom").unwrap();
        app.start_edit_selected();

        let rows = draw(&app);
        assert!(screen_contains(&rows, "Edit To Do"));
        assert!(screen_contains(&rows, "> Call mom"));
    }

    #[test]
    fn test_status_line_shows_save_failure() {
        let mut app = create_test_app();
        app.persistence_mut().store_mut().set_fail_writes(true);
        app.add_item("Unsaved").unwrap();

        let rows = draw(&app);
        assert!(rows.last().unwrap().starts_with("Not saved"));
    }
}
