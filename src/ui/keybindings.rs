use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the current mode
pub fn hints_for(mode: UiMode) -> Vec<&'static str> {
    match mode {
        UiMode::Normal => vec![
            " w/t work/travel   ",
            "Tab switch   ",
            "a add   ",
            "↑/↓ select   ",
            "Space done   ",
            "e edit   ",
            "x delete   ",
            "q quit",
        ],
        UiMode::Typing => vec![" Enter add   ", "Esc back to list"],
        UiMode::EditingItem => vec![" Enter save   ", "Esc cancel"],
        UiMode::ConfirmDelete => vec![" y confirm   ", "n/Esc cancel"],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let hints = Line::from(hints_for(mode).into_iter().map(Span::raw).collect::<Vec<_>>());
    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
