use crate::domain::{Context, UiMode};
use crate::ui::styles::{border_style, default_style, focused_border_style, placeholder_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the text field; shows the context's placeholder while empty
pub fn render_input_bar(f: &mut Frame, input: &str, context: Context, mode: UiMode, area: Rect) {
    let focused = mode == UiMode::Typing;

    let line = if input.is_empty() {
        Line::from(Span::styled(context.placeholder(), placeholder_style()))
    } else {
        Line::from(Span::styled(input.to_string(), default_style()))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { focused_border_style() } else { border_style() });

    f.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        f.set_cursor(cursor_x(input, area), area.y.saturating_add(1));
    }
}

/// Column just past the typed text, kept inside the border
fn cursor_x(input: &str, area: Rect) -> u16 {
    let width = u16::try_from(input.width()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2))
}
