use crate::domain::Context;
use crate::ui::styles::{border_style, context_active_style, context_inactive_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Work / Travel switch; the active side is bright, the other dimmed
pub fn header_line(active: Context) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, ctx) in Context::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("     "));
        }
        let style = if *ctx == active {
            context_active_style()
        } else {
            context_inactive_style()
        };
        spans.push(Span::styled(ctx.name(), style));
    }
    Line::from(spans)
}

pub fn render_header(f: &mut Frame, active: Context, area: Rect) {
    let paragraph = Paragraph::new(header_line(active))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(border_style()));
    f.render_widget(paragraph, area);
}
