use crate::app::EditFormState;
use crate::confirm::ConfirmPrompt;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a yes/no confirmation
pub fn render_confirm_modal(f: &mut Frame, prompt: &ConfirmPrompt, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", prompt.message)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(format!(" {}  ", prompt.confirm_label)),
            Span::styled("[n]", modal_title_style()),
            Span::raw(format!(" {}", prompt.cancel_label)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", prompt.title), modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the edit dialog, pre-filled with the item's text
pub fn render_edit_modal(f: &mut Frame, form: &EditFormState, area: Rect) {
    let modal_area = create_modal_area(area);

    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(form.text.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]),
        Line::raw(""),
        Line::raw("Enter to save  ·  Esc to cancel"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Edit To Do ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
