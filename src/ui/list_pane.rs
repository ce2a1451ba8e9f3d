use crate::domain::Item;
use crate::ui::styles::{border_style, completed_style, default_style, selected_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Format: [x] Buy milk
fn create_item_line(item: &Item) -> Line<'static> {
    let (checkbox, style) = if item.completed {
        ("[x] ", completed_style())
    } else {
        ("[ ] ", default_style())
    };
    Line::from(vec![
        Span::raw(checkbox),
        Span::styled(item.text.clone(), style),
    ])
}

/// Render the items of the active context
pub fn render_list_pane(f: &mut Frame, items: &[&Item], selected_index: usize, area: Rect) {
    let rows: Vec<ListItem> = items.iter().map(|item| ListItem::new(create_item_line(item))).collect();

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).border_style(border_style()))
        .highlight_style(selected_style());

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected_index.min(items.len() - 1)));
    }

    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Context;

    #[test]
    fn test_create_item_line() {
        let mut item = Item::new("Buy milk".to_string(), Context::Work);
        let line = create_item_line(&item);
        assert_eq!(line.spans[0].content, "[ ] ");
        assert_eq!(line.spans[1].content, "Buy milk");

        item.completed = true;
        let line = create_item_line(&item);
        assert_eq!(line.spans[0].content, "[x] ");
        assert_eq!(line.spans[1].style, completed_style());
    }
}
