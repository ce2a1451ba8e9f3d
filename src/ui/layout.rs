use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub input_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: Work / Travel switch
/// - Input field
/// - Item list (fills the rest)
/// - Status line (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input
            Constraint::Min(0),    // List
            Constraint::Length(1), // Status
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        header_area: chunks[1],
        input_area: chunks[2],
        list_area: chunks[3],
        status_area: chunks[4],
    }
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
