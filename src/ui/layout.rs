use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub list: Rect,
    pub help_bar: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Component
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        list: chunks[0],
        help_bar: chunks[1],
        status_bar: chunks[2],
    }
}

/// Split the component's inner area into the content column and the button
/// row underneath it.
pub fn split_list(inner: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Heading, title, items, counter
            Constraint::Length(3), // Buttons
        ])
        .split(inner);
    (chunks[0], chunks[1])
}

/// Lay out buttons left to right, each as wide as its label plus border and
/// padding.
pub fn button_row(area: Rect, label_widths: &[u16]) -> Vec<Rect> {
    let constraints: Vec<Constraint> = label_widths
        .iter()
        .map(|w| Constraint::Length(w.saturating_add(4)))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(area);
    chunks[..label_widths.len()].to_vec()
}
