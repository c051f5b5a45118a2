use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let color = state
        .list
        .props()
        .buttons_color
        .as_deref()
        .unwrap_or("default");
    parts.push(Span::styled(format!(" [{}] ", color), Theme::status_accent()));
    parts.push(Span::styled(
        format!(" counter {} |", state.list.state().counter),
        Theme::status_bar(),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Pad to fill remaining space
    let focus_name = match state.focus {
        crate::component::ButtonId::Increment => "INCREMENT",
        crate::component::ButtonId::Decrement => "DECREMENT",
        crate::component::ButtonId::SendMessage => "FORWARD",
    };
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Theme::status_accent(),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
