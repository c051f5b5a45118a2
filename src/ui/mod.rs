mod layout;
mod list_view;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Hitbox};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HINTS: &str =
    " +/i inc  -/d dec  s send  tab focus  enter press  c colour  w save  q quit";

/// Draw the whole screen. Returns the button hitboxes of this frame.
pub fn render(frame: &mut Frame, state: &AppState) -> Vec<Hitbox> {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    let hitboxes = list_view::render(frame, app_layout.list, state);
    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, theme::Theme::label())),
        app_layout.help_bar,
    );
    status_bar::render(frame, app_layout.status_bar, state);
    hitboxes
}
