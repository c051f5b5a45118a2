use crate::app::state::{AppState, Hitbox};
use crate::component::view::{Node, Tag, CLASS_COUNTER, CLASS_TITLE, CLASS_VISIBLE};
use crate::component::ButtonId;
use crate::ui::layout;
use crate::ui::theme::{parse_color, Theme};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Paint the component's output tree and return where its buttons landed.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) -> Vec<Hitbox> {
    let props = state.list.props();
    let nodes = state.list.view();

    let block = Block::default()
        .title(format!(" {} ", props.global_title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (buttons, content): (Vec<&Node>, Vec<&Node>) =
        nodes.iter().partition(|n| n.tag == Tag::Button);
    let (content_area, button_area) = layout::split_list(inner);

    let lines = content_lines(&content, content_area.height);
    frame.render_widget(Paragraph::new(lines), content_area);

    let color = parse_color(props.buttons_color.as_deref());
    render_buttons(frame, button_area, &buttons, color, state)
}

/// Lines for the content column. When the items do not fit, the overflow is
/// replaced by a `+N more` marker so the counter stays on screen.
fn content_lines<'a>(content: &[&'a Node], height: u16) -> Vec<Line<'a>> {
    let items = content.iter().filter(|n| n.tag == Tag::ListItem).count();
    let room = (height as usize).saturating_sub(content.len() - items);
    if items <= room {
        return content.iter().map(|n| node_line(*n)).collect();
    }

    let shown = room.saturating_sub(1);
    let mut lines = Vec::with_capacity(room + 3);
    let mut seen = 0;
    for node in content {
        if node.tag != Tag::ListItem {
            lines.push(node_line(*node));
            continue;
        }
        seen += 1;
        if seen <= shown {
            lines.push(node_line(*node));
        } else if seen == shown + 1 {
            lines.push(Line::from(Span::styled(
                format!(" +{} more", items - shown),
                Theme::label(),
            )));
        }
    }
    lines
}

fn node_line(node: &Node) -> Line<'_> {
    match node.tag {
        Tag::H1 => Line::from(Span::styled(node.text.as_str(), Theme::heading())),
        Tag::Div if node.has_class(CLASS_TITLE) => Line::from(vec![
            Span::styled("title ", Theme::label()),
            Span::styled(node.text.as_str(), Theme::title_text()),
        ]),
        Tag::Div if node.has_class(CLASS_COUNTER) => Line::from(vec![
            Span::styled("count ", Theme::label()),
            Span::styled(node.text.as_str(), Theme::counter()),
        ]),
        Tag::ListItem => Line::from(vec![
            Span::styled(" * ", Theme::bullet()),
            Span::styled(node.text.as_str(), Theme::item()),
        ]),
        Tag::Div | Tag::Button => Line::from(node.text.as_str()),
    }
}

fn render_buttons(
    frame: &mut Frame,
    area: Rect,
    buttons: &[&Node],
    color: Color,
    state: &AppState,
) -> Vec<Hitbox> {
    let widths: Vec<u16> = buttons
        .iter()
        .map(|b| b.text.width().min(u16::MAX as usize) as u16)
        .collect();
    let slots = layout::button_row(area, &widths);

    let mut hitboxes = Vec::with_capacity(buttons.len());
    for (node, slot) in buttons.iter().zip(slots) {
        let Some(id) = node.on_click else { continue };
        let focused = state.focus == id;
        // Only the decrement button has a class that toggles.
        let visible = match id {
            ButtonId::Decrement => node.has_class(CLASS_VISIBLE),
            ButtonId::Increment | ButtonId::SendMessage => true,
        };
        let style = Theme::button(color, visible, focused);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if focused {
                Theme::border_type_focused()
            } else {
                Theme::border_type()
            })
            .border_style(style);
        let label = Paragraph::new(node.text.as_str())
            .style(style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(label, slot);

        if !slot.is_empty() {
            hitboxes.push(Hitbox {
                area: slot,
                button: id,
            });
        }
    }
    hitboxes
}
