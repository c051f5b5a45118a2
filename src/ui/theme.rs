use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::str::FromStr;

pub struct Theme;

impl Theme {
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const DEFAULT_BUTTON: Color = Color::Gray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn title_text() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn bullet() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn item() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn counter() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    /// Style of a button in the configured colour. Buttons without their
    /// `visible` class are drawn dimmed.
    pub fn button(color: Color, visible: bool, focused: bool) -> Style {
        let mut style = if visible {
            Style::default().fg(color)
        } else {
            Style::default().fg(Self::TEXT_MUTED)
        };
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_accent() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}

/// Map a `buttons_color` prop onto a terminal colour. Accepts anything
/// ratatui parses (`"red"`, `"lightblue"`, `"#ff8800"`); unset or unknown
/// names fall back to the default.
pub fn parse_color(name: Option<&str>) -> Color {
    name.and_then(|n| Color::from_str(n.trim()).ok())
        .unwrap_or(Theme::DEFAULT_BUTTON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(Some("blue")), Color::Blue);
        assert_eq!(parse_color(Some(" red ")), Color::Red);
        assert_eq!(parse_color(Some("#ff8800")), Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(parse_color(Some("not-a-colour")), Theme::DEFAULT_BUTTON);
        assert_eq!(parse_color(None), Theme::DEFAULT_BUTTON);
    }

    #[test]
    fn test_hidden_button_is_dimmed() {
        assert_eq!(Theme::button(Color::Red, false, false).fg, Some(Theme::TEXT_MUTED));
        assert_eq!(Theme::button(Color::Red, true, false).fg, Some(Color::Red));
    }
}
