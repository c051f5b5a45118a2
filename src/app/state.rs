use crate::component::{ButtonId, MyList, Parent, Props, PropsError};
use crate::config::{self, AppConfig};
use chrono::Local;
use std::fmt::Write;
use ratatui::layout::{Position, Rect};
use tracing::{info, warn};

/// How long a flashed status message stays up, in ticks.
const STATUS_TTL_TICKS: u64 = 12;

/// Screen area of a rendered button, recorded on every draw for mouse
/// hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub area: Rect,
    pub button: ButtonId,
}

/// The host's side of the forwarding callback.
#[derive(Debug)]
pub struct ParentState {
    pub messages_received: u64,
    pub last_message_at: Option<String>,
    timestamp_format: String,
}

impl ParentState {
    /// An unparseable format falls back to the default one.
    pub fn new(timestamp_format: String) -> Self {
        let timestamp_format = if config::is_valid_timestamp_format(&timestamp_format) {
            timestamp_format
        } else {
            warn!(format = %timestamp_format, "invalid timestamp format, using default");
            config::DEFAULT_TIMESTAMP_FORMAT.to_string()
        };
        Self {
            messages_received: 0,
            last_message_at: None,
            timestamp_format,
        }
    }
}

impl Parent for ParentState {
    fn send_message(&mut self) {
        self.messages_received += 1;
        let mut at = String::new();
        if write!(at, "{}", Local::now().format(&self.timestamp_format)).is_err() {
            at = Local::now().format(config::DEFAULT_TIMESTAMP_FORMAT).to_string();
        }
        self.last_message_at = Some(at);
        info!(total = self.messages_received, "message received from list");
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub list: MyList,
    pub parent: ParentState,
    pub focus: ButtonId,
    pub hitboxes: Vec<Hitbox>,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub status_expires_at: u64,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, PropsError> {
        let list = MyList::new(config.props.to_props()?)?;
        let parent = ParentState::new(config.ui.timestamp_format.clone());
        Ok(Self {
            config,
            list,
            parent,
            focus: ButtonId::Increment,
            hitboxes: Vec::new(),
            should_quit: false,
            dirty: true,
            status_message: None,
            status_expires_at: 0,
            tick_count: 0,
        })
    }

    /// Click a button, then commit whatever it queued.
    pub fn activate(&mut self, button: ButtonId) {
        let before = self.parent.messages_received;
        self.list.activate(button, &mut self.parent);
        if self.parent.messages_received != before {
            self.dirty = true;
        }
        self.commit();
    }

    pub fn commit(&mut self) {
        if !self.list.has_pending() {
            return;
        }
        if self.list.commit() {
            self.dirty = true;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    /// The palette entry after the current buttons colour, or the first
    /// entry when the current colour is unset or not in the palette.
    pub fn next_buttons_color(&self) -> Option<String> {
        let palette = &self.config.ui.palette;
        if palette.is_empty() {
            return None;
        }
        let next = self
            .list
            .props()
            .buttons_color
            .as_ref()
            .and_then(|c| palette.iter().position(|p| p.eq_ignore_ascii_case(c)))
            .map(|i| (i + 1) % palette.len())
            .unwrap_or(0);
        Some(palette[next].clone())
    }

    /// Handle the `c` key: re-render with the next palette colour, or say
    /// why not.
    pub fn cycle_buttons_color(&mut self) {
        match self.next_buttons_color() {
            Some(color) => {
                info!(%color, "parent re-rendering with new buttons color");
                self.rerender_with_color(Some(color));
            }
            None => self.flash("Palette is empty".to_string()),
        }
    }

    /// Act as the parent re-rendering the list with a different colour.
    pub fn rerender_with_color(&mut self, color: Option<String>) {
        let next = Props {
            buttons_color: color,
            ..self.list.props().clone()
        };
        match self.list.receive_props(next) {
            Ok(true) => self.dirty = true,
            Ok(false) => {}
            Err(e) => {
                warn!(error = %e, "rejected new props");
                self.flash(format!("Rejected props: {}", e));
            }
        }
    }

    /// Copy the live props back into the config so a save persists them.
    pub fn sync_config(&mut self) {
        self.config.props.buttons_color = self.list.props().buttons_color.clone();
    }

    pub fn flash(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_expires_at = self.tick_count + STATUS_TTL_TICKS;
        self.dirty = true;
    }

    pub fn expire_status(&mut self) {
        if self.status_message.is_some() && self.tick_count >= self.status_expires_at {
            self.status_message = None;
            self.dirty = true;
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ButtonId> {
        self.hitboxes
            .iter()
            .find(|h| h.area.contains(Position::new(column, row)))
            .map(|h| h.button)
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match &self.parent.last_message_at {
            Some(at) => format!(
                "Messages: {} | last at {}",
                self.parent.messages_received, at
            ),
            None => "Messages: 0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default()).unwrap()
    }

    #[test]
    fn test_new_uses_config_props() {
        let state = state();
        assert_eq!(state.list.props().list_items.len(), 2);
        assert_eq!(state.list.props().buttons_color.as_deref(), Some("red"));
        assert_eq!(state.list.state().counter, 0);
    }

    #[test]
    fn test_new_fails_without_title() {
        let mut config = AppConfig::default();
        config.props.global_title = None;
        assert!(matches!(
            AppState::new(config),
            Err(PropsError::MissingGlobalTitle)
        ));
    }

    #[test]
    fn test_activate_commits() {
        let mut state = state();
        state.dirty = false;
        state.activate(ButtonId::Increment);
        assert_eq!(state.list.state().counter, 1);
        assert!(state.dirty);
    }

    #[test]
    fn test_forward_reaches_parent() {
        let mut state = state();
        state.activate(ButtonId::SendMessage);
        state.activate(ButtonId::SendMessage);
        assert_eq!(state.parent.messages_received, 2);
        assert!(state.parent.last_message_at.is_some());
        assert!(state.status_line().starts_with("Messages: 2"));
    }

    #[test]
    fn test_palette_cycle_resets_counter() {
        let mut state = state();
        state.activate(ButtonId::Increment);
        state.activate(ButtonId::Increment);
        let next = state.next_buttons_color();
        assert_eq!(next.as_deref(), Some("blue"));
        state.rerender_with_color(next);
        assert_eq!(state.list.state().counter, 0);
        state.activate(ButtonId::Decrement);
        assert_eq!(state.list.state().counter, -1);
    }

    #[test]
    fn test_palette_wraps_and_handles_unknown_color() {
        let mut state = state();
        state.config.ui.palette = vec!["red".into(), "blue".into()];
        state.rerender_with_color(Some("blue".into()));
        assert_eq!(state.next_buttons_color().as_deref(), Some("red"));
        state.rerender_with_color(Some("#123456".into()));
        assert_eq!(state.next_buttons_color().as_deref(), Some("red"));
        state.config.ui.palette.clear();
        assert_eq!(state.next_buttons_color(), None);
    }

    #[test]
    fn test_cycle_with_empty_palette_keeps_props() {
        let mut state = state();
        state.activate(ButtonId::Increment);
        state.config.ui.palette.clear();
        state.cycle_buttons_color();
        assert_eq!(state.list.props().buttons_color.as_deref(), Some("red"));
        assert_eq!(state.list.state().counter, 1);
        assert_eq!(state.status_line(), "Palette is empty");

        state.config.ui.palette = vec!["green".into()];
        state.cycle_buttons_color();
        assert_eq!(state.list.props().buttons_color.as_deref(), Some("green"));
        assert_eq!(state.list.state().counter, 0);
    }

    #[test]
    fn test_bad_timestamp_format_does_not_panic() {
        let mut config = AppConfig::default();
        config.ui.timestamp_format = "%Q".to_string();
        let mut state = AppState::new(config).unwrap();
        state.activate(ButtonId::SendMessage);
        assert_eq!(state.parent.messages_received, 1);
        assert!(state.parent.last_message_at.is_some());
    }

    #[test]
    fn test_hit_test() {
        let mut state = state();
        state.hitboxes = vec![
            Hitbox {
                area: Rect::new(0, 10, 13, 3),
                button: ButtonId::Increment,
            },
            Hitbox {
                area: Rect::new(14, 10, 13, 3),
                button: ButtonId::Decrement,
            },
        ];
        assert_eq!(state.hit_test(2, 11), Some(ButtonId::Increment));
        assert_eq!(state.hit_test(14, 12), Some(ButtonId::Decrement));
        assert_eq!(state.hit_test(13, 11), None);
        assert_eq!(state.hit_test(2, 13), None);
    }

    #[test]
    fn test_flash_expires() {
        let mut state = state();
        state.flash("saved".into());
        assert_eq!(state.status_line(), "saved");
        state.tick_count += STATUS_TTL_TICKS;
        state.expire_status();
        assert_eq!(state.status_line(), "Messages: 0");
    }
}
