use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::component::ButtonId;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    state.expire_status();
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('+') | KeyCode::Char('i') => {
            state.activate(ButtonId::Increment);
            vec![]
        }
        KeyCode::Char('-') | KeyCode::Char('d') => {
            state.activate(ButtonId::Decrement);
            vec![]
        }
        KeyCode::Char('s') => {
            state.activate(ButtonId::SendMessage);
            vec![]
        }
        KeyCode::Char('c') => vec![Action::CycleButtonsColor],
        KeyCode::Char('w') => vec![Action::SaveConfig],
        KeyCode::Tab | KeyCode::Right => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Left => {
            state.cycle_focus_back();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.activate(state.focus);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(button) = state.hit_test(mouse.column, mouse.row) {
        if state.focus != button {
            state.focus = button;
            state.dirty = true;
        }
        state.activate(button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Hitbox;
    use crate::config::AppConfig;
    use ratatui::layout::Rect;

    fn state() -> AppState {
        AppState::new(AppConfig::default()).unwrap()
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let event = CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        handle_event(state, AppEvent::Terminal(event))
    }

    fn click(state: &mut AppState, column: u16, row: u16) {
        let event = CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        handle_event(state, AppEvent::Terminal(event));
    }

    #[test]
    fn test_keys_drive_counter() {
        let mut state = state();
        for _ in 0..3 {
            press(&mut state, KeyCode::Char('+'));
        }
        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('-'));
        press(&mut state, KeyCode::Char('-'));
        press(&mut state, KeyCode::Char('-'));
        assert_eq!(state.list.state().counter, -1);
    }

    #[test]
    fn test_focus_and_enter() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, ButtonId::Decrement);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.list.state().counter, -1);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.parent.messages_received, 1);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, ButtonId::Decrement);
    }

    #[test]
    fn test_outbound_actions() {
        let mut state = state();
        assert_eq!(press(&mut state, KeyCode::Char('c')), vec![Action::CycleButtonsColor]);
        assert_eq!(press(&mut state, KeyCode::Char('w')), vec![Action::SaveConfig]);
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            handle_event(&mut state, AppEvent::Terminal(ctrl_c)),
            vec![Action::Quit]
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = state();
        let mut key = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(state.list.state().counter, 0);
    }

    #[test]
    fn test_mouse_click_activates_button() {
        let mut state = state();
        state.hitboxes = vec![Hitbox {
            area: Rect::new(20, 8, 13, 3),
            button: ButtonId::SendMessage,
        }];
        click(&mut state, 25, 9);
        assert_eq!(state.parent.messages_received, 1);
        assert_eq!(state.focus, ButtonId::SendMessage);
        click(&mut state, 0, 0);
        assert_eq!(state.parent.messages_received, 1);
    }

    #[test]
    fn test_tick_expires_status() {
        let mut state = state();
        state.flash("hello".into());
        for _ in 0..20 {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert!(state.status_message.is_none());
    }
}
