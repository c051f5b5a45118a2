//! Local state of the list component and the pure reducer over it.

pub const INITIAL_TITLE: &str = "my title";
pub const INITIAL_OTHER_TITLE: &str = "my other title";
/// Title written by the post-update hook.
pub const UPDATED_TITLE: &str = "some text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub counter: i64,
    pub title: String,
    /// Kept for parity with the state shape; nothing renders it.
    pub other_title: String,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            counter: 0,
            title: INITIAL_TITLE.to_string(),
            other_title: INITIAL_OTHER_TITLE.to_string(),
        }
    }
}

/// A requested change to [`ListState`]. Requests queue up and are applied
/// together on commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateUpdate {
    Increment,
    /// Not clamped at zero.
    Decrement,
    ResetCounter,
    SetTitle(String),
}

pub fn reduce(state: &ListState, update: &StateUpdate) -> ListState {
    let mut next = state.clone();
    match update {
        StateUpdate::Increment => next.counter = state.counter.saturating_add(1),
        StateUpdate::Decrement => next.counter = state.counter.saturating_sub(1),
        StateUpdate::ResetCounter => next.counter = 0,
        StateUpdate::SetTitle(title) => next.title = title.clone(),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(updates: &[StateUpdate]) -> ListState {
        updates
            .iter()
            .fold(ListState::default(), |state, update| reduce(&state, update))
    }

    #[test]
    fn test_initial_state() {
        let state = ListState::default();
        assert_eq!(state.counter, 0);
        assert_eq!(state.title, "my title");
        assert_eq!(state.other_title, "my other title");
    }

    #[test]
    fn test_counter_is_increments_minus_decrements() {
        use StateUpdate::*;
        assert_eq!(apply(&[Increment, Decrement, Increment, Increment]).counter, 2);
        assert_eq!(apply(&[Decrement, Decrement, Increment]).counter, -1);
        assert_eq!(apply(&vec![Decrement; 5]).counter, -5);
    }

    #[test]
    fn test_reset_and_title_are_independent() {
        use StateUpdate::*;
        let state = apply(&[Increment, SetTitle("x".into()), Increment, ResetCounter]);
        assert_eq!(state.counter, 0);
        assert_eq!(state.title, "x");
        assert_eq!(state.other_title, INITIAL_OTHER_TITLE);
    }

    #[test]
    fn test_counter_saturates() {
        let state = ListState {
            counter: i64::MAX,
            ..ListState::default()
        };
        assert_eq!(reduce(&state, &StateUpdate::Increment).counter, i64::MAX);
    }
}
