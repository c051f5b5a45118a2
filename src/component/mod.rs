//! The list component: props in, a queue of state updates, and a pure view
//! of the latest state out.
//!
//! Handlers never touch [`ListState`] directly. They queue a
//! [`StateUpdate`], and [`MyList::commit`] folds the queue through
//! [`reducer::reduce`]. After any commit that changed something the
//! post-update hook runs once; it writes the title in place rather than
//! queueing, so it can never trigger another update.

pub mod props;
pub mod reducer;
pub mod view;

pub use props::{Item, Props, PropsError};
pub use reducer::{ListState, StateUpdate};
pub use view::{ButtonId, Node};

use tracing::{debug, info};

/// Outbound interface of the component: the single no-argument callback the
/// parent supplies.
pub trait Parent {
    fn send_message(&mut self);
}

impl<F: FnMut()> Parent for F {
    fn send_message(&mut self) {
        self()
    }
}

#[derive(Debug)]
pub struct MyList {
    props: Props,
    state: ListState,
    pending: Vec<StateUpdate>,
}

impl MyList {
    /// Mount the component. Fails if a required prop is missing.
    pub fn new(props: Props) -> Result<Self, PropsError> {
        props.validate()?;
        info!(
            items = props.list_items.len(),
            buttons_color = ?props.buttons_color,
            "list component mounted"
        );
        Ok(Self {
            props,
            state: ListState::default(),
            pending: Vec::new(),
        })
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn increment_handler(&mut self) {
        self.request(StateUpdate::Increment);
    }

    pub fn decrement_handler(&mut self) {
        self.request(StateUpdate::Decrement);
    }

    pub fn send_message<P: Parent + ?Sized>(&self, parent: &mut P) {
        debug!("forwarding message to parent");
        parent.send_message();
    }

    /// Dispatch a click on one of the rendered buttons.
    pub fn activate<P: Parent + ?Sized>(&mut self, button: ButtonId, parent: &mut P) {
        match button {
            ButtonId::Increment => self.increment_handler(),
            ButtonId::Decrement => self.decrement_handler(),
            ButtonId::SendMessage => self.send_message(parent),
        }
    }

    /// Whether `next` differs from the current props in any field.
    pub fn should_update(&self, next: &Props) -> bool {
        *next != self.props
    }

    /// Accept new props from the parent. Returns whether a re-render is
    /// needed. Invalid props are rejected and the current ones kept.
    pub fn receive_props(&mut self, next: Props) -> Result<bool, PropsError> {
        next.validate()?;
        self.will_receive_props(&next);
        let props_changed = self.should_update(&next);
        self.props = next;
        let state_changed = self.apply_pending();
        let updated = props_changed || state_changed;
        if updated {
            self.did_update();
        }
        Ok(updated)
    }

    /// Apply every queued update. Returns whether the state changed.
    pub fn commit(&mut self) -> bool {
        let changed = self.apply_pending();
        if changed {
            self.did_update();
            debug!(tree = %view::to_markup(&self.view()), "re-rendered");
        }
        changed
    }

    pub fn view(&self) -> Vec<Node> {
        view::render(&self.props, &self.state)
    }

    fn request(&mut self, update: StateUpdate) {
        debug!(?update, "state update requested");
        self.pending.push(update);
    }

    fn will_receive_props(&mut self, next: &Props) {
        if next.buttons_color != self.props.buttons_color {
            debug!(
                from = ?self.props.buttons_color,
                to = ?next.buttons_color,
                "buttons color changed, resetting counter"
            );
            self.request(StateUpdate::ResetCounter);
        }
    }

    fn did_update(&mut self) {
        self.state = reducer::reduce(
            &self.state,
            &StateUpdate::SetTitle(reducer::UPDATED_TITLE.to_string()),
        );
    }

    fn apply_pending(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        let before = self.state.clone();
        for update in self.pending.drain(..) {
            self.state = reducer::reduce(&self.state, &update);
        }
        debug!(counter = self.state.counter, "state committed");
        self.state != before
    }
}
