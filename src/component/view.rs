//! Pure projection from props and state to the component's output tree.

use super::props::Props;
use super::reducer::ListState;
use std::fmt;

pub const HEADING: &str = "Some heading";
/// Value every child item is rendered with, regardless of the item itself.
pub const ITEM_PLACEHOLDER: &str = "item";

pub const CLASS_TITLE: &str = "title";
pub const CLASS_COUNTER: &str = "counter";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_FORWARD: &str = "someClass";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    H1,
    Div,
    ListItem,
    Button,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::H1 => "h1",
            Tag::Div => "div",
            Tag::ListItem => "ListItem",
            Tag::Button => "button",
        }
    }
}

/// The three clickable buttons, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Increment,
    Decrement,
    SendMessage,
}

impl ButtonId {
    pub const ALL: [ButtonId; 3] = [ButtonId::Increment, ButtonId::Decrement, ButtonId::SendMessage];

    fn index(self) -> usize {
        Self::ALL.iter().position(|b| *b == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: Tag,
    pub class: Option<&'static str>,
    /// Text content, or the `item` attribute for list items.
    pub text: String,
    pub on_click: Option<ButtonId>,
}

impl Node {
    fn element(tag: Tag, class: Option<&'static str>, text: impl Into<String>) -> Self {
        Self {
            tag,
            class,
            text: text.into(),
            on_click: None,
        }
    }

    fn button(label: &str, class: Option<&'static str>, id: ButtonId) -> Self {
        Self {
            on_click: Some(id),
            ..Self::element(Tag::Button, class, label)
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class == Some(class)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag.name();
        if self.tag == Tag::ListItem {
            return write!(f, "<{} item=\"{}\" />", tag, self.text);
        }
        match self.class {
            Some(class) => write!(f, "<{} class=\"{}\">{}</{}>", tag, class, self.text, tag),
            None => write!(f, "<{}>{}</{}>", tag, self.text, tag),
        }
    }
}

pub fn render(props: &Props, state: &ListState) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(props.list_items.len() + 6);

    nodes.push(Node::element(Tag::H1, None, HEADING));
    nodes.push(Node::element(Tag::Div, Some(CLASS_TITLE), state.title.as_str()));
    nodes.extend(
        props
            .list_items
            .iter()
            .map(|_| Node::element(Tag::ListItem, None, ITEM_PLACEHOLDER)),
    );
    nodes.push(Node::element(
        Tag::Div,
        Some(CLASS_COUNTER),
        state.counter.to_string(),
    ));

    nodes.push(Node::button("Increment", None, ButtonId::Increment));
    let decrement_class = (state.counter != 0).then_some(CLASS_VISIBLE);
    nodes.push(Node::button("Decrement", decrement_class, ButtonId::Decrement));
    // Label matches the decrement button even though this one forwards.
    nodes.push(Node::button("Decrement", Some(CLASS_FORWARD), ButtonId::SendMessage));

    nodes
}

/// Serialise a tree to markup, one element per line.
pub fn to_markup(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
