//! Properties handed to the list component by its parent.
//!
//! Props are read-only to the component. Required fields are checked when the
//! props are assembled and again every time the parent re-renders, so a
//! missing title fails loudly instead of rendering an empty heading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of `list_items`. The record is opaque: the component counts
/// entries but never looks inside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(pub toml::Table);

impl Item {
    /// Convenience for the common `{ id = N }` record.
    pub fn with_id(id: i64) -> Self {
        let mut table = toml::Table::new();
        table.insert("id".to_string(), toml::Value::Integer(id));
        Self(table)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    #[error("required prop `global_title` was not supplied")]
    MissingGlobalTitle,
    #[error("required prop `global_title` is blank")]
    EmptyGlobalTitle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Props {
    pub list_items: Vec<Item>,
    pub global_title: String,
    pub buttons_color: Option<String>,
}

impl Props {
    pub fn new(global_title: impl Into<String>) -> Self {
        Self {
            list_items: Vec::new(),
            global_title: global_title.into(),
            buttons_color: None,
        }
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.list_items = items;
        self
    }

    pub fn with_buttons_color(mut self, color: impl Into<String>) -> Self {
        self.buttons_color = Some(color.into());
        self
    }

    /// Assemble props from possibly-missing parts. An absent item list takes
    /// the default (empty); an absent title is an error.
    pub fn from_parts(
        global_title: Option<String>,
        list_items: Option<Vec<Item>>,
        buttons_color: Option<String>,
    ) -> Result<Self, PropsError> {
        let title = global_title.ok_or(PropsError::MissingGlobalTitle)?;
        let mut props = Self::new(title).with_items(list_items.unwrap_or_default());
        if let Some(color) = buttons_color {
            props = props.with_buttons_color(color);
        }
        props.validate()?;
        Ok(props)
    }

    pub fn validate(&self) -> Result<(), PropsError> {
        if self.global_title.trim().is_empty() {
            return Err(PropsError::EmptyGlobalTitle);
        }
        Ok(())
    }
}
