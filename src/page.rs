//! Minimal page model the panel controller observes
//!
//! The controller never renders anything; its entire visible output is a
//! marker class toggled on a class set. This module models just enough of a
//! document for that contract: class sets, panel nodes with a scroll offset,
//! and forms that can be reset to their default field values.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a panel node
///
/// Triggers reference panels by this identifier, the same way an anchor
/// pointing at `#panelId` does.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Set of CSS-like classes on an element
///
/// Presence/absence of the visibility marker in one of these is the single
/// source of truth for a panel's open/closed state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: HashSet<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Flip a class, returning whether it is present afterwards
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// A single form field with its current and default value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub default_value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        let default_value = default_value.into();
        Self {
            name: name.into(),
            value: default_value.clone(),
            default_value,
        }
    }

    pub fn reset(&mut self) {
        self.value = self.default_value.clone();
    }
}

/// A form contained in a panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<FormField>,
}

impl Form {
    /// Restore every field to its default value
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}

/// A panel container element
#[derive(Debug, Clone)]
pub struct PanelNode {
    pub id: PanelId,
    pub classes: ClassSet,
    /// Vertical scroll offset of the panel content
    pub scroll_top: f64,
    pub forms: Vec<Form>,
}

impl PanelNode {
    pub fn new(id: impl Into<PanelId>) -> Self {
        Self {
            id: id.into(),
            classes: ClassSet::new(),
            scroll_top: 0.0,
            forms: Vec::new(),
        }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_top = 0.0;
    }

    pub fn reset_forms(&mut self) {
        for form in &mut self.forms {
            form.reset();
        }
    }
}

/// The document: a body class set plus the panel nodes inserted into it
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub body: ClassSet,
    panels: Vec<PanelNode>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a panel node, replacing any existing node with the same id
    pub fn insert_panel(&mut self, panel: PanelNode) {
        if let Some(existing) = self.panels.iter_mut().find(|p| p.id == panel.id) {
            *existing = panel;
        } else {
            self.panels.push(panel);
        }
    }

    pub fn remove_panel(&mut self, id: &PanelId) -> Option<PanelNode> {
        let index = self.panels.iter().position(|p| &p.id == id)?;
        Some(self.panels.remove(index))
    }

    pub fn panel(&self, id: &PanelId) -> Option<&PanelNode> {
        self.panels.iter().find(|p| &p.id == id)
    }

    pub fn panel_mut(&mut self, id: &PanelId) -> Option<&mut PanelNode> {
        self.panels.iter_mut().find(|p| &p.id == id)
    }

    pub fn panels(&self) -> &[PanelNode] {
        &self.panels
    }
}
