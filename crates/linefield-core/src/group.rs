//! Animation groups.
//!
//! A [`Group`] names a set of structures that fade together. The embedded
//! scroll listener drives each group through one message field. Groups refer
//! to structures by name, and the scene resolves them to trace indices when
//! the listener is generated, so the draw order and the script cannot drift
//! apart.

use serde::{Deserialize, Serialize};

/// A named set of structures driven by one scroll-message field.
#[derive(Debug, Clone)]
pub struct Group {
    /// The unique name of this group.
    name: String,
    /// Message field that carries this group's opacity (e.g. `barOpacity`).
    message_field: String,
    /// Plotly attribute keys set to the field value on restyle.
    restyle_keys: Vec<String>,
    /// Member structure names, in insertion order.
    members: Vec<String>,
}

impl Group {
    /// Creates a new group restyling the trace-level `opacity` attribute.
    pub fn new(name: impl Into<String>, message_field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message_field: message_field.into(),
            restyle_keys: vec!["opacity".to_string()],
            members: Vec::new(),
        }
    }

    /// Replaces the attribute keys this group restyles.
    #[must_use]
    pub fn with_restyle_keys(mut self, keys: &[&str]) -> Self {
        self.restyle_keys = keys.iter().map(|k| (*k).to_string()).collect();
        self
    }

    /// Adds a member structure by name.
    #[must_use]
    pub fn with_member(mut self, structure_name: impl Into<String>) -> Self {
        self.add_structure(structure_name);
        self
    }

    /// Returns the name of this group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the message field driving this group.
    #[must_use]
    pub fn message_field(&self) -> &str {
        &self.message_field
    }

    /// Returns the restyled attribute keys.
    #[must_use]
    pub fn restyle_keys(&self) -> &[String] {
        &self.restyle_keys
    }

    /// Adds a structure to this group. Duplicates are ignored.
    pub fn add_structure(&mut self, structure_name: impl Into<String>) {
        let structure_name = structure_name.into();
        if !self.members.contains(&structure_name) {
            self.members.push(structure_name);
        }
    }

    /// Returns the member structure names.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Returns true if this group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A group resolved against a scene: the field, keys and sorted trace indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerBinding {
    /// Name of the source group.
    pub group: String,
    /// Message field that carries the opacity value.
    pub message_field: String,
    /// Attribute keys set to the value.
    pub restyle_keys: Vec<String>,
    /// Trace indices restyled, ascending.
    pub indices: Vec<usize>,
}
