//! The scene: ordered structures, animation groups and options.

use serde_json::Value;

use crate::error::{LinefieldError, Result};
use crate::group::{Group, LayerBinding};
use crate::options::FigureOptions;
use crate::registry::Registry;
use crate::structure::Structure;

/// Everything needed to write one figure.
///
/// A scene is assembled once, then handed to the renderer. Groups may only
/// name structures that are already registered.
pub struct Scene {
    /// The structure registry, in draw order.
    pub registry: Registry,

    /// Animation groups, in declaration order.
    groups: Vec<Group>,

    /// Options the scene was built with.
    pub options: FigureOptions,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new(options: FigureOptions) -> Self {
        Self {
            registry: Registry::new(),
            groups: Vec::new(),
            options,
        }
    }

    /// Registers a structure and returns its trace index.
    pub fn register(&mut self, structure: impl Structure) -> Result<usize> {
        self.registry.register(Box::new(structure))
    }

    /// Adds an animation group.
    ///
    /// Fails if the group name is taken or a member is not registered.
    pub fn add_group(&mut self, group: Group) -> Result<()> {
        if self.groups.iter().any(|g| g.name() == group.name()) {
            return Err(LinefieldError::GroupExists(group.name().to_string()));
        }
        if let Some(missing) = group.members().find(|m| !self.registry.contains(m)) {
            return Err(LinefieldError::StructureNotFound(missing.to_string()));
        }
        self.groups.push(group);
        Ok(())
    }

    /// Returns the animation groups.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Resolves every group to the trace indices it restyles.
    pub fn layer_bindings(&self) -> Vec<LayerBinding> {
        self.groups
            .iter()
            .map(|group| {
                let mut indices: Vec<usize> = group
                    .members()
                    .filter_map(|m| self.registry.index_of(m))
                    .collect();
                indices.sort_unstable();
                LayerBinding {
                    group: group.name().to_string(),
                    message_field: group.message_field().to_string(),
                    restyle_keys: group.restyle_keys().to_vec(),
                    indices,
                }
            })
            .collect()
    }

    /// Serializes every structure, in draw order.
    pub fn traces(&self) -> Vec<Value> {
        self.registry.iter().map(Structure::to_trace).collect()
    }

    /// Returns the number of traces the scene will emit.
    pub fn num_traces(&self) -> usize {
        self.registry.len()
    }
}
