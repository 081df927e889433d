//! Part-type registry
//!
//! Maps stable textual type names to constructible part descriptors.
//! The registry is explicit and populated at startup; there is no
//! runtime iteration over live types, and names are unique by
//! construction (duplicate registration is an error rather than a
//! first-one-wins lookup).

use crate::part::{PartKind, PartNode, WheelNode};
use glam::Mat4;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while populating the part registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("part type '{name}' is already registered")]
    DuplicateName { name: String },
}

/// A constructible part type: its stable name and kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDescriptor {
    name: String,
    kind: PartKind,
}

impl PartDescriptor {
    pub fn new(name: impl Into<String>, kind: PartKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Stable type name; the reverse mapping of `PartRegistry::resolve`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PartKind {
        self.kind
    }

    /// Construct a part instance of this type at a world transform.
    pub fn build(&self, world: Mat4) -> PartNode {
        PartNode::new(self.name.clone(), world)
    }

    /// Construct a wheel instance with both flags cleared.
    pub fn build_wheel(&self, world: Mat4) -> WheelNode {
        WheelNode::new(self.build(world), false, false)
    }
}

/// Explicit name → descriptor map populated at startup.
#[derive(Debug, Default)]
pub struct PartRegistry {
    parts: HashMap<String, PartDescriptor>,
}

impl PartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a part type. Names must be unique.
    pub fn register(&mut self, descriptor: PartDescriptor) -> Result<(), RegistryError> {
        if self.parts.contains_key(descriptor.name()) {
            return Err(RegistryError::DuplicateName {
                name: descriptor.name().to_string(),
            });
        }
        tracing::debug!(name = descriptor.name(), kind = ?descriptor.kind(), "registered part type");
        self.parts.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Resolve a stable type name to its descriptor.
    pub fn resolve(&self, name: &str) -> Option<&PartDescriptor> {
        self.parts.get(name)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
