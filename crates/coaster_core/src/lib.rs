//! Coaster Core
//!
//! Contains the fundamental vehicle-composition types:
//! - Part model and composite assembly
//! - Part-type registry
//! - Transform math helpers
//!
//! The physics engine and the scene host are external collaborators;
//! this crate only describes how parts compose and where they sit.

pub mod math;
pub mod part;
pub mod registry;

pub use glam;

pub use math::{inverse_safe, rotation_translation, TRANSFORM_EPS};
pub use part::{PartKind, PartNode, Placed, VehicleAssembly, WheelNode};
pub use registry::{PartDescriptor, PartRegistry, RegistryError};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
