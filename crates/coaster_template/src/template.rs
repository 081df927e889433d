//! Portable vehicle template data model
//!
//! A template is an immutable value describing a composite's parts
//! and their placements relative to the body. It owns no runtime
//! resources and may be freely shared once produced.

use glam::Mat4;

/// Captured wheel: type name, per-wheel flags, and the wheel mount's
/// transform relative to the body.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelRecord {
    pub type_name: String,
    pub steerable: bool,
    pub has_brake: bool,
    pub relative: Mat4,
}

/// Captured counterweight: type name and relative transform only.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightRecord {
    pub type_name: String,
    pub relative: Mat4,
}

/// The portable description of one assembled vehicle.
///
/// `wheels` and `weights` keep capture order; the order has no
/// meaning beyond reproducibility. `steering_type` / `brake_type`
/// unset means "no such unit" — a valid template never stores an
/// empty string there. Steering and brake carry no relative
/// transform: they re-attach at the body's own pose.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleTemplate {
    pub body_type: String,
    pub wheels: Vec<WheelRecord>,
    pub weights: Vec<WeightRecord>,
    pub steering_type: Option<String>,
    pub brake_type: Option<String>,
}

impl VehicleTemplate {
    /// Template with a body and nothing attached.
    pub fn bare(body_type: impl Into<String>) -> Self {
        Self {
            body_type: body_type.into(),
            wheels: Vec::new(),
            weights: Vec::new(),
            steering_type: None,
            brake_type: None,
        }
    }
}
