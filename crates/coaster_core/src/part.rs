//! Composite part model
//!
//! A vehicle is a body plus attached parts (wheels, weights, a
//! steering unit, a brake unit) treated as one logical composite.
//! Parts here are placement records, not simulated bodies: the
//! physics engine owns the rigid bodies and joints behind them.

use glam::Mat4;

/// The part kinds a composite can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PartKind {
    Body,
    Wheel,
    Weight,
    Steering,
    Brake,
}

/// Minimal placement capability: anything that sits somewhere in the
/// world. Capture depends on this contract, not on concrete parts.
pub trait Placed {
    fn world_transform(&self) -> Mat4;
}

/// One placed part instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PartNode {
    type_name: String,
    world: Mat4,
}

impl PartNode {
    pub fn new(type_name: impl Into<String>, world: Mat4) -> Self {
        Self {
            type_name: type_name.into(),
            world,
        }
    }

    /// Stable type name as registered with the part registry.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn set_world_transform(&mut self, world: Mat4) {
        self.world = world;
    }
}

impl Placed for PartNode {
    fn world_transform(&self) -> Mat4 {
        self.world
    }
}

/// A wheel part: placement plus the two per-wheel flags.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelNode {
    part: PartNode,
    steerable: bool,
    has_brake: bool,
}

impl WheelNode {
    pub fn new(part: PartNode, steerable: bool, has_brake: bool) -> Self {
        Self {
            part,
            steerable,
            has_brake,
        }
    }

    pub fn part(&self) -> &PartNode {
        &self.part
    }

    pub fn type_name(&self) -> &str {
        self.part.type_name()
    }

    pub fn is_steerable(&self) -> bool {
        self.steerable
    }

    pub fn has_brake(&self) -> bool {
        self.has_brake
    }

    pub fn set_steerable(&mut self, steerable: bool) {
        self.steerable = steerable;
    }

    pub fn set_has_brake(&mut self, has_brake: bool) {
        self.has_brake = has_brake;
    }
}

impl Placed for WheelNode {
    fn world_transform(&self) -> Mat4 {
        self.part.world_transform()
    }
}

/// The composite: a body and everything attached to it.
///
/// Wheels and weights keep their attachment order; the order carries
/// no meaning beyond reproducibility of capture output. A body is
/// optional while the vehicle is being assembled — capture rejects
/// bodyless assemblies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleAssembly {
    body: Option<PartNode>,
    wheels: Vec<WheelNode>,
    weights: Vec<PartNode>,
    steering: Option<PartNode>,
    brake: Option<PartNode>,
}

impl VehicleAssembly {
    /// Empty assembly with no body yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembly built around an existing body part.
    pub fn with_body(body: PartNode) -> Self {
        Self {
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn set_body(&mut self, body: PartNode) {
        self.body = Some(body);
    }

    pub fn body(&self) -> Option<&PartNode> {
        self.body.as_ref()
    }

    pub fn attach_wheel(&mut self, wheel: WheelNode) {
        self.wheels.push(wheel);
    }

    pub fn attach_weight(&mut self, weight: PartNode) {
        self.weights.push(weight);
    }

    pub fn attach_steering(&mut self, steering: PartNode) {
        self.steering = Some(steering);
    }

    pub fn attach_brake(&mut self, brake: PartNode) {
        self.brake = Some(brake);
    }

    pub fn wheels(&self) -> &[WheelNode] {
        &self.wheels
    }

    pub fn wheels_mut(&mut self) -> &mut [WheelNode] {
        &mut self.wheels
    }

    pub fn weights(&self) -> &[PartNode] {
        &self.weights
    }

    pub fn steering(&self) -> Option<&PartNode> {
        self.steering.as_ref()
    }

    pub fn brake(&self) -> Option<&PartNode> {
        self.brake.as_ref()
    }

    /// Total number of attached parts, body included.
    pub fn part_count(&self) -> usize {
        self.body.is_some() as usize
            + self.wheels.len()
            + self.weights.len()
            + self.steering.is_some() as usize
            + self.brake.is_some() as usize
    }
}
