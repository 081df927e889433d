//! Physics-host seam for one steerable wheel
//!
//! The controller is world-agnostic: engine integrations implement
//! this trait over their joint and rigid-body handles, in the same
//! spirit as a vehicle MVP that reads and writes chassis state
//! through host callbacks.

use glam::{Quat, Vec3};

/// Host-side access to one wheel's mount, joint and rigid body.
///
/// Axis conventions: the mount frame is X-forward, Y-right (the
/// axle/lateral axis), Z-up. The wheel body's forward and right axes
/// lie in its spin plane, perpendicular to the axle.
pub trait SteeringTarget {
    /// Rotation of the un-steered mount reference frame fixed to the
    /// body. Invariant under steering.
    fn mount_rotation(&self) -> Quat;

    /// Current lateral (right) axis of the physical joint.
    fn joint_right(&self) -> Vec3;

    /// World position of the joint anchor.
    fn joint_position(&self) -> Vec3;

    /// Reorient the physical joint frame.
    fn set_joint_rotation(&mut self, rotation: Quat);

    /// Tear down the joint so the wheel can be reoriented freely.
    fn drop_joint(&mut self);

    /// Reinitialize the joint at its current orientation.
    fn init_joint(&mut self);

    fn wheel_angular_velocity(&self) -> Vec3;

    fn set_wheel_angular_velocity(&mut self, velocity: Vec3);

    /// Wheel body's forward axis (in the spin plane).
    fn wheel_forward(&self) -> Vec3;

    /// Wheel body's right axis (in the spin plane).
    fn wheel_right(&self) -> Vec3;

    /// Teleport the wheel body to a new pose.
    fn set_wheel_pose(&mut self, position: Vec3, rotation: Quat);
}
