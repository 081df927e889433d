//! Minimal kinematic steering host
//!
//! A stand-in for a real physics engine: it stores joint and wheel
//! state and lets the steering controller drive it. Engine
//! integrations implement [`SteeringTarget`] the same way over their
//! own joint and rigid-body handles.

use coaster_steering::SteeringTarget;
use glam::{Mat3, Mat4, Quat, Vec3};

/// One wheel's mount, joint and body state, simulated kinematically.
pub struct KinematicWheel {
    mount_rotation: Quat,
    joint_rotation: Quat,
    joint_position: Vec3,
    joint_live: bool,
    angular_velocity: Vec3,
    wheel_rotation: Quat,
    wheel_position: Vec3,
    rebuilds: u32,
}

impl KinematicWheel {
    /// Build a wheel host from the mount's world transform.
    pub fn from_mount(world: Mat4) -> Self {
        let (_, rotation, position) = world.to_scale_rotation_translation();
        // Wheel body frame: forward/right in the spin plane, local Z
        // down the axle.
        let wheel_base = Quat::from_mat3(&Mat3::from_cols(Vec3::X, Vec3::Z, Vec3::NEG_Y));
        Self {
            mount_rotation: rotation,
            joint_rotation: rotation,
            joint_position: position,
            joint_live: true,
            angular_velocity: Vec3::ZERO,
            wheel_rotation: rotation * wheel_base,
            wheel_position: position,
            rebuilds: 0,
        }
    }

    pub fn rebuild_count(&self) -> u32 {
        self.rebuilds
    }

    pub fn wheel_position(&self) -> Vec3 {
        self.wheel_position
    }

    pub fn joint_live(&self) -> bool {
        self.joint_live
    }
}

impl SteeringTarget for KinematicWheel {
    fn mount_rotation(&self) -> Quat {
        self.mount_rotation
    }

    fn joint_right(&self) -> Vec3 {
        self.joint_rotation * Vec3::Y
    }

    fn joint_position(&self) -> Vec3 {
        self.joint_position
    }

    fn set_joint_rotation(&mut self, rotation: Quat) {
        self.joint_rotation = rotation;
    }

    fn drop_joint(&mut self) {
        self.joint_live = false;
    }

    fn init_joint(&mut self) {
        self.joint_live = true;
        self.rebuilds += 1;
    }

    fn wheel_angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    fn set_wheel_angular_velocity(&mut self, velocity: Vec3) {
        self.angular_velocity = velocity;
    }

    fn wheel_forward(&self) -> Vec3 {
        self.wheel_rotation * Vec3::X
    }

    fn wheel_right(&self) -> Vec3 {
        self.wheel_rotation * Vec3::Y
    }

    fn set_wheel_pose(&mut self, position: Vec3, rotation: Quat) {
        self.wheel_position = position;
        self.wheel_rotation = rotation;
    }
}
