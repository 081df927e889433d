//! Steering-mount reorientation controller
//!
//! Two logical states per wheel: Settled (mount matches the last
//! applied command) and Reorienting (the command moved by at least
//! the threshold). A full Settled → Reorienting → Settled pass runs
//! inside one `step` call. Orientation is applied every step for
//! smooth sub-threshold tracking; the joint is only torn down and
//! reinitialized once the command crosses the threshold, which stops
//! the joint from thrashing while the wheel is static.

use crate::target::SteeringTarget;
use glam::{Mat3, Quat, Vec3};

/// Minimum command delta (degrees) that justifies a joint rebuild.
pub const REORIENT_THRESHOLD_DEG: f32 = 0.25;

/// Per-wheel steering state, bound 1:1 to one wheel's mount.
///
/// Created when the mount is initialized, mutated only by [`step`].
///
/// [`step`]: SteeringController::step
#[derive(Debug, Clone, Default)]
pub struct SteeringController {
    current_angle_deg: f32,
}

impl SteeringController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied steering angle in degrees. Sub-threshold commands
    /// do not move this baseline, so small commands accumulate until
    /// they cross the threshold.
    pub fn current_angle_deg(&self) -> f32 {
        self.current_angle_deg
    }

    /// Run one control step for a commanded steering angle.
    ///
    /// `None` means the mount or the wheel is gone; steering is
    /// best-effort per frame and never fatal, so that is a silent
    /// no-op.
    pub fn step<T: SteeringTarget>(&mut self, target: Option<&mut T>, commanded_deg: f32) {
        let Some(target) = target else {
            return;
        };

        let rebuild = (commanded_deg - self.current_angle_deg).abs() >= REORIENT_THRESHOLD_DEG;

        // Destroy the old joint so the wheel can be rotated freely.
        if rebuild {
            target.drop_joint();
        }

        // Snapshot spin and the pre-reorientation lateral axis.
        let angular = target.wheel_angular_velocity();
        let spin_speed = angular.length();
        let old_right = target.joint_right();

        // New joint frame: the mount's forward and right axes yawed
        // about its vertical axis; the vertical axis is invariant.
        let base = target.mount_rotation();
        let up = base * Vec3::Z;
        let yaw = Quat::from_axis_angle(up, commanded_deg.to_radians());
        let forward = yaw * (base * Vec3::X);
        let right = yaw * (base * Vec3::Y);
        target.set_joint_rotation(Quat::from_mat3(&Mat3::from_cols(forward, right, up)));

        // Remap spin into the new frame instead of letting the solver
        // reinterpret a now-misaligned vector.
        let spin_axis = if old_right.dot(angular) < 0.0 {
            -right
        } else {
            right
        };
        let new_angular = spin_axis.normalize_or_zero() * spin_speed;

        // Rebuild the wheel's visual frame with any drift along the
        // axle projected out.
        let wheel_forward = target.wheel_forward().reject_from(right);
        let wheel_right = target.wheel_right().reject_from(right);
        let wheel_rotation = if wheel_forward.length_squared() > 1.0e-8
            && wheel_right.length_squared() > 1.0e-8
        {
            let x = wheel_forward.normalize();
            let y = wheel_right.normalize();
            Some(Quat::from_mat3(&Mat3::from_cols(x, y, x.cross(y))))
        } else {
            tracing::trace!("degenerate wheel frame, pose left unchanged");
            None
        };

        // Nullify spin before moving the wheel to prevent a pop from
        // stale velocity interacting with the new pose.
        let anchor = target.joint_position();
        target.set_wheel_angular_velocity(Vec3::ZERO);
        if let Some(rotation) = wheel_rotation {
            target.set_wheel_pose(anchor, rotation);
        }

        // Reactivate the joint at the new orientation.
        if rebuild {
            target.init_joint();
        }

        target.set_wheel_angular_velocity(new_angular);

        if rebuild {
            tracing::trace!(commanded_deg, "steering joint rebuilt");
            self.current_angle_deg = commanded_deg;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTarget {
        mount_rotation: Quat,
        joint_rotation: Quat,
        joint_position: Vec3,
        angular_velocity: Vec3,
        wheel_rotation: Quat,
        wheel_position: Vec3,
        drops: usize,
        inits: usize,
        velocity_writes: Vec<Vec3>,
    }

    impl MockTarget {
        /// Wheel at rest under an identity mount: axle along +Y, the
        /// wheel body's Z axis pointing down the axle.
        fn new() -> Self {
            let wheel_rotation =
                Quat::from_mat3(&Mat3::from_cols(Vec3::X, Vec3::Z, Vec3::NEG_Y));
            Self {
                mount_rotation: Quat::IDENTITY,
                joint_rotation: Quat::IDENTITY,
                joint_position: Vec3::new(0.8, -0.35, 1.25),
                angular_velocity: Vec3::ZERO,
                wheel_rotation,
                wheel_position: Vec3::ZERO,
                drops: 0,
                inits: 0,
                velocity_writes: Vec::new(),
            }
        }
    }

    impl SteeringTarget for MockTarget {
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
            self.drops += 1;
        }
        fn init_joint(&mut self) {
            self.inits += 1;
        }
        fn wheel_angular_velocity(&self) -> Vec3 {
            self.angular_velocity
        }
        fn set_wheel_angular_velocity(&mut self, velocity: Vec3) {
            self.angular_velocity = velocity;
            self.velocity_writes.push(velocity);
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

    #[test]
    fn sub_threshold_commands_track_without_rebuilding() {
        let mut controller = SteeringController::new();
        let mut target = MockTarget::new();

        controller.step(Some(&mut target), 0.1);

        assert_eq!(target.drops, 0);
        assert_eq!(target.inits, 0);
        assert_eq!(controller.current_angle_deg(), 0.0);
        // orientation still applied for smooth tracking
        let expected = Quat::from_rotation_z(0.1f32.to_radians());
        assert!(target.joint_rotation.angle_between(expected) < 1.0e-4);
    }

    #[test]
    fn threshold_command_rebuilds_joint_once() {
        let mut controller = SteeringController::new();
        let mut target = MockTarget::new();

        controller.step(Some(&mut target), 5.0);

        assert_eq!(target.drops, 1);
        assert_eq!(target.inits, 1);
        assert_eq!(controller.current_angle_deg(), 5.0);

        // steady command afterwards leaves the joint alone
        controller.step(Some(&mut target), 5.0);
        assert_eq!(target.drops, 1);
        assert_eq!(target.inits, 1);
    }

    #[test]
    fn small_commands_accumulate_against_the_baseline() {
        let mut controller = SteeringController::new();
        let mut target = MockTarget::new();

        controller.step(Some(&mut target), 0.1);
        controller.step(Some(&mut target), 0.2);
        assert_eq!(target.drops, 0);

        controller.step(Some(&mut target), 0.3);
        assert_eq!(target.drops, 1);
        assert_eq!(controller.current_angle_deg(), 0.3);
    }

    #[test]
    fn spin_speed_survives_reorientation() {
        let mut controller = SteeringController::new();
        let mut target = MockTarget::new();
        target.angular_velocity = Vec3::new(0.0, -12.0, 0.0);

        controller.step(Some(&mut target), 30.0);

        let after = target.angular_velocity;
        assert!((after.length() - 12.0).abs() < 1.0e-4);
        // spin stays on the negative side of the new lateral axis
        let new_right = target.joint_rotation * Vec3::Y;
        assert!(after.dot(new_right) < 0.0);
        assert!(after.normalize().abs_diff_eq(-new_right, 1.0e-4));
    }

    #[test]
    fn spin_is_zeroed_before_the_pose_is_applied() {
        let mut controller = SteeringController::new();
        let mut target = MockTarget::new();
        target.angular_velocity = Vec3::new(0.0, 7.5, 0.0);

        controller.step(Some(&mut target), 10.0);

        assert_eq!(target.velocity_writes.len(), 2);
        assert_eq!(target.velocity_writes[0], Vec3::ZERO);
        assert!((target.velocity_writes[1].length() - 7.5).abs() < 1.0e-4);
    }

    #[test]
    fn wheel_snaps_to_the_joint_anchor_with_an_orthonormal_frame() {
        let mut controller = SteeringController::new();
        let mut target = MockTarget::new();

        controller.step(Some(&mut target), 15.0);

        assert_eq!(target.wheel_position, target.joint_position);
        let new_right = target.joint_rotation * Vec3::Y;
        // the wheel's spin-plane axes end up perpendicular to the axle
        assert!(target.wheel_forward().dot(new_right).abs() < 1.0e-4);
        assert!(target.wheel_right().dot(new_right).abs() < 1.0e-4);
        assert!((target.wheel_rotation.length() - 1.0).abs() < 1.0e-4);
    }

    #[test]
    fn vertical_axis_is_invariant_under_steering() {
        let mut controller = SteeringController::new();
        let mut target = MockTarget::new();
        target.mount_rotation = Quat::from_rotation_x(0.3);
        target.joint_rotation = target.mount_rotation;

        let up_before = target.mount_rotation * Vec3::Z;
        controller.step(Some(&mut target), 20.0);
        let up_after = target.joint_rotation * Vec3::Z;
        assert!(up_after.abs_diff_eq(up_before, 1.0e-4));
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let mut controller = SteeringController::new();
        controller.step(None::<&mut MockTarget>, 90.0);
        assert_eq!(controller.current_angle_deg(), 0.0);
    }
}
