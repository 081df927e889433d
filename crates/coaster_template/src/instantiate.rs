//! Template instantiation
//!
//! Reconstructs a composite from a template at a target world pose.
//! The body is the single hard precondition: if its type cannot be
//! resolved, no composite is produced at all. Attached parts with
//! unresolvable types are skipped — a vehicle missing one wheel is
//! still a meaningful result.

use crate::error::TemplateError;
use crate::template::VehicleTemplate;
use coaster_core::part::{PartKind, VehicleAssembly};
use coaster_core::registry::PartRegistry;
use glam::Mat4;

/// Instantiate a template at a target body pose.
///
/// The returned assembly is fully attached before this function
/// returns; no caller ever observes a partially attached composite.
pub fn instantiate(
    template: &VehicleTemplate,
    registry: &PartRegistry,
    pose: Mat4,
) -> Result<VehicleAssembly, TemplateError> {
    let body = registry
        .resolve(&template.body_type)
        .filter(|d| d.kind() == PartKind::Body)
        .ok_or_else(|| TemplateError::UnresolvableType {
            name: template.body_type.clone(),
        })?;
    let mut assembly = VehicleAssembly::with_body(body.build(pose));

    for record in &template.wheels {
        let Some(descriptor) = registry
            .resolve(&record.type_name)
            .filter(|d| d.kind() == PartKind::Wheel)
        else {
            tracing::warn!(name = %record.type_name, "skipping wheel with unresolvable type");
            continue;
        };
        let mut wheel = descriptor.build_wheel(pose * record.relative);
        wheel.set_steerable(record.steerable);
        wheel.set_has_brake(record.has_brake);
        assembly.attach_wheel(wheel);
    }

    for record in &template.weights {
        let Some(descriptor) = registry
            .resolve(&record.type_name)
            .filter(|d| d.kind() == PartKind::Weight)
        else {
            tracing::warn!(name = %record.type_name, "skipping weight with unresolvable type");
            continue;
        };
        assembly.attach_weight(descriptor.build(pose * record.relative));
    }

    // Steering and brake attach at the body's own pose.
    if let Some(name) = &template.steering_type {
        match registry.resolve(name).filter(|d| d.kind() == PartKind::Steering) {
            Some(descriptor) => assembly.attach_steering(descriptor.build(pose)),
            None => tracing::warn!(name = %name, "skipping steering with unresolvable type"),
        }
    }
    if let Some(name) = &template.brake_type {
        match registry.resolve(name).filter(|d| d.kind() == PartKind::Brake) {
            Some(descriptor) => assembly.attach_brake(descriptor.build(pose)),
            None => tracing::warn!(name = %name, "skipping brake with unresolvable type"),
        }
    }

    Ok(assembly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::capture;
    use crate::template::WheelRecord;
    use coaster_core::math::TRANSFORM_EPS;
    use coaster_core::part::{PartNode, Placed, WheelNode};
    use coaster_core::registry::PartDescriptor;
    use glam::{Quat, Vec3};

    fn demo_registry() -> PartRegistry {
        let mut registry = PartRegistry::new();
        for (name, kind) in [
            ("CrateBody", PartKind::Body),
            ("WoodWheel", PartKind::Wheel),
            ("CapsuleWheel", PartKind::Wheel),
            ("BarrelWeight", PartKind::Weight),
            ("TillerSteering", PartKind::Steering),
            ("DragBrake", PartKind::Brake),
        ] {
            registry.register(PartDescriptor::new(name, kind)).unwrap();
        }
        registry
    }

    fn assembled_at(pose: Mat4) -> VehicleAssembly {
        let mut assembly = VehicleAssembly::with_body(PartNode::new("CrateBody", pose));
        for (x, steerable) in [(-0.8, true), (0.8, true), (-0.8, false), (0.8, false)] {
            let z = if steerable { 1.2 } else { -1.2 };
            let local = Mat4::from_rotation_translation(
                Quat::from_rotation_z(0.1),
                Vec3::new(x, -0.3, z),
            );
            assembly.attach_wheel(WheelNode::new(
                PartNode::new("WoodWheel", pose * local),
                steerable,
                true,
            ));
        }
        assembly.attach_weight(PartNode::new(
            "BarrelWeight",
            pose * Mat4::from_translation(Vec3::new(0.0, -0.1, -0.4)),
        ));
        assembly.attach_steering(PartNode::new("TillerSteering", pose));
        assembly.attach_brake(PartNode::new("DragBrake", pose));
        assembly
    }

    #[test]
    fn capture_then_instantiate_at_same_pose_is_a_fixpoint() {
        let pose = Mat4::from_rotation_translation(
            Quat::from_rotation_y(0.4),
            Vec3::new(25.0, 3.0, -7.0),
        );
        let source = assembled_at(pose);
        let template = capture(&source).unwrap();
        let rebuilt = instantiate(&template, &demo_registry(), pose).unwrap();

        assert_eq!(rebuilt.wheels().len(), source.wheels().len());
        for (rebuilt_wheel, source_wheel) in rebuilt.wheels().iter().zip(source.wheels()) {
            assert!(rebuilt_wheel
                .world_transform()
                .abs_diff_eq(source_wheel.world_transform(), TRANSFORM_EPS));
            assert_eq!(rebuilt_wheel.is_steerable(), source_wheel.is_steerable());
            assert_eq!(rebuilt_wheel.has_brake(), source_wheel.has_brake());
        }
        for (rebuilt_weight, source_weight) in rebuilt.weights().iter().zip(source.weights()) {
            assert!(rebuilt_weight
                .world_transform()
                .abs_diff_eq(source_weight.world_transform(), TRANSFORM_EPS));
        }
    }

    #[test]
    fn relative_offsets_are_pose_independent() {
        let capture_pose = Mat4::from_translation(Vec3::new(1.0, 0.0, 2.0));
        let template = capture(&assembled_at(capture_pose)).unwrap();
        let registry = demo_registry();

        let p1 = Mat4::from_rotation_translation(Quat::from_rotation_y(1.1), Vec3::splat(40.0));
        let p2 = Mat4::from_rotation_translation(Quat::from_rotation_x(-0.3), Vec3::new(0.0, 9.0, 0.0));

        for pose in [p1, p2] {
            let spawned = instantiate(&template, &registry, pose).unwrap();
            for (wheel, record) in spawned.wheels().iter().zip(&template.wheels) {
                assert!(wheel
                    .world_transform()
                    .abs_diff_eq(pose * record.relative, TRANSFORM_EPS));
            }
        }
    }

    #[test]
    fn unresolvable_body_is_fatal() {
        let mut template = capture(&assembled_at(Mat4::IDENTITY)).unwrap();
        template.body_type = "MissingBody".to_string();
        let err = instantiate(&template, &demo_registry(), Mat4::IDENTITY).unwrap_err();
        assert!(matches!(err, TemplateError::UnresolvableType { name } if name == "MissingBody"));
    }

    #[test]
    fn unresolvable_wheel_is_skipped() {
        let mut template = capture(&assembled_at(Mat4::IDENTITY)).unwrap();
        template.wheels[1].type_name = "MissingWheel".to_string();

        let spawned = instantiate(&template, &demo_registry(), Mat4::IDENTITY).unwrap();
        assert_eq!(spawned.wheels().len(), 3);
        assert_eq!(spawned.weights().len(), 1);
        assert!(spawned.steering().is_some());
        assert!(spawned.brake().is_some());
    }

    #[test]
    fn wrong_kind_counts_as_unresolvable() {
        let template = VehicleTemplate {
            body_type: "CrateBody".to_string(),
            wheels: vec![WheelRecord {
                // weight type in a wheel slot
                type_name: "BarrelWeight".to_string(),
                steerable: false,
                has_brake: false,
                relative: Mat4::IDENTITY,
            }],
            weights: Vec::new(),
            steering_type: None,
            brake_type: None,
        };
        let spawned = instantiate(&template, &demo_registry(), Mat4::IDENTITY).unwrap();
        assert!(spawned.wheels().is_empty());
    }

    #[test]
    fn steering_and_brake_spawn_at_the_body_pose() {
        let pose = Mat4::from_translation(Vec3::new(5.0, 1.0, 5.0));
        let template = capture(&assembled_at(Mat4::from_translation(Vec3::X))).unwrap();
        let spawned = instantiate(&template, &demo_registry(), pose).unwrap();
        assert!(spawned
            .steering()
            .unwrap()
            .world_transform()
            .abs_diff_eq(pose, TRANSFORM_EPS));
        assert!(spawned
            .brake()
            .unwrap()
            .world_transform()
            .abs_diff_eq(pose, TRANSFORM_EPS));
    }
}
