//! Built-in preset catalog
//!
//! A fixed, indexed set of vehicle templates usable without file
//! I/O. Each preset is held in its encoded wire form (the same
//! schema the store writes to disk) and decoded on demand. Indices
//! outside the catalog yield `None`.

use crate::codec::encode;
use crate::template::{VehicleTemplate, WeightRecord, WheelRecord};
use coaster_core::part::PartKind;
use coaster_core::registry::PartDescriptor;
use glam::{Mat4, Quat, Vec3};
use once_cell::sync::Lazy;

/// Number of built-in presets.
pub const PRESET_COUNT: u8 = 4;

static PRESET_BYTES: Lazy<Vec<Vec<u8>>> = Lazy::new(|| {
    vec![
        encode(&crate_racer()),
        encode(&wash_tub()),
        encode(&plank_runner()),
        encode(&rocket_sled()),
    ]
});

/// Encoded bytes of a preset, or `None` for an unknown index.
pub fn preset_bytes(index: u8) -> Option<&'static [u8]> {
    PRESET_BYTES.get(index as usize).map(Vec::as_slice)
}

/// Decoded preset template, or `None` for an unknown index.
pub fn preset(index: u8) -> Option<VehicleTemplate> {
    let bytes = preset_bytes(index)?;
    // Presets are encoded by this crate; decoding them cannot fail.
    Some(crate::codec::decode(bytes).expect("preset bytes are well-formed"))
}

/// Descriptors for every part type the presets reference.
pub fn part_set() -> Vec<PartDescriptor> {
    [
        ("CrateBody", PartKind::Body),
        ("TubBody", PartKind::Body),
        ("PlankBody", PartKind::Body),
        ("RocketBody", PartKind::Body),
        ("WoodWheel", PartKind::Wheel),
        ("CapsuleWheel", PartKind::Wheel),
        ("ShieldWheel", PartKind::Wheel),
        ("BarrelWeight", PartKind::Weight),
        ("AnvilWeight", PartKind::Weight),
        ("TillerSteering", PartKind::Steering),
        ("DragBrake", PartKind::Brake),
    ]
    .into_iter()
    .map(|(name, kind)| PartDescriptor::new(name, kind))
    .collect()
}

fn wheel(name: &str, x: f32, z: f32, steerable: bool) -> WheelRecord {
    // Left-side wheels face outward, mirroring the right side.
    let rotation = if x < 0.0 {
        Quat::from_rotation_y(std::f32::consts::PI)
    } else {
        Quat::IDENTITY
    };
    WheelRecord {
        type_name: name.to_string(),
        steerable,
        has_brake: true,
        relative: Mat4::from_rotation_translation(rotation, Vec3::new(x, -0.35, z)),
    }
}

fn weight(name: &str, offset: Vec3) -> WeightRecord {
    WeightRecord {
        type_name: name.to_string(),
        relative: Mat4::from_translation(offset),
    }
}

fn crate_racer() -> VehicleTemplate {
    VehicleTemplate {
        body_type: "CrateBody".to_string(),
        wheels: vec![
            wheel("CapsuleWheel", -0.85, 1.25, true),
            wheel("CapsuleWheel", 0.85, 1.25, true),
            wheel("CapsuleWheel", -0.85, -1.25, false),
            wheel("CapsuleWheel", 0.85, -1.25, false),
        ],
        weights: vec![
            weight("BarrelWeight", Vec3::new(-0.4, -0.15, -0.6)),
            weight("BarrelWeight", Vec3::new(0.4, -0.15, -0.6)),
        ],
        steering_type: Some("TillerSteering".to_string()),
        brake_type: Some("DragBrake".to_string()),
    }
}

fn wash_tub() -> VehicleTemplate {
    VehicleTemplate {
        body_type: "TubBody".to_string(),
        wheels: vec![
            wheel("WoodWheel", -0.7, 0.9, true),
            wheel("WoodWheel", 0.7, 0.9, true),
            wheel("WoodWheel", -0.7, -0.9, false),
            wheel("WoodWheel", 0.7, -0.9, false),
        ],
        weights: Vec::new(),
        steering_type: Some("TillerSteering".to_string()),
        brake_type: Some("DragBrake".to_string()),
    }
}

fn plank_runner() -> VehicleTemplate {
    VehicleTemplate {
        body_type: "PlankBody".to_string(),
        wheels: vec![
            wheel("ShieldWheel", 0.0, 1.6, true),
            wheel("ShieldWheel", -0.9, -1.1, false),
            wheel("ShieldWheel", 0.9, -1.1, false),
        ],
        weights: vec![weight("AnvilWeight", Vec3::new(0.0, -0.1, -1.4))],
        steering_type: Some("TillerSteering".to_string()),
        brake_type: None,
    }
}

fn rocket_sled() -> VehicleTemplate {
    VehicleTemplate {
        body_type: "RocketBody".to_string(),
        wheels: vec![
            wheel("WoodWheel", -0.6, 0.0, false),
            wheel("WoodWheel", 0.6, 0.0, false),
        ],
        weights: vec![weight("BarrelWeight", Vec3::new(0.0, 0.2, -1.8))],
        steering_type: None,
        brake_type: None,
    }
}
