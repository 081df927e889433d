//! Template capture
//!
//! Walks an assembled vehicle and records each attached part's type
//! name and its placement relative to the body. Capture is read-only
//! with respect to the source assembly.

use crate::error::TemplateError;
use crate::template::{VehicleTemplate, WeightRecord, WheelRecord};
use coaster_core::math::{inverse_safe, rotation_translation};
use coaster_core::part::{Placed, VehicleAssembly};

/// Capture an assembly into a portable template.
///
/// Fails with [`TemplateError::IncompleteSource`] when the assembly
/// has no body. Relative transforms are rotation+translation only;
/// any scale on the source transforms is discarded. Steering and
/// brake units record their type name alone — they are re-attached
/// at the body's pose, not at a captured offset.
pub fn capture(assembly: &VehicleAssembly) -> Result<VehicleTemplate, TemplateError> {
    let body = assembly.body().ok_or(TemplateError::IncompleteSource)?;
    let body_inverse = inverse_safe(rotation_translation(body.world_transform()));

    let wheels = assembly
        .wheels()
        .iter()
        .map(|wheel| WheelRecord {
            type_name: wheel.type_name().to_string(),
            steerable: wheel.is_steerable(),
            has_brake: wheel.has_brake(),
            relative: body_inverse * rotation_translation(wheel.world_transform()),
        })
        .collect();

    let weights = assembly
        .weights()
        .iter()
        .map(|weight| WeightRecord {
            type_name: weight.type_name().to_string(),
            relative: body_inverse * rotation_translation(weight.world_transform()),
        })
        .collect();

    let template = VehicleTemplate {
        body_type: body.type_name().to_string(),
        wheels,
        weights,
        steering_type: assembly.steering().map(|s| s.type_name().to_string()),
        brake_type: assembly.brake().map(|b| b.type_name().to_string()),
    };

    tracing::debug!(
        body = %template.body_type,
        wheels = template.wheels.len(),
        weights = template.weights.len(),
        "captured vehicle template"
    );
    Ok(template)
}
