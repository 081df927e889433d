//! Coaster Runtime
//!
//! Minimal binary that wires the template pipeline and the steering
//! controller together: spawn a preset vehicle, round-trip it through
//! the store, then steer its front wheels for a few steps against a
//! kinematic host.

mod host;
mod settings;

use anyhow::Result;
use coaster_core::part::Placed;
use coaster_core::registry::PartRegistry;
use coaster_steering::SteeringController;
use coaster_template::{instantiate, load, presets, save};
use glam::{Mat4, Vec3};
use host::KinematicWheel;
use settings::Settings;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Coaster v{}", coaster_core::VERSION);
    let settings = Settings::load_or_default(Path::new("coaster.json"));

    let mut registry = PartRegistry::new();
    for descriptor in presets::part_set() {
        registry.register(descriptor)?;
    }

    let Some(template) = presets::preset(settings.preset_index) else {
        tracing::warn!(index = settings.preset_index, "unknown preset index, nothing to spawn");
        return Ok(());
    };

    let pose = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0));
    let vehicle = instantiate(&template, &registry, pose)?;
    tracing::info!(
        body = %template.body_type,
        parts = vehicle.part_count(),
        "spawned preset vehicle"
    );

    // Persistence round trip through the store.
    let path = PathBuf::from(&settings.template_path);
    save(&template, &path)?;
    let reloaded = load(&path)?;
    anyhow::ensure!(reloaded == template, "reloaded template differs from saved one");
    tracing::info!(path = %path.display(), "template survived a save/load round trip");

    // Steer every steerable wheel with a slow weave.
    let mut mounts: Vec<(KinematicWheel, SteeringController)> = vehicle
        .wheels()
        .iter()
        .filter(|wheel| wheel.is_steerable())
        .map(|wheel| {
            (
                KinematicWheel::from_mount(wheel.world_transform()),
                SteeringController::new(),
            )
        })
        .collect();

    for step in 0..settings.steering_demo_steps {
        let commanded = 12.0 * (step as f32 * 0.05).sin();
        for (wheel, controller) in &mut mounts {
            controller.step(Some(wheel), commanded);
        }
    }

    for (wheel, controller) in &mounts {
        tracing::info!(
            angle = controller.current_angle_deg(),
            rebuilds = wheel.rebuild_count(),
            "steering demo wheel settled"
        );
    }

    Ok(())
}
