//! Transform math helpers
//!
//! Re-exports glam and adds the small set of matrix utilities the
//! template pipeline relies on. Transforms are column-vector `Mat4`s:
//! a child's world transform is `body_world * relative`.

pub use glam::*;

/// Tolerance used when comparing reconstructed transforms.
pub const TRANSFORM_EPS: f32 = 1.0e-4;

/// Invert a transform, falling back to identity for degenerate input.
///
/// Captured transforms are expected to be invertible; a near-singular
/// matrix (collapsed scale, uninitialized pose) would otherwise poison
/// every relative offset derived from it.
pub fn inverse_safe(m: Mat4) -> Mat4 {
    let det = m.determinant();
    if !det.is_finite() || det.abs() < 1.0e-8 {
        return Mat4::IDENTITY;
    }
    m.inverse()
}

/// Strip scale from a transform, keeping rotation and translation.
pub fn rotation_translation(m: Mat4) -> Mat4 {
    let (_, rotation, translation) = m.to_scale_rotation_translation();
    Mat4::from_rotation_translation(rotation, translation)
}
