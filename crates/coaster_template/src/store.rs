//! Template persistence
//!
//! Thin pass-throughs over the codec plus `std::fs`. The store owns
//! the on-disk contract only; it adds nothing to the byte layout.

use crate::codec::{decode, encode};
use crate::error::TemplateError;
use crate::template::VehicleTemplate;
use std::path::Path;

/// Encode and write a template to `path`.
pub fn save(template: &VehicleTemplate, path: &Path) -> Result<(), TemplateError> {
    std::fs::write(path, encode(template))?;
    tracing::info!(path = %path.display(), "saved vehicle template");
    Ok(())
}

/// Read and decode a template from `path`.
pub fn load(path: &Path) -> Result<VehicleTemplate, TemplateError> {
    let bytes = std::fs::read(path)?;
    load_bytes(&bytes)
}

/// Decode a template from an in-memory byte buffer.
pub fn load_bytes(bytes: &[u8]) -> Result<VehicleTemplate, TemplateError> {
    decode(bytes)
}
