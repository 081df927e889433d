//! Coaster Template Pipeline
//!
//! Captures an assembled vehicle into a portable `VehicleTemplate`,
//! persists it as a compact binary blob, and reconstructs an
//! equivalent composite at an arbitrary world placement.
//!
//! Data flow: assembly → [`capture`] → [`VehicleTemplate`] →
//! [`codec::encode`] → bytes → [`store`] or the built-in
//! [`presets`] catalog → [`codec::decode`] → [`instantiate`].

pub mod capture;
pub mod codec;
pub mod error;
pub mod instantiate;
pub mod presets;
pub mod store;
pub mod template;

pub use capture::capture;
pub use codec::{decode, encode};
pub use error::TemplateError;
pub use instantiate::instantiate;
pub use presets::{preset, preset_bytes, PRESET_COUNT};
pub use store::{load, load_bytes, save};
pub use template::{VehicleTemplate, WeightRecord, WheelRecord};
