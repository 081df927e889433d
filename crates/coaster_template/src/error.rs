//! Template pipeline errors

use thiserror::Error;

/// Errors surfaced by capture, codec, instantiation and the store.
///
/// None of these are retried internally; every failure is surfaced to
/// the caller for a decision.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Capture was called on an assembly with no body part.
    #[error("capture source has no body part")]
    IncompleteSource,

    /// Decode hit an inconsistent or truncated byte stream. No
    /// partial template is ever returned.
    #[error("malformed template archive at byte {offset}: {what}")]
    Malformed { offset: usize, what: &'static str },

    /// A type name could not be resolved by the part registry. Fatal
    /// for the body, non-fatal (skip) for attached parts.
    #[error("part type '{name}' cannot be resolved")]
    UnresolvableType { name: String },

    /// The persistence layer could not read or write.
    #[error("template i/o failed")]
    Io(#[from] std::io::Error),
}
