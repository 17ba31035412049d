//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Journey has no legs
    #[error("journey must contain at least one leg")]
    EmptyJourney,

    /// Leg path is shorter than its mode allows
    #[error("leg path must contain at least {required} point(s), got {actual}")]
    PathTooShort { required: usize, actual: usize },
}
