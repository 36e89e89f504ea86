use cliniscore_core::models::BodySystem;
use thiserror::Error;

use crate::catalog::Scale;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("unknown criterion '{criterion_id}' for scale '{scale}'")]
    UnknownCriterion { scale: Scale, criterion_id: String },

    #[error("criterion '{criterion_id}' of scale '{scale}' is derived from patient data")]
    DerivedCriterion { scale: Scale, criterion_id: String },

    #[error("criterion '{criterion_id}' of scale '{scale}' expects a {expected} value")]
    ValueKindMismatch {
        scale: Scale,
        criterion_id: String,
        expected: &'static str,
    },

    #[error("unknown option '{value}' for criterion '{criterion_id}' of scale '{scale}'")]
    UnknownOption {
        scale: Scale,
        criterion_id: String,
        value: String,
    },

    #[error("scale '{scale}' is not active for body system {system:?}")]
    InactiveScale {
        scale: Scale,
        system: Option<BodySystem>,
    },
}
