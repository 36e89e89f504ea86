//! cliniscore-core
//!
//! Pure encounter vocabulary shared by the scoring engine and its callers:
//! patients, body-system categories, and the encounter record that scores
//! are published into. No scoring logic lives here.

pub mod error;
pub mod models;
