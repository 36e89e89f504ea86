pub mod body_system;
pub mod encounter;
pub mod patient;

pub use body_system::BodySystem;
pub use encounter::Encounter;
pub use patient::{Patient, Sex};
