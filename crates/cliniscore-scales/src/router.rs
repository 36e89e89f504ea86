use cliniscore_core::models::BodySystem;

use crate::catalog::Scale;

const CARDIOPULMONARY: &[Scale] = &[Scale::Curb65, Scale::WellsPe];
const INFECTION: &[Scale] = &[Scale::Qsofa];
const GASTROINTESTINAL: &[Scale] = &[Scale::Alvarado];
const NEUROLOGICAL: &[Scale] = &[Scale::Abcd2];
const ENT: &[Scale] = &[Scale::Centor];
const NONE: &[Scale] = &[];

/// Scales that apply to a body system, in the order their risk clauses are
/// published. `None` and `Other` have no scales.
pub fn route(system: Option<BodySystem>) -> &'static [Scale] {
    match system {
        Some(BodySystem::Respiratory | BodySystem::Cardiovascular) => CARDIOPULMONARY,
        Some(BodySystem::Infection) => INFECTION,
        Some(BodySystem::Gastrointestinal) => GASTROINTESTINAL,
        Some(BodySystem::Neurological) => NEUROLOGICAL,
        Some(BodySystem::Ent) => ENT,
        Some(BodySystem::Other) | None => NONE,
    }
}

pub fn is_active(scale: Scale, system: Option<BodySystem>) -> bool {
    route(system).contains(&scale)
}
