//! Hand-off of engine output to the encounter record and to prompt text.

use cliniscore_core::models::{BodySystem, Encounter};

use crate::engine::ScoringResult;
use crate::tier::{Locale, UNDETERMINED};

/// Replace the encounter's scores and risk line with `result`.
pub fn publish(encounter: &mut Encounter, result: &ScoringResult) {
    encounter.scores = result
        .scores
        .iter()
        .map(|(scale, score)| (scale.name().to_string(), *score))
        .collect();
    encounter.risk = Some(result.risk.clone());
}

/// Remove any published scores and risk line.
pub fn clear(encounter: &mut Encounter) {
    encounter.scores.clear();
    encounter.risk = None;
}

/// Record a body-system switch: stale output is cleared before the fresh
/// result for the new system is published.
pub fn switch_system(encounter: &mut Encounter, system: Option<BodySystem>, result: &ScoringResult) {
    clear(encounter);
    encounter.system = system;
    publish(encounter, result);
}

/// Format published scores for inclusion in a text-generation prompt.
pub fn prompt_context(encounter: &Encounter, locale: Locale) -> String {
    let scores = serde_json::Value::Object(
        encounter
            .scores
            .iter()
            .map(|(name, score)| (name.clone(), serde_json::Value::from(*score)))
            .collect(),
    );
    let risk = encounter
        .risk
        .as_deref()
        .unwrap_or_else(|| UNDETERMINED.get(locale));

    match locale {
        Locale::En => format!("- Calculated scale scores: {scores}\n- Risk level from scales: {risk}\n"),
        Locale::Vi => {
            format!("- Điểm thang đo đã tính: {scores}\n- Mức độ nguy cơ từ thang điểm: {risk}\n")
        }
    }
}
