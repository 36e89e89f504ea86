use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::BodySystem;

/// A single visit. Scores and the risk line are written here by the
/// scoring engine's publisher and persisted by the surrounding workflow.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Encounter {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub created_at: jiff::Timestamp,
    pub system: Option<BodySystem>,
    /// Published scale name -> score.
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    pub risk: Option<String>,
}

impl Encounter {
    pub fn new(patient_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            created_at: jiff::Timestamp::now(),
            system: None,
            scores: BTreeMap::new(),
            risk: None,
        }
    }
}
