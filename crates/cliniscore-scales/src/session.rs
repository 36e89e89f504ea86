//! Encounter-scoped scoring state with explicit transitions.
//!
//! The engine itself is stateless; a session owns the inputs of one
//! encounter and recomputes after every transition. Changing the body
//! system is a single transition that also discards every recorded answer,
//! so answers given for one system never leak into another.

use cliniscore_core::models::{BodySystem, Patient};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

use crate::catalog::Scale;
use crate::engine::{ScoringEngine, ScoringResult};
use crate::error::ScaleError;
use crate::router;
use crate::selection::{self, CriteriaByScale, CriterionValue};

/// A state change requested by the intake form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "action", rename_all = "snake_case")]
#[ts(export)]
pub enum SessionAction {
    SelectSystem {
        system: Option<BodySystem>,
    },
    SetCriterion {
        scale: Scale,
        criterion_id: String,
        value: CriterionValue,
    },
    SetPatient {
        patient: Patient,
    },
}

#[derive(Debug, Clone)]
pub struct ScoringSession {
    engine: ScoringEngine,
    patient: Patient,
    today: jiff::civil::Date,
    system: Option<BodySystem>,
    criteria: CriteriaByScale,
    result: ScoringResult,
}

impl ScoringSession {
    pub fn new(engine: ScoringEngine, patient: Patient, today: jiff::civil::Date) -> Self {
        let criteria = CriteriaByScale::new();
        let result = engine.compute(&patient, None, &criteria, today);
        Self {
            engine,
            patient,
            today,
            system: None,
            criteria,
            result,
        }
    }

    pub fn system(&self) -> Option<BodySystem> {
        self.system
    }

    pub fn criteria(&self) -> &CriteriaByScale {
        &self.criteria
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn result(&self) -> &ScoringResult {
        &self.result
    }

    /// Switch body system, resetting every scale's answers.
    pub fn select_system(&mut self, system: Option<BodySystem>) -> &ScoringResult {
        info!(from = ?self.system, to = ?system, "body system changed, criteria reset");
        self.system = system;
        self.criteria.reset();
        self.recompute()
    }

    /// Record one answer for a scale that is active for the current system.
    pub fn set_criterion(
        &mut self,
        scale: Scale,
        criterion_id: &str,
        value: CriterionValue,
    ) -> Result<&ScoringResult, ScaleError> {
        if !router::is_active(scale, self.system) {
            warn!(%scale, system = ?self.system, "criterion rejected for inactive scale");
            return Err(ScaleError::InactiveScale {
                scale,
                system: self.system,
            });
        }
        if let Err(err) = selection::validate(scale, criterion_id, &value) {
            warn!(%scale, criterion_id, error = %err, "criterion rejected");
            return Err(err);
        }

        self.criteria.set(scale, criterion_id, value);
        Ok(self.recompute())
    }

    /// Replace the patient; recorded answers are kept.
    pub fn set_patient(&mut self, patient: Patient) -> &ScoringResult {
        self.patient = patient;
        self.recompute()
    }

    pub fn apply(&mut self, action: SessionAction) -> Result<&ScoringResult, ScaleError> {
        match action {
            SessionAction::SelectSystem { system } => Ok(self.select_system(system)),
            SessionAction::SetCriterion {
                scale,
                criterion_id,
                value,
            } => self.set_criterion(scale, &criterion_id, value),
            SessionAction::SetPatient { patient } => Ok(self.set_patient(patient)),
        }
    }

    fn recompute(&mut self) -> &ScoringResult {
        self.result = self
            .engine
            .compute(&self.patient, self.system, &self.criteria, self.today);
        &self.result
    }
}
