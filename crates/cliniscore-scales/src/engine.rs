use std::collections::BTreeMap;

use cliniscore_core::models::{BodySystem, Patient};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::Scale;
use crate::config::EngineConfig;
use crate::selection::CriteriaByScale;
use crate::tier::{RiskTier, risk_line};
use crate::{ScoringContext, router, scale_for};

/// Scores and risk wording for the active body system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    /// Reported scales only.
    pub scores: BTreeMap<Scale, f64>,
    /// One tier per active scale, in routing order.
    pub tiers: Vec<RiskTier>,
    pub risk: String,
}

impl ScoringResult {
    pub fn score(&self, scale: Scale) -> Option<f64> {
        self.scores.get(&scale).copied()
    }

    pub fn tier(&self, scale: Scale) -> Option<&RiskTier> {
        self.tiers.iter().find(|t| t.scale == scale)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute scores for `system`. `today` fixes the year used for the
    /// patient's age so that results are reproducible.
    pub fn compute(
        &self,
        patient: &Patient,
        system: Option<BodySystem>,
        criteria: &CriteriaByScale,
        today: jiff::civil::Date,
    ) -> ScoringResult {
        let ctx = ScoringContext::new(patient, system, today);
        self.compute_with_context(&ctx, criteria)
    }

    /// Selections for scales outside the active system are ignored.
    pub fn compute_with_context(&self, ctx: &ScoringContext, criteria: &CriteriaByScale) -> ScoringResult {
        let active = router::route(ctx.system);
        let mut scores = BTreeMap::new();
        let mut tiers = Vec::with_capacity(active.len());

        for &scale in active {
            let implementation = scale_for(scale);
            let selection = criteria.get(scale);
            let score = implementation.score(selection, ctx);
            let reported = implementation.is_reported(selection, ctx);
            debug!(scale = %scale, score, reported, "scale computed");

            if reported {
                scores.insert(scale, score);
            }
            tiers.push(implementation.classify(score, self.config.locale));
        }

        let risk = risk_line(&tiers, self.config.locale);
        ScoringResult {
            scores,
            tiers,
            risk,
        }
    }
}

/// Compute scores with the default (English) configuration.
pub fn compute_scores(
    patient: &Patient,
    system: Option<BodySystem>,
    criteria: &CriteriaByScale,
    today: jiff::civil::Date,
) -> ScoringResult {
    ScoringEngine::default().compute(patient, system, criteria, today)
}
