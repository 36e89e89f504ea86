//! cliniscore-scales
//!
//! Bedside risk scores computed from checklist answers. Pure and synchronous:
//! no I/O, no shared state. Defines the criteria of each supported scale, the
//! body-system routing table, score aggregation, and the risk wording that is
//! published into the encounter record.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod publish;
pub mod router;
pub mod scales;
pub mod selection;
pub mod session;
pub mod tier;

use cliniscore_core::models::{BodySystem, Patient, Sex};

use catalog::{Criterion, CriterionKind, Scale};
use selection::{CriteriaSelection, CriterionValue};
use tier::{Locale, RiskTier};

pub use engine::{ScoringEngine, ScoringResult, compute_scores};

/// Patient facts a scale may read besides its own criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContext {
    /// Whole years; 0 when unknown.
    pub age: u32,
    pub sex: Sex,
    pub system: Option<BodySystem>,
}

impl ScoringContext {
    pub fn new(patient: &Patient, system: Option<BodySystem>, today: jiff::civil::Date) -> Self {
        Self {
            age: patient.age_on(today),
            sex: patient.sex,
            system,
        }
    }
}

/// Trait implemented by each clinical risk scale.
pub trait RiskScale: Send + Sync {
    fn scale(&self) -> Scale;

    /// Published name (e.g., "CURB-65").
    fn name(&self) -> &str {
        self.scale().name()
    }

    /// The scale's criteria in display order.
    fn criteria(&self) -> &[Criterion];

    /// Aggregate the selection into a score. Defaults to a plain sum.
    fn score(&self, selection: &CriteriaSelection, _ctx: &ScoringContext) -> f64 {
        sum_points(self.criteria(), selection)
    }

    /// Map a score to its risk tier.
    fn classify(&self, score: f64, locale: Locale) -> RiskTier;

    /// Whether the score belongs in the published score map.
    fn is_reported(&self, selection: &CriteriaSelection, _ctx: &ScoringContext) -> bool {
        selection.is_touched()
    }

    /// Whether recording `value` marks the scale as touched.
    fn counts_as_interaction(&self, _criterion_id: &str, _value: &CriterionValue) -> bool {
        true
    }

    fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria().iter().find(|c| c.id == id)
    }
}

/// Sum checked flags and selected options. Derived criteria, unknown ids
/// and unknown option values contribute nothing.
pub fn sum_points(criteria: &[Criterion], selection: &CriteriaSelection) -> f64 {
    criteria
        .iter()
        .map(|criterion| match &criterion.kind {
            CriterionKind::Flag { points } if selection.flag(&criterion.id) => *points,
            CriterionKind::Choice { .. } => selection
                .choice(&criterion.id)
                .and_then(|value| criterion.kind.option(value))
                .map_or(0.0, |option| option.points),
            _ => 0.0,
        })
        .sum()
}

/// Score a single scale regardless of routing.
pub fn aggregate(scale: Scale, selection: &CriteriaSelection, ctx: &ScoringContext) -> f64 {
    scale_for(scale).score(selection, ctx)
}

/// The implementation behind a [`Scale`].
pub fn scale_for(scale: Scale) -> &'static dyn RiskScale {
    match scale {
        Scale::Curb65 => &scales::curb65::Curb65,
        Scale::Qsofa => &scales::qsofa::Qsofa,
        Scale::ChadsVasc => &scales::chads_vasc::ChadsVasc,
        Scale::Alvarado => &scales::alvarado::Alvarado,
        Scale::Abcd2 => &scales::abcd2::Abcd2,
        Scale::WellsPe => &scales::wells_pe::WellsPe,
        Scale::Centor => &scales::centor::Centor,
    }
}

/// Return all registered scales.
pub fn all_scales() -> Vec<&'static dyn RiskScale> {
    Scale::ALL.into_iter().map(scale_for).collect()
}

/// Look up a scale by snake_case id or published name.
pub fn get_scale(id: &str) -> Option<&'static dyn RiskScale> {
    id.parse::<Scale>().ok().map(scale_for)
}
