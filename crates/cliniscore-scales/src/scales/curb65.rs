use cliniscore_core::models::BodySystem;

use crate::catalog::{Criterion, CriterionKind, Scale};
use crate::selection::CriteriaSelection;
use crate::tier::{Locale, Localized, RiskLevel, RiskTier};
use crate::{RiskScale, ScoringContext, sum_points};

/// CURB-65: community-acquired pneumonia severity.
/// Four bedside findings at 1 point each, plus 1 point for age >= 65 taken
/// from the patient record. Total 0–5.
pub struct Curb65;

const AGE_CRITERION: &str = "age_65";
const AGE_THRESHOLD: u32 = 65;

const LOW: Localized = Localized::new("Low (outpatient)", "Thấp (Ngoại trú)");
const MODERATE: Localized = Localized::new(
    "Moderate (consider admission)",
    "Trung bình (Cân nhắc nhập viện)",
);
const HIGH: Localized = Localized::new("High (admit)", "Cao (Nhập viện)");

impl RiskScale for Curb65 {
    fn scale(&self) -> Scale {
        Scale::Curb65
    }

    fn criteria(&self) -> &[Criterion] {
        static CRITERIA: std::sync::LazyLock<Vec<Criterion>> = std::sync::LazyLock::new(|| {
            vec![
                Criterion::flag("confusion", "Confusion", 1.0),
                Criterion::flag("urea", "Urea > 7 mmol/L", 1.0),
                Criterion::flag("respiratory_rate", "Respiratory rate >= 30/min", 1.0),
                Criterion::flag(
                    "blood_pressure",
                    "Low blood pressure (SBP < 90 or DBP <= 60 mmHg)",
                    1.0,
                ),
                Criterion::derived(AGE_CRITERION, "Age >= 65", 1.0),
            ]
        });
        &CRITERIA
    }

    /// Any explicit entry for the age criterion is ignored; the point comes
    /// from the patient's age alone.
    fn score(&self, selection: &CriteriaSelection, ctx: &ScoringContext) -> f64 {
        let age_points = match self.criterion(AGE_CRITERION).map(|c| &c.kind) {
            Some(CriterionKind::Derived { points }) if ctx.age >= AGE_THRESHOLD => *points,
            _ => 0.0,
        };
        sum_points(self.criteria(), selection) + age_points
    }

    fn classify(&self, score: f64, locale: Locale) -> RiskTier {
        let (level, wording) = if score >= 3.0 {
            (RiskLevel::High, HIGH)
        } else if score >= 2.0 {
            (RiskLevel::Moderate, MODERATE)
        } else {
            (RiskLevel::Low, LOW)
        };
        RiskTier::new(self.scale(), level, wording.get(locale))
    }

    /// Shown by default on a respiratory encounter once the age is known.
    fn is_reported(&self, selection: &CriteriaSelection, ctx: &ScoringContext) -> bool {
        selection.is_touched() || (ctx.system == Some(BodySystem::Respiratory) && ctx.age > 0)
    }
}
