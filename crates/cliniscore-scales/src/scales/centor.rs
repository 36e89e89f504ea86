use crate::catalog::{Criterion, Scale};
use crate::selection::CriteriaSelection;
use crate::tier::{Locale, Localized, RiskLevel, RiskTier};
use crate::{RiskScale, ScoringContext, sum_points};

/// Centor with the McIsaac age modification: streptococcal pharyngitis.
pub struct Centor;

const LOW: Localized = Localized::new(
    "Low (no testing or antibiotics)",
    "Nguy cơ thấp, không cần xét nghiệm/kháng sinh",
);
const MODERATE: Localized = Localized::new(
    "Moderate (consider GAS testing)",
    "Trung bình, cân nhắc xét nghiệm GAS",
);
const HIGH: Localized = Localized::new(
    "High (consider antibiotics)",
    "Cao, cân nhắc điều trị kháng sinh",
);

impl Centor {
    /// Age correction applied to the raw criteria sum. Under 3 the scale is
    /// not validated and the score is forced to 0; that includes an unknown
    /// age, which reads as 0.
    pub fn adjust_for_age(raw: f64, age: u32) -> f64 {
        match age {
            0..=2 => 0.0,
            3..=14 => raw + 1.0,
            15..=44 => raw,
            _ => raw - 1.0,
        }
    }
}

impl RiskScale for Centor {
    fn scale(&self) -> Scale {
        Scale::Centor
    }

    fn criteria(&self) -> &[Criterion] {
        static CRITERIA: std::sync::LazyLock<Vec<Criterion>> = std::sync::LazyLock::new(|| {
            vec![
                Criterion::flag("fever", "Temperature > 38 °C", 1.0),
                Criterion::flag("no_cough", "Absence of cough", 1.0),
                Criterion::flag("lymphadenopathy", "Swollen, tender anterior cervical nodes", 1.0),
                Criterion::flag("tonsillar_exudate", "Tonsillar swelling or exudate", 1.0),
            ]
        });
        &CRITERIA
    }

    fn score(&self, selection: &CriteriaSelection, ctx: &ScoringContext) -> f64 {
        Self::adjust_for_age(sum_points(self.criteria(), selection), ctx.age)
    }

    fn classify(&self, score: f64, locale: Locale) -> RiskTier {
        let (level, wording) = if score <= 1.0 {
            (RiskLevel::Low, LOW)
        } else if score <= 3.0 {
            (RiskLevel::Moderate, MODERATE)
        } else {
            (RiskLevel::High, HIGH)
        };
        RiskTier::new(self.scale(), level, wording.get(locale))
    }
}
