use crate::catalog::{Criterion, Scale};
use crate::tier::{Locale, Localized, RiskLevel, RiskTier};
use crate::RiskScale;

/// Wells' criteria for pulmonary embolism. Half-point items, total 0–12.5.
pub struct WellsPe;

const LOW: Localized = Localized::new("Low (PE unlikely)", "Thấp (PE ít khả năng)");
const MODERATE: Localized = Localized::new("Moderate (PE possible)", "Trung bình (PE có thể)");
const HIGH: Localized = Localized::new("High (PE likely)", "Cao (PE khả năng cao)");

impl RiskScale for WellsPe {
    fn scale(&self) -> Scale {
        Scale::WellsPe
    }

    fn criteria(&self) -> &[Criterion] {
        static CRITERIA: std::sync::LazyLock<Vec<Criterion>> = std::sync::LazyLock::new(|| {
            vec![
                Criterion::flag("dvt_signs", "Clinical signs of DVT", 3.0),
                Criterion::flag("pe_most_likely", "PE is the most likely diagnosis", 3.0),
                Criterion::flag("heart_rate", "Heart rate > 100/min", 1.5),
                Criterion::flag(
                    "immobilization",
                    "Immobilisation >= 3 days or surgery in the previous 4 weeks",
                    1.5,
                ),
                Criterion::flag("previous_dvt_pe", "Previous DVT or PE", 1.5),
                Criterion::flag("hemoptysis", "Haemoptysis", 1.0),
                Criterion::flag(
                    "malignancy",
                    "Malignancy (on treatment or treated in the last 6 months)",
                    1.0,
                ),
            ]
        });
        &CRITERIA
    }

    fn classify(&self, score: f64, locale: Locale) -> RiskTier {
        let (level, wording) = if score > 6.0 {
            (RiskLevel::High, HIGH)
        } else if score >= 2.0 {
            (RiskLevel::Moderate, MODERATE)
        } else {
            (RiskLevel::Low, LOW)
        };
        RiskTier::new(self.scale(), level, wording.get(locale))
    }
}
