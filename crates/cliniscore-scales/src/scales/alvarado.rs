use crate::catalog::{Criterion, Scale};
use crate::tier::{Locale, Localized, RiskLevel, RiskTier};
use crate::RiskScale;

/// Alvarado (MANTRELS): acute appendicitis. Symptoms, signs and labs.
/// Total 0–10.
pub struct Alvarado;

const LOW: Localized = Localized::new(
    "Low (appendicitis unlikely)",
    "Thấp (Ít khả năng viêm ruột thừa)",
);
const MODERATE: Localized = Localized::new(
    "Moderate (observe or investigate further)",
    "Trung bình (Cần theo dõi/CLS)",
);
const HIGH: Localized = Localized::new(
    "High (appendicitis likely)",
    "Cao (Nhiều khả năng viêm ruột thừa)",
);

impl RiskScale for Alvarado {
    fn scale(&self) -> Scale {
        Scale::Alvarado
    }

    fn criteria(&self) -> &[Criterion] {
        static CRITERIA: std::sync::LazyLock<Vec<Criterion>> = std::sync::LazyLock::new(|| {
            vec![
                Criterion::flag("migratory_pain", "Migration of pain to the right iliac fossa", 1.0)
                    .in_group("symptom"),
                Criterion::flag("anorexia", "Anorexia", 1.0).in_group("symptom"),
                Criterion::flag("nausea", "Nausea or vomiting", 1.0).in_group("symptom"),
                Criterion::flag("rlq_tenderness", "Tenderness in the right iliac fossa", 2.0)
                    .in_group("sign"),
                Criterion::flag("rebound", "Rebound tenderness", 1.0).in_group("sign"),
                Criterion::flag("fever", "Temperature > 37.3 °C", 1.0).in_group("sign"),
                Criterion::flag("leukocytosis", "Leukocytosis > 10,000/mm³", 2.0).in_group("lab"),
                Criterion::flag("left_shift", "Shift to the left", 1.0).in_group("lab"),
            ]
        });
        &CRITERIA
    }

    fn classify(&self, score: f64, locale: Locale) -> RiskTier {
        let (level, wording) = if score <= 4.0 {
            (RiskLevel::Low, LOW)
        } else if score <= 6.0 {
            (RiskLevel::Moderate, MODERATE)
        } else {
            (RiskLevel::High, HIGH)
        };
        RiskTier::new(self.scale(), level, wording.get(locale))
    }
}
