use crate::catalog::{Criterion, Scale};
use crate::tier::{Locale, Localized, RiskLevel, RiskTier};
use crate::RiskScale;

/// qSOFA: quick sepsis screen. Three criteria, 1 point each. Total 0–3.
pub struct Qsofa;

const LOW: Localized = Localized::new("Low", "Thấp");
const HIGH: Localized = Localized::new("High (possible sepsis)", "Cao (Nghi ngờ Sepsis)");

impl RiskScale for Qsofa {
    fn scale(&self) -> Scale {
        Scale::Qsofa
    }

    fn criteria(&self) -> &[Criterion] {
        static CRITERIA: std::sync::LazyLock<Vec<Criterion>> = std::sync::LazyLock::new(|| {
            vec![
                Criterion::flag("respiratory_rate", "Respiratory rate >= 22/min", 1.0),
                Criterion::flag("altered_mentation", "Altered mentation", 1.0),
                Criterion::flag("systolic_bp", "Systolic BP <= 100 mmHg", 1.0),
            ]
        });
        &CRITERIA
    }

    fn classify(&self, score: f64, locale: Locale) -> RiskTier {
        if score >= 2.0 {
            RiskTier::new(self.scale(), RiskLevel::High, HIGH.get(locale))
        } else {
            RiskTier::new(self.scale(), RiskLevel::Low, LOW.get(locale))
        }
    }
}
