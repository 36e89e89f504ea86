use crate::catalog::{Criterion, Scale};
use crate::tier::{Locale, RiskLevel, RiskTier};
use crate::RiskScale;

/// CHA2DS2-VASc: stroke risk in atrial fibrillation.
///
/// The two age brackets are independent checkboxes, so the catalog sums to
/// 10. The stroke-risk table stops at 9 and higher scores read its last row.
///
/// Catalogued and scorable on demand, but no body system routes to it.
pub struct ChadsVasc;

/// Adjusted annual stroke rate (%) indexed by score.
const ANNUAL_STROKE_RISK: [&str; 10] = [
    "0.0", "1.3", "2.2", "3.2", "4.0", "6.7", "9.8", "9.6", "12.5", "15.2",
];

impl ChadsVasc {
    pub fn annual_stroke_risk(score: f64) -> &'static str {
        let last = ANNUAL_STROKE_RISK.len() - 1;
        let index = (score.max(0.0) as usize).min(last);
        ANNUAL_STROKE_RISK[index]
    }
}

impl RiskScale for ChadsVasc {
    fn scale(&self) -> Scale {
        Scale::ChadsVasc
    }

    fn criteria(&self) -> &[Criterion] {
        static CRITERIA: std::sync::LazyLock<Vec<Criterion>> = std::sync::LazyLock::new(|| {
            vec![
                Criterion::flag("chf", "Congestive heart failure", 1.0),
                Criterion::flag("hypertension", "Hypertension", 1.0),
                Criterion::flag("age_75", "Age >= 75", 2.0),
                Criterion::flag("diabetes", "Diabetes mellitus", 1.0),
                Criterion::flag("stroke", "Prior stroke, TIA or thromboembolism", 2.0),
                Criterion::flag("vascular", "Vascular disease", 1.0),
                Criterion::flag("age_65_74", "Age 65–74", 1.0),
                Criterion::flag("sex_female", "Female sex", 1.0),
            ]
        });
        &CRITERIA
    }

    fn classify(&self, score: f64, locale: Locale) -> RiskTier {
        let level = if score >= 2.0 {
            RiskLevel::High
        } else if score >= 1.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };
        let rate = Self::annual_stroke_risk(score);
        let summary = match (level, locale) {
            (RiskLevel::Low, Locale::En) => format!("Low ({rate}% annual stroke risk)"),
            (RiskLevel::Moderate, Locale::En) => format!("Moderate ({rate}% annual stroke risk)"),
            (RiskLevel::High, Locale::En) => format!("High ({rate}% annual stroke risk)"),
            (RiskLevel::Low, Locale::Vi) => format!("Thấp ({rate}% nguy cơ đột quỵ mỗi năm)"),
            (RiskLevel::Moderate, Locale::Vi) => {
                format!("Trung bình ({rate}% nguy cơ đột quỵ mỗi năm)")
            }
            (RiskLevel::High, Locale::Vi) => format!("Cao ({rate}% nguy cơ đột quỵ mỗi năm)"),
        };
        RiskTier::new(self.scale(), level, summary)
    }
}
