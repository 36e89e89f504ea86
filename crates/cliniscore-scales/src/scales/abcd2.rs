use crate::catalog::{ChoiceOption, Criterion, Scale};
use crate::selection::CriterionValue;
use crate::tier::{Locale, Localized, RiskLevel, RiskTier};
use crate::RiskScale;

/// ABCD2: 2-day stroke risk after a TIA. Two of its criteria are
/// single-select groups whose lowest-weight option is the default.
/// Total 0–7.
pub struct Abcd2;

const LOW: Localized = Localized::new(
    "Low (~1% 2-day stroke risk)",
    "Thấp (1% nguy cơ đột quỵ trong 2 ngày)",
);
const MODERATE: Localized = Localized::new(
    "Moderate (~4.1% 2-day stroke risk)",
    "Trung bình (4.1% nguy cơ đột quỵ trong 2 ngày)",
);
const HIGH: Localized = Localized::new(
    "High (~8.1% 2-day stroke risk)",
    "Cao (8.1% nguy cơ đột quỵ trong 2 ngày)",
);

impl RiskScale for Abcd2 {
    fn scale(&self) -> Scale {
        Scale::Abcd2
    }

    fn criteria(&self) -> &[Criterion] {
        static CRITERIA: std::sync::LazyLock<Vec<Criterion>> = std::sync::LazyLock::new(|| {
            vec![
                Criterion::flag("age_60", "Age >= 60", 1.0),
                Criterion::flag("blood_pressure", "BP >= 140/90 mmHg at presentation", 1.0),
                Criterion::choice(
                    "clinical_features",
                    "Clinical features",
                    vec![
                        ChoiceOption::new("unilateral_weakness", "Unilateral weakness", 2.0),
                        ChoiceOption::new(
                            "speech_disturbance",
                            "Speech disturbance without weakness",
                            1.0,
                        ),
                        ChoiceOption::new("none", "None", 0.0),
                    ],
                ),
                Criterion::choice(
                    "duration",
                    "Duration of symptoms",
                    vec![
                        ChoiceOption::new("60_plus", ">= 60 minutes", 2.0),
                        ChoiceOption::new("10_to_59", "10–59 minutes", 1.0),
                        ChoiceOption::new("under_10", "< 10 minutes", 0.0),
                    ],
                ),
                Criterion::flag("diabetes", "Diabetes", 1.0),
            ]
        });
        &CRITERIA
    }

    fn classify(&self, score: f64, locale: Locale) -> RiskTier {
        let (level, wording) = if score <= 3.0 {
            (RiskLevel::Low, LOW)
        } else if score <= 5.0 {
            (RiskLevel::Moderate, MODERATE)
        } else {
            (RiskLevel::High, HIGH)
        };
        RiskTier::new(self.scale(), level, wording.get(locale))
    }

    /// Checking a box or moving a group to another catalogued option counts.
    /// Unchecking, re-selecting the default or an unknown option does not.
    fn counts_as_interaction(&self, criterion_id: &str, value: &CriterionValue) -> bool {
        match value {
            CriterionValue::Flag(checked) => *checked,
            CriterionValue::Choice(selected) => self.criterion(criterion_id).is_some_and(|c| {
                c.kind.option(selected).is_some()
                    && c.kind
                        .default_option()
                        .is_none_or(|default| default.value != *selected)
            }),
        }
    }
}
