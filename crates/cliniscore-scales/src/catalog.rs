use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScaleError;

/// A named clinical risk scale.
///
/// Serialised by its published name, which is also the key used in score
/// maps handed to the encounter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Scale {
    #[serde(rename = "CURB-65")]
    Curb65,
    #[serde(rename = "qSOFA")]
    Qsofa,
    #[serde(rename = "CHA2DS2-VASc")]
    ChadsVasc,
    #[serde(rename = "Alvarado")]
    Alvarado,
    #[serde(rename = "ABCD2")]
    Abcd2,
    #[serde(rename = "Wells' PE")]
    WellsPe,
    #[serde(rename = "Centor")]
    Centor,
}

impl Scale {
    pub const ALL: [Scale; 7] = [
        Scale::Curb65,
        Scale::Qsofa,
        Scale::ChadsVasc,
        Scale::Alvarado,
        Scale::Abcd2,
        Scale::WellsPe,
        Scale::Centor,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Scale::Curb65 => "curb65",
            Scale::Qsofa => "qsofa",
            Scale::ChadsVasc => "chads_vasc",
            Scale::Alvarado => "alvarado",
            Scale::Abcd2 => "abcd2",
            Scale::WellsPe => "wells_pe",
            Scale::Centor => "centor",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scale::Curb65 => "CURB-65",
            Scale::Qsofa => "qSOFA",
            Scale::ChadsVasc => "CHA2DS2-VASc",
            Scale::Alvarado => "Alvarado",
            Scale::Abcd2 => "ABCD2",
            Scale::WellsPe => "Wells' PE",
            Scale::Centor => "Centor",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = ScaleError;

    /// Accepts either the snake_case id or the published name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::ALL
            .into_iter()
            .find(|scale| scale.id() == s || scale.name() == s)
            .ok_or_else(|| ScaleError::UnknownScale(s.to_string()))
    }
}

/// One selectable option of a single-select criterion group.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    pub points: f64,
}

impl ChoiceOption {
    pub fn new(value: &str, label: &str, points: f64) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            points,
        }
    }
}

/// How a criterion contributes points.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CriterionKind {
    /// A checkbox worth `points` when checked.
    Flag { points: f64 },
    /// Mutually exclusive options; only the selected one counts.
    Choice { options: Vec<ChoiceOption> },
    /// Computed from patient data, never toggled by the user.
    Derived { points: f64 },
}

impl CriterionKind {
    /// The implicit selection of a choice group: its lowest-weight option.
    pub fn default_option(&self) -> Option<&ChoiceOption> {
        match self {
            CriterionKind::Choice { options } => options
                .iter()
                .min_by(|a, b| a.points.total_cmp(&b.points)),
            _ => None,
        }
    }

    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        match self {
            CriterionKind::Choice { options } => options.iter().find(|o| o.value == value),
            _ => None,
        }
    }

    /// Highest number of points this criterion can contribute.
    pub fn max_points(&self) -> f64 {
        match self {
            CriterionKind::Flag { points } | CriterionKind::Derived { points } => *points,
            CriterionKind::Choice { options } => options
                .iter()
                .map(|o| o.points)
                .fold(0.0, f64::max),
        }
    }
}

/// A single checklist item or option group of a scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    pub kind: CriterionKind,
    /// Display grouping, e.g. Alvarado's symptom/sign/lab sections.
    pub group: Option<String>,
}

impl Criterion {
    pub fn flag(id: &str, label: &str, points: f64) -> Self {
        Self::new(id, label, CriterionKind::Flag { points })
    }

    pub fn choice(id: &str, label: &str, options: Vec<ChoiceOption>) -> Self {
        Self::new(id, label, CriterionKind::Choice { options })
    }

    pub fn derived(id: &str, label: &str, points: f64) -> Self {
        Self::new(id, label, CriterionKind::Derived { points })
    }

    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    fn new(id: &str, label: &str, kind: CriterionKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            group: None,
        }
    }
}
