use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The clinical domain selected for an encounter. Exactly one is active at a
/// time and it decides which risk scales apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BodySystem {
    Respiratory,
    Infection,
    Cardiovascular,
    Gastrointestinal,
    Neurological,
    Ent,
    Other,
}

impl BodySystem {
    /// Display order on the intake form.
    pub const ALL: [BodySystem; 7] = [
        BodySystem::Respiratory,
        BodySystem::Infection,
        BodySystem::Cardiovascular,
        BodySystem::Gastrointestinal,
        BodySystem::Neurological,
        BodySystem::Ent,
        BodySystem::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BodySystem::Respiratory => "respiratory",
            BodySystem::Infection => "infection",
            BodySystem::Cardiovascular => "cardiovascular",
            BodySystem::Gastrointestinal => "gastrointestinal",
            BodySystem::Neurological => "neurological",
            BodySystem::Ent => "ent",
            BodySystem::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BodySystem::Respiratory => "Respiratory",
            BodySystem::Infection => "Infection",
            BodySystem::Cardiovascular => "Cardiovascular",
            BodySystem::Gastrointestinal => "Gastrointestinal",
            BodySystem::Neurological => "Neurological",
            BodySystem::Ent => "Ear, Nose & Throat",
            BodySystem::Other => "Other",
        }
    }
}

impl fmt::Display for BodySystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BodySystem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        BodySystem::ALL
            .into_iter()
            .find(|system| {
                system.id().eq_ignore_ascii_case(needle)
                    || system.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CoreError::UnknownBodySystem(s.to_string()))
    }
}
