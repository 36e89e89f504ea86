use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Scale;

/// Language of the published risk wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

/// A fixed phrase in every supported locale.
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub en: &'static str,
    pub vi: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, vi: &'static str) -> Self {
        Self { en, vi }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Vi => self.vi,
        }
    }
}

/// Published when no scale applies to the selected body system.
pub const UNDETERMINED: Localized = Localized::new("Undetermined", "Chưa xác định");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// The categorical interpretation of one scale's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskTier {
    pub scale: Scale,
    pub level: RiskLevel,
    pub summary: String,
}

impl RiskTier {
    pub fn new(scale: Scale, level: RiskLevel, summary: impl Into<String>) -> Self {
        Self {
            scale,
            level,
            summary: summary.into(),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

/// Compose the single risk line published for an encounter.
///
/// One tier renders as its summary alone; several are prefixed with their
/// scale name and joined with `"; "` in the given order.
pub fn risk_line(tiers: &[RiskTier], locale: Locale) -> String {
    match tiers {
        [] => UNDETERMINED.get(locale).to_string(),
        [only] => only.summary.clone(),
        many => many
            .iter()
            .map(|t| format!("{}: {}", t.scale, t.summary))
            .collect::<Vec<_>>()
            .join("; "),
    }
}
