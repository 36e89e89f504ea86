//! Per-scale criteria selections as the intake form records them.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::catalog::{CriterionKind, Scale};
use crate::error::ScaleError;
use crate::scale_for;

/// A recorded answer to one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum CriterionValue {
    Flag(bool),
    Choice(String),
}

impl From<bool> for CriterionValue {
    fn from(value: bool) -> Self {
        CriterionValue::Flag(value)
    }
}

impl From<&str> for CriterionValue {
    fn from(value: &str) -> Self {
        CriterionValue::Choice(value.to_string())
    }
}

/// The answers recorded for a single scale, plus an explicit dirty flag.
///
/// `touched` is set by [`CriteriaSelection::set`] and only cleared by
/// replacing the selection, so a scale that was interacted with keeps
/// reporting even after every box is unchecked again.
///
/// Selections are deserialized only as part of [`CriteriaByScale`], which
/// knows the scale each one belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CriteriaSelection {
    values: BTreeMap<String, CriterionValue>,
    touched: bool,
}

static EMPTY_SELECTION: CriteriaSelection = CriteriaSelection::new();

impl CriteriaSelection {
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            touched: false,
        }
    }

    /// Build a selection by replaying each entry through [`Self::set`].
    pub fn from_entries<I, K, V>(scale: Scale, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CriterionValue>,
    {
        let mut selection = Self::new();
        for (id, value) in entries {
            selection.set(scale, id, value);
        }
        selection
    }

    /// Record a value. Marks the selection touched when the scale counts the
    /// value as an interaction.
    pub fn set(&mut self, scale: Scale, criterion_id: impl Into<String>, value: impl Into<CriterionValue>) {
        let criterion_id = criterion_id.into();
        let value = value.into();
        if scale_for(scale).counts_as_interaction(&criterion_id, &value) {
            self.touched = true;
        }
        self.values.insert(criterion_id, value);
    }

    /// Whether a flag criterion is checked. Missing or non-flag values read
    /// as unchecked.
    pub fn flag(&self, criterion_id: &str) -> bool {
        matches!(self.values.get(criterion_id), Some(CriterionValue::Flag(true)))
    }

    pub fn choice(&self, criterion_id: &str) -> Option<&str> {
        match self.values.get(criterion_id) {
            Some(CriterionValue::Choice(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get(&self, criterion_id: &str) -> Option<&CriterionValue> {
        self.values.get(criterion_id)
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One [`CriteriaSelection`] per scale. Missing scales read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CriteriaByScale(BTreeMap<Scale, CriteriaSelection>);

/// Selection as it arrives over the wire. Values are replayed through
/// [`CriteriaSelection::set`]; a stored `touched` only survives alongside
/// recorded values.
#[derive(Deserialize)]
struct SelectionWire {
    #[serde(default)]
    values: BTreeMap<String, CriterionValue>,
    #[serde(default)]
    touched: bool,
}

impl SelectionWire {
    fn into_selection(self, scale: Scale) -> CriteriaSelection {
        let stored_touch = self.touched && !self.values.is_empty();
        let mut selection = CriteriaSelection::from_entries(scale, self.values);
        selection.touched |= stored_touch;
        selection
    }
}

impl<'de> Deserialize<'de> for CriteriaByScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = BTreeMap::<Scale, SelectionWire>::deserialize(deserializer)?;
        Ok(Self(
            wire.into_iter()
                .map(|(scale, selection)| (scale, selection.into_selection(scale)))
                .collect(),
        ))
    }
}

impl CriteriaByScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scale: Scale) -> &CriteriaSelection {
        self.0.get(&scale).unwrap_or(&EMPTY_SELECTION)
    }

    pub fn set(&mut self, scale: Scale, criterion_id: impl Into<String>, value: impl Into<CriterionValue>) {
        self.0.entry(scale).or_default().set(scale, criterion_id, value);
    }

    pub fn insert(&mut self, scale: Scale, selection: CriteriaSelection) {
        self.0.insert(scale, selection);
    }

    /// Drop every recorded answer for every scale.
    pub fn reset(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(CriteriaSelection::is_empty)
    }
}

/// Check a value against the catalog entry it is meant for.
pub fn validate(scale: Scale, criterion_id: &str, value: &CriterionValue) -> Result<(), ScaleError> {
    let criterion = scale_for(scale)
        .criterion(criterion_id)
        .ok_or_else(|| ScaleError::UnknownCriterion {
            scale,
            criterion_id: criterion_id.to_string(),
        })?;

    match (&criterion.kind, value) {
        (CriterionKind::Derived { .. }, _) => Err(ScaleError::DerivedCriterion {
            scale,
            criterion_id: criterion_id.to_string(),
        }),
        (CriterionKind::Flag { .. }, CriterionValue::Flag(_)) => Ok(()),
        (CriterionKind::Flag { .. }, CriterionValue::Choice(_)) => {
            Err(ScaleError::ValueKindMismatch {
                scale,
                criterion_id: criterion_id.to_string(),
                expected: "boolean",
            })
        }
        (CriterionKind::Choice { .. }, CriterionValue::Flag(_)) => {
            Err(ScaleError::ValueKindMismatch {
                scale,
                criterion_id: criterion_id.to_string(),
                expected: "option",
            })
        }
        (CriterionKind::Choice { .. }, CriterionValue::Choice(v)) => {
            if criterion.kind.option(v).is_some() {
                Ok(())
            } else {
                Err(ScaleError::UnknownOption {
                    scale,
                    criterion_id: criterion_id.to_string(),
                    value: v.clone(),
                })
            }
        }
    }
}
