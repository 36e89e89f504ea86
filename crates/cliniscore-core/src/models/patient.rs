use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    #[default]
    Other,
}

/// The subset of the patient record that scoring needs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    /// Date of birth as entered on the intake form. Free text; may be absent
    /// or unparseable.
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub sex: Sex,
}

impl Patient {
    pub fn new(name: impl Into<String>, dob: Option<&str>, sex: Sex) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dob: dob.map(str::to_string),
            sex,
        }
    }

    /// Parse `dob` as an ISO date, an ISO civil datetime, or an RFC 3339
    /// timestamp.
    pub fn birth_date(&self) -> Option<jiff::civil::Date> {
        let raw = self.dob.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(date) = raw.parse::<jiff::civil::Date>() {
            return Some(date);
        }
        if let Ok(datetime) = raw.parse::<jiff::civil::DateTime>() {
            return Some(datetime.date());
        }
        raw.parse::<jiff::Timestamp>()
            .ok()
            .map(|ts| ts.to_zoned(jiff::tz::TimeZone::UTC).date())
    }

    /// Age in whole years as `year - birth year`.
    ///
    /// Returns 0 ("unknown") when the date of birth is missing, unparseable,
    /// or later than `year`.
    pub fn age_in(&self, year: i16) -> u32 {
        match self.birth_date() {
            Some(dob) if dob.year() <= year => u32::from((year - dob.year()).unsigned_abs()),
            _ => 0,
        }
    }

    pub fn age_on(&self, date: jiff::civil::Date) -> u32 {
        self.age_in(date.year())
    }
}
