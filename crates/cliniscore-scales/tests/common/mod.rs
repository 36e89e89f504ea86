#![allow(dead_code)]

use cliniscore_core::models::{Patient, Sex};
use jiff::civil::{Date, date};

pub const TODAY: Date = date(2026, 10, 16);

/// A patient whose age on [`TODAY`] is `age` years.
pub fn patient_aged(age: i16) -> Patient {
    let dob = format!("{:04}-06-15", TODAY.year() - age);
    Patient::new("Test Patient", Some(dob.as_str()), Sex::Male)
}

pub fn patient_without_dob() -> Patient {
    Patient::new("Test Patient", None, Sex::Female)
}

/// Route engine logs to the test writer when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
