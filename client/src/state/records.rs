//! Medical records held in memory for the current page load.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::next_numeric_id;
use crate::util::format::parse_date;
use crate::util::search::Searchable;
use crate::util::validation::FieldErrors;

pub const RECORD_TYPES: [&str; 5] =
    ["Consultation", "Assessment", "Therapy Session", "Progress Note", "Discharge Summary"];

pub const REQUIRED_FIELDS_MISSING: &str = "Please fill in all required fields";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: u32,
    pub patient_name: String,
    pub patient_id: String,
    pub record_type: String,
    pub date: NaiveDate,
    pub description: String,
    pub created_by: String,
}

impl Searchable for MedicalRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.patient_name, &self.patient_id, &self.record_type]
    }
}

fn seed(id: u32, patient: (&str, &str), record_type: &str, ymd: (i32, u32, u32), description: &str, by: &str) -> MedicalRecord {
    MedicalRecord {
        id,
        patient_name: patient.0.to_owned(),
        patient_id: patient.1.to_owned(),
        record_type: record_type.to_owned(),
        date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap_or_default(),
        description: description.to_owned(),
        created_by: by.to_owned(),
    }
}

/// Records shown on every fresh load.
pub fn seed_records() -> Vec<MedicalRecord> {
    vec![
        seed(1, ("John Doe", "P-1001"), "Consultation", (2025, 3, 10), "Initial consultation for lower back pain", "Dr. Smith"),
        seed(
            2,
            ("Jane Smith", "P-1002"),
            "Therapy Session",
            (2025, 3, 9),
            "Physical therapy session for shoulder rehabilitation",
            "Dr. Johnson",
        ),
        seed(3, ("Robert Brown", "P-1003"), "Assessment", (2025, 3, 8), "Comprehensive mobility assessment", "Dr. Williams"),
    ]
}

/// Raw text of the new-record form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub patient_name: String,
    pub patient_id: String,
    pub record_type: String,
    pub date: String,
    pub description: String,
    pub created_by: String,
}

impl RecordDraft {
    /// Empty form with the date pre-filled.
    pub fn dated(today: NaiveDate) -> Self {
        Self { date: today.format("%Y-%m-%d").to_string(), ..Self::default() }
    }

    /// # Errors
    ///
    /// Returns a message for each missing required field.
    pub fn validate(&self, id: u32) -> Result<MedicalRecord, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("patient_name", &self.patient_name, REQUIRED_FIELDS_MISSING);
        errors.require("patient_id", &self.patient_id, REQUIRED_FIELDS_MISSING);
        if !RECORD_TYPES.contains(&self.record_type.as_str()) {
            errors.add("record_type", REQUIRED_FIELDS_MISSING);
        }
        let date = parse_date(&self.date);
        if date.is_none() {
            errors.add("date", REQUIRED_FIELDS_MISSING);
        }
        let Some(date) = date else {
            return Err(errors);
        };
        errors.into_result(MedicalRecord {
            id,
            patient_name: self.patient_name.trim().to_owned(),
            patient_id: self.patient_id.trim().to_owned(),
            record_type: self.record_type.clone(),
            date,
            description: self.description.trim().to_owned(),
            created_by: self.created_by.trim().to_owned(),
        })
    }
}

/// In-memory record collection provided through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordsState {
    pub items: Vec<MedicalRecord>,
}

impl Default for RecordsState {
    fn default() -> Self {
        Self { items: seed_records() }
    }
}

impl RecordsState {
    /// Validate and append a record.
    ///
    /// # Errors
    ///
    /// Returns the form errors; the collection is left untouched.
    pub fn add(&mut self, draft: &RecordDraft) -> Result<MedicalRecord, FieldErrors> {
        let record = draft.validate(next_numeric_id(self.items.iter().map(|r| r.id)))?;
        self.items.push(record.clone());
        Ok(record)
    }

    /// Remove the record with `id`. Returns whether it existed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
    }
}
