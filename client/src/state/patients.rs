//! Patient records persisted in browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Patients are the only collection that survives a reload. Every operation
//! reads the whole `patients` array, applies one change and writes it back;
//! there is no caching layer, so two open tabs simply overwrite each other.
//!
//! DESIGN
//! ======
//! The wire shape uses camelCase field names so data written by
//! earlier versions of the dashboard still loads.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::{self, KeyValueStore, PATIENTS_KEY, StorageError};
use crate::util::format::{deserialize_lenient_date, parse_date};
use crate::util::search::Searchable;
use crate::util::validation::{FieldErrors, INVALID_EMAIL};

/// First numeric suffix handed out by [`next_patient_id`].
pub const FIRST_PATIENT_NUMBER: u32 = 1001;

/// Gender options offered by the patient form.
pub const GENDERS: [(&str, &str); 4] = [
    ("male", "Male"),
    ("female", "Female"),
    ("other", "Other"),
    ("prefer-not-to-say", "Prefer not to say"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `City, State` as shown in the list view.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.first_name, &self.last_name, &self.id, &self.email]
    }
}

/// Full-name search: `"jane smi"` should match Jane Smith even though the
/// query spans two stored fields.
pub fn filter_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    patients
        .iter()
        .filter(|p| {
            let full_name = p.full_name();
            let mut fields = p.search_fields();
            fields.push(&full_name);
            crate::util::search::matches_query(query, fields)
        })
        .collect()
}

// =============================================================================
// FORM DRAFT
// =============================================================================

/// Raw text of the create-patient form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub notes: String,
}

impl PatientDraft {
    /// Validate every field and build the patient to store under `id`.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(&self, id: String) -> Result<Patient, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.min_chars("first_name", &self.first_name, 2, "First name must be at least 2 characters.");
        errors.min_chars("last_name", &self.last_name, 2, "Last name must be at least 2 characters.");
        errors.email("email", &self.email, INVALID_EMAIL);
        errors.min_chars("phone_number", &self.phone_number, 10, "Phone number must be at least 10 digits.");
        let date_of_birth = parse_date(&self.date_of_birth);
        match date_of_birth {
            None => errors.add("date_of_birth", "Please select a date of birth."),
            Some(dob) if dob > crate::util::format::today() => {
                errors.add("date_of_birth", "Date of birth cannot be in the future.");
            }
            Some(_) => {}
        }
        if !GENDERS.iter().any(|(value, _)| *value == self.gender) {
            errors.add("gender", "Please select a gender.");
        }
        errors.min_chars("address", &self.address, 5, "Address must be at least 5 characters.");
        errors.min_chars("city", &self.city, 2, "City must be at least 2 characters.");
        errors.min_chars("state", &self.state, 2, "State must be at least 2 characters.");
        errors.min_chars("postal_code", &self.postal_code, 5, "Postal code must be at least 5 characters.");

        let notes = self.notes.trim();
        errors.into_result(Patient {
            id,
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone_number: self.phone_number.trim().to_owned(),
            date_of_birth,
            gender: self.gender.clone(),
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            state: self.state.trim().to_owned(),
            postal_code: self.postal_code.trim().to_owned(),
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
        })
    }
}

// =============================================================================
// STORE OPERATIONS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("patient form is invalid")]
    Invalid(FieldErrors),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Next `P-<n>` id: one past the highest numeric suffix in use.
pub fn next_patient_id(patients: &[Patient]) -> String {
    let next = patients
        .iter()
        .filter_map(|p| p.id.strip_prefix("P-").and_then(|n| n.parse::<u32>().ok()))
        .max()
        .map_or(FIRST_PATIENT_NUMBER, |n| n.saturating_add(1).max(FIRST_PATIENT_NUMBER));
    format!("P-{next}")
}

/// All stored patients; a missing key is an empty list.
///
/// # Errors
///
/// Returns an error if the stored collection cannot be read or parsed.
pub fn load_patients(store: &dyn KeyValueStore) -> Result<Vec<Patient>, StorageError> {
    Ok(storage::load_json::<Vec<Patient>>(store, PATIENTS_KEY)?.unwrap_or_default())
}

/// Replace the stored collection.
///
/// # Errors
///
/// Returns an error if the collection cannot be encoded or written.
pub fn save_patients(store: &dyn KeyValueStore, patients: &[Patient]) -> Result<(), StorageError> {
    storage::save_json(store, PATIENTS_KEY, patients)
}

/// Look up one patient by id.
///
/// # Errors
///
/// Returns an error if the stored collection cannot be read or parsed.
pub fn find_patient(store: &dyn KeyValueStore, id: &str) -> Result<Option<Patient>, StorageError> {
    Ok(load_patients(store)?.into_iter().find(|p| p.id == id))
}

/// Validate the draft and append exactly one patient to the stored collection.
///
/// # Errors
///
/// Returns [`PatientError::Invalid`] with per-field messages, or a storage error.
pub fn create_patient(store: &dyn KeyValueStore, draft: &PatientDraft) -> Result<Patient, PatientError> {
    let mut patients = load_patients(store)?;
    let patient = draft.validate(next_patient_id(&patients)).map_err(PatientError::Invalid)?;
    patients.push(patient.clone());
    save_patients(store, &patients)?;
    Ok(patient)
}

/// Remove the first patient with `id`. Returns whether anything was removed.
///
/// # Errors
///
/// Returns an error if the stored collection cannot be read or written.
pub fn delete_patient(store: &dyn KeyValueStore, id: &str) -> Result<bool, StorageError> {
    let mut patients = load_patients(store)?;
    let Some(index) = patients.iter().position(|p| p.id == id) else {
        return Ok(false);
    };
    patients.remove(index);
    save_patients(store, &patients)?;
    Ok(true)
}

/// List-view state for the patients page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientsState {
    pub items: Vec<Patient>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for PatientsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl PatientsState {
    /// Outcome of reading storage; parse failures leave an empty list.
    pub fn from_load(result: Result<Vec<Patient>, StorageError>) -> Self {
        match result {
            Ok(items) => Self { items, loading: false, error: None },
            Err(StorageError::Unavailable) => Self { items: Vec::new(), loading: false, error: None },
            Err(e) => {
                leptos::logging::error!("Error loading patients: {e}");
                Self { items: Vec::new(), loading: false, error: Some(e.to_string()) }
            }
        }
    }
}
