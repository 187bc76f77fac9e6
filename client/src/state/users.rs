//! Staff directory for the admin user-management page.
//!
//! DESIGN
//! ======
//! Mock data only: the directory is seeded on each load and edits live in
//! context until the page reloads. Passwords are validated on the add form
//! and then dropped; nothing stores credentials.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::next_numeric_id;
use super::session::Role;
use crate::util::search::Searchable;
use crate::util::validation::{FieldErrors, INVALID_EMAIL, check_password_pair};

/// Specialization recorded when the form leaves it blank.
pub const NO_SPECIALIZATION: &str = "N/A";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub specialization: String,
    pub join_date: NaiveDate,
}

impl Searchable for StaffUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, self.role.as_str(), &self.specialization]
    }
}

fn seed(id: u32, name: &str, email: &str, role: Role, status: UserStatus, specialization: &str, ymd: (i32, u32, u32)) -> StaffUser {
    StaffUser {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        status,
        specialization: specialization.to_owned(),
        join_date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap_or_default(),
    }
}

pub fn seed_users() -> Vec<StaffUser> {
    use Role::{Admin, Therapist};
    use UserStatus::{Active, Inactive};
    vec![
        seed(1, "Dr. Sarah Johnson", "sarah.johnson@patienttrack.com", Therapist, Active, "Physical Therapy", (2025, 1, 15)),
        seed(2, "Dr. Michael Chen", "michael.chen@patienttrack.com", Therapist, Active, "Occupational Therapy", (2025, 2, 10)),
        seed(3, "Dr. Jessica Williams", "jessica.williams@patienttrack.com", Therapist, Inactive, "Speech Therapy", (2025, 1, 5)),
        seed(4, "Admin User", "admin@patienttrack.com", Admin, Active, NO_SPECIALIZATION, (2025, 1, 1)),
    ]
}

/// Raw text of the add-user dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub specialization: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Therapist.as_str().to_owned(),
            specialization: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl UserDraft {
    /// Build an active user who joined on `today`.
    ///
    /// # Errors
    ///
    /// Returns one message per failing field.
    pub fn validate(&self, id: u32, today: NaiveDate) -> Result<StaffUser, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.min_chars("name", &self.name, 2, "Name must be at least 2 characters.");
        errors.email("email", &self.email, INVALID_EMAIL);
        let role = Role::parse(&self.role);
        if role.is_none() {
            errors.add("role", "Please select a role.");
        }
        let specialization = self.specialization.trim();
        if !specialization.is_empty() {
            errors.min_chars("specialization", specialization, 2, "Specialization must be at least 2 characters.");
        }
        check_password_pair(&mut errors, &self.password, &self.confirm_password);

        errors.into_result(StaffUser {
            id,
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            role: role.unwrap_or_default(),
            status: UserStatus::Active,
            specialization: if specialization.is_empty() { NO_SPECIALIZATION.to_owned() } else { specialization.to_owned() },
            join_date: today,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<StaffUser>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self { items: seed_users() }
    }
}

impl UsersState {
    /// # Errors
    ///
    /// Returns the form errors; the directory is left untouched.
    pub fn add(&mut self, draft: &UserDraft, today: NaiveDate) -> Result<StaffUser, FieldErrors> {
        let user = draft.validate(next_numeric_id(self.items.iter().map(|u| u.id)), today)?;
        self.items.push(user.clone());
        Ok(user)
    }

    /// Flip one user's status and return the updated entry.
    pub fn toggle_status(&mut self, id: u32) -> Option<&StaffUser> {
        let user = self.items.iter_mut().find(|u| u.id == id)?;
        user.status = user.status.toggled();
        Some(user)
    }

    /// Remove and return the user with `id`.
    pub fn remove(&mut self, id: u32) -> Option<StaffUser> {
        let index = self.items.iter().position(|u| u.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn find(&self, id: u32) -> Option<&StaffUser> {
        self.items.iter().find(|u| u.id == id)
    }
}
