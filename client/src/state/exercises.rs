//! Exercise library held in memory for the current page load.

#[cfg(test)]
#[path = "exercises_test.rs"]
mod exercises_test;

use serde::{Deserialize, Serialize};

use super::next_numeric_id;
use crate::util::search::Searchable;
use crate::util::validation::FieldErrors;

pub const CATEGORIES: [&str; 8] =
    ["Upper Body", "Lower Body", "Core", "Back", "Neck", "Flexibility", "Balance", "Cardiovascular"];

pub const DIFFICULTIES: [&str; 5] = ["Easy", "Beginner", "Intermediate", "Advanced", "Expert"];

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/200x150";

pub const REQUIRED_FIELDS_MISSING: &str = "Please fill in all required fields";
pub const TARGET_AREA_MISSING: &str = "Please add at least one target area";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    pub duration: String,
    pub description: String,
    pub target_areas: Vec<String>,
    pub image_url: String,
}

impl Searchable for Exercise {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), &self.category, &self.difficulty];
        fields.extend(self.target_areas.iter().map(String::as_str));
        fields
    }
}

/// CSS modifier for the difficulty badge.
pub fn difficulty_class(difficulty: &str) -> &'static str {
    match difficulty {
        "Easy" | "Beginner" => "badge badge--green",
        "Intermediate" => "badge badge--amber",
        "Advanced" | "Expert" => "badge badge--red",
        _ => "badge",
    }
}

fn seed(id: u32, name: &str, category: &str, difficulty: &str, duration: &str, description: &str, areas: &[&str]) -> Exercise {
    Exercise {
        id,
        name: name.to_owned(),
        category: category.to_owned(),
        difficulty: difficulty.to_owned(),
        duration: duration.to_owned(),
        description: description.to_owned(),
        target_areas: areas.iter().map(|a| (*a).to_owned()).collect(),
        image_url: PLACEHOLDER_IMAGE.to_owned(),
    }
}

/// Exercises shown on every fresh load.
pub fn seed_exercises() -> Vec<Exercise> {
    vec![
        seed(
            1,
            "Modified Push-ups",
            "Upper Body",
            "Beginner",
            "10 mins",
            "Modified push-ups for patients with limited upper body strength. Perfect for rebuilding strength after injury.",
            &["Shoulders", "Chest", "Arms"],
        ),
        seed(
            2,
            "Assisted Squats",
            "Lower Body",
            "Beginner",
            "12 mins",
            "Assisted squats for improving lower body strength and stability. Can be performed with support.",
            &["Quads", "Hamstrings", "Glutes"],
        ),
        seed(
            3,
            "Neck Rotations",
            "Neck",
            "Easy",
            "5 mins",
            "Gentle neck rotations to improve mobility and reduce stiffness in the cervical spine.",
            &["Neck", "Cervical Spine"],
        ),
        seed(
            4,
            "Hamstring Stretches",
            "Flexibility",
            "Intermediate",
            "8 mins",
            "Effective hamstring stretches to improve flexibility and reduce tension in the back of the legs.",
            &["Hamstrings", "Lower Back"],
        ),
    ]
}

/// Raw text of the new-exercise form, including the target-area chips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub name: String,
    pub category: String,
    pub difficulty: String,
    pub duration: String,
    pub description: String,
    pub image_url: String,
    pub target_areas: Vec<String>,
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            difficulty: String::new(),
            duration: String::new(),
            description: String::new(),
            image_url: PLACEHOLDER_IMAGE.to_owned(),
            target_areas: Vec::new(),
        }
    }
}

impl ExerciseDraft {
    /// Add a trimmed target area. Blank and duplicate entries are ignored;
    /// returns whether the list changed.
    pub fn add_target_area(&mut self, raw: &str) -> bool {
        let area = raw.trim();
        if area.is_empty() || self.target_areas.iter().any(|a| a == area) {
            return false;
        }
        self.target_areas.push(area.to_owned());
        true
    }

    pub fn remove_target_area(&mut self, area: &str) {
        self.target_areas.retain(|a| a != area);
    }

    /// # Errors
    ///
    /// Returns the missing-field message first; the target-area message is
    /// only reported once every other required field is present.
    pub fn validate(&self, id: u32) -> Result<Exercise, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, REQUIRED_FIELDS_MISSING);
        errors.require("category", &self.category, REQUIRED_FIELDS_MISSING);
        errors.require("difficulty", &self.difficulty, REQUIRED_FIELDS_MISSING);
        errors.require("duration", &self.duration, REQUIRED_FIELDS_MISSING);
        if errors.is_empty() && self.target_areas.is_empty() {
            errors.add("target_areas", TARGET_AREA_MISSING);
        }
        let image_url = self.image_url.trim();
        errors.into_result(Exercise {
            id,
            name: self.name.trim().to_owned(),
            category: self.category.clone(),
            difficulty: self.difficulty.clone(),
            duration: self.duration.trim().to_owned(),
            description: self.description.trim().to_owned(),
            target_areas: self.target_areas.clone(),
            image_url: if image_url.is_empty() { PLACEHOLDER_IMAGE.to_owned() } else { image_url.to_owned() },
        })
    }
}

/// Summary line for a failed submit: the first message in field order.
pub fn first_error(errors: &FieldErrors) -> &str {
    ["name", "category", "difficulty", "duration", "target_areas"]
        .into_iter()
        .find_map(|field| errors.get(field))
        .unwrap_or(REQUIRED_FIELDS_MISSING)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExercisesState {
    pub items: Vec<Exercise>,
}

impl Default for ExercisesState {
    fn default() -> Self {
        Self { items: seed_exercises() }
    }
}

impl ExercisesState {
    /// # Errors
    ///
    /// Returns the form errors; the library is left untouched.
    pub fn add(&mut self, draft: &ExerciseDraft) -> Result<Exercise, FieldErrors> {
        let exercise = draft.validate(next_numeric_id(self.items.iter().map(|e| e.id)))?;
        self.items.push(exercise.clone());
        Ok(exercise)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|e| e.id != id);
        self.items.len() != before
    }
}
