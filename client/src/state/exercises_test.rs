use super::*;
use crate::util::search::filter_items;

fn filled() -> ExerciseDraft {
    let mut draft = ExerciseDraft {
        name: "Wall Angels".to_owned(),
        category: "Back".to_owned(),
        difficulty: "Easy".to_owned(),
        duration: "6 mins".to_owned(),
        ..ExerciseDraft::default()
    };
    draft.add_target_area("Upper Back");
    draft
}

#[test]
fn seed_library_has_four_exercises() {
    let items = seed_exercises();
    assert_eq!(items.len(), 4);
    assert_eq!(items[2].target_areas, vec!["Neck", "Cervical Spine"]);
    assert!(items.iter().all(|e| e.image_url == PLACEHOLDER_IMAGE));
}

#[test]
fn target_areas_are_trimmed_and_deduplicated() {
    let mut draft = ExerciseDraft::default();
    assert!(draft.add_target_area("  Knees "));
    assert!(!draft.add_target_area("Knees"));
    assert!(!draft.add_target_area("   "));
    assert!(draft.add_target_area("Hips"));
    assert_eq!(draft.target_areas, vec!["Knees", "Hips"]);
    draft.remove_target_area("Knees");
    assert_eq!(draft.target_areas, vec!["Hips"]);
}

#[test]
fn missing_fields_reported_before_target_areas() {
    let errors = ExerciseDraft::default().validate(1).unwrap_err();
    assert_eq!(first_error(&errors), REQUIRED_FIELDS_MISSING);
    assert!(!errors.contains("target_areas"));
}

#[test]
fn target_area_required_once_fields_present() {
    let mut draft = filled();
    draft.remove_target_area("Upper Back");
    let errors = draft.validate(1).unwrap_err();
    assert_eq!(first_error(&errors), TARGET_AREA_MISSING);
}

#[test]
fn blank_image_url_falls_back_to_placeholder() {
    let draft = ExerciseDraft { image_url: " ".to_owned(), ..filled() };
    assert_eq!(draft.validate(7).unwrap().image_url, PLACEHOLDER_IMAGE);
}

#[test]
fn add_and_remove() {
    let mut state = ExercisesState::default();
    let added = state.add(&filled()).unwrap();
    assert_eq!(added.id, 5);
    assert_eq!(state.items.len(), 5);
    assert!(state.remove(1));
    assert_eq!(state.items.len(), 4);
    assert!(state.items.iter().all(|e| e.id != 1));
}

#[test]
fn search_includes_target_areas_and_difficulty() {
    let items = seed_exercises();
    let hits: Vec<u32> = filter_items(&items, "hamstrings").iter().map(|e| e.id).collect();
    assert_eq!(hits, vec![2, 4]);
    assert_eq!(filter_items(&items, "intermediate").len(), 1);
    assert_eq!(filter_items(&items, "upper body")[0].id, 1);
}

#[test]
fn difficulty_badges() {
    assert_eq!(difficulty_class("Easy"), "badge badge--green");
    assert_eq!(difficulty_class("Expert"), "badge badge--red");
    assert_eq!(difficulty_class("Unknown"), "badge");
}
