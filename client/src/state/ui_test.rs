use super::*;

#[test]
fn sidebar_starts_closed_and_toggles() {
    let mut ui = UiState::default();
    assert!(!ui.sidebar_open);
    ui.toggle_sidebar();
    assert!(ui.sidebar_open);
    ui.close_sidebar();
    assert!(!ui.sidebar_open);
}

#[test]
fn toast_ids_are_unique_and_increasing() {
    let mut toasts = ToastState::default();
    let a = toasts.success("Saved", "Patient created");
    let b = toasts.error("Validation Error", "Please fill in all required fields");
    assert!(b > a);
    assert_eq!(toasts.items.len(), 2);
    assert_eq!(toasts.items[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut toasts = ToastState::default();
    let a = toasts.push(ToastKind::Info, "One", None);
    let b = toasts.push(ToastKind::Info, "Two", None);
    toasts.dismiss(a);
    assert_eq!(toasts.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    toasts.dismiss(a);
    assert_eq!(toasts.items.len(), 1);
}

#[test]
fn ids_do_not_repeat_after_dismiss() {
    let mut toasts = ToastState::default();
    let a = toasts.push(ToastKind::Info, "One", None);
    toasts.dismiss(a);
    assert_ne!(toasts.push(ToastKind::Info, "Two", None), a);
}
