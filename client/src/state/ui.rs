//! Local UI chrome state (sidebar, toasts).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the data modules so the
//! navbar, sidebar and toast region can change without touching records.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Milliseconds a toast stays visible before auto-dismiss.
pub const TOAST_TIMEOUT_MS: u64 = 4_000;

/// Shell state shared by the navbar and sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Sidebar visibility on narrow screens. Wide layouts always show it.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, description: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, title: title.into(), description });
        id
    }

    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, title, Some(description.into()))
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, title, Some(description.into()))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
