use contracts::shared::navigation::nav_ids;
use leptos::prelude::*;

/// Global UI state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    /// Show the "Admin" sidebar section
    pub show_admin: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            show_admin: RwSignal::new(false),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|v| *v = !*v);
    }

    pub fn toggle_admin(&self) {
        self.show_admin.update(|v| *v = !*v);
    }

    /// Section ids the sidebar must hide right now
    pub fn hidden_sections(&self) -> Vec<&'static str> {
        if self.show_admin.get() {
            Vec::new()
        } else {
            vec![nav_ids::ADMIN]
        }
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
