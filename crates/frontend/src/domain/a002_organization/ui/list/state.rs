use crate::domain::a002_organization::api;
use contracts::domain::a002_organization::aggregate::Organization;
use leptos::prelude::*;

/// Shared organization list. Every view that shows organizations reads it,
/// so reloading it is the "refresh" step after a create.
#[derive(Clone, Copy)]
pub struct OrganizationsStore {
    pub items: RwSignal<Vec<Organization>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl OrganizationsStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Refetch the list; resolves after the new data is in place
    pub async fn reload(self) {
        self.loading.set(true);
        match api::fetch_organizations().await {
            Ok(items) => {
                self.items.set(items);
                self.error.set(None);
            }
            Err(e) => {
                log::error!("load organizations: {e}");
                self.error.set(Some(format!("Failed to load organizations: {e}")));
            }
        }
        self.loading.set(false);
    }
}

pub fn use_organizations() -> OrganizationsStore {
    use_context::<OrganizationsStore>().expect("OrganizationsStore not provided in context")
}
