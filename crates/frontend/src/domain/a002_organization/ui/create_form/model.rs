//! Browser implementations of the flow seams

use super::flow::{Notifier, OperationError, OrganizationCreator, ViewRefresher};
use crate::domain::a002_organization::api;
use crate::domain::a002_organization::ui::list::state::OrganizationsStore;
use crate::shared::toast::ToastService;
use contracts::domain::a002_organization::aggregate::{CreateOrganizationRequest, Organization};

/// Creates organizations through the backend API
pub struct HttpOrganizationCreator;

impl OrganizationCreator for HttpOrganizationCreator {
    async fn create(
        &self,
        request: &CreateOrganizationRequest,
    ) -> Result<Organization, OperationError> {
        api::create_organization(request).await
    }
}

pub struct OrganizationsRefresher(pub OrganizationsStore);

impl ViewRefresher for OrganizationsRefresher {
    async fn refresh(&self) {
        self.0.reload().await;
    }
}

pub struct ToastNotifier(pub ToastService);

impl Notifier for ToastNotifier {
    fn success(&self, text: &str) {
        self.0.success(text);
    }

    fn failure(&self, text: &str) {
        self.0.error(text);
    }
}
