use super::flow::{CreateOrgFlow, CreateOrgForm, SubmitPhase};
use super::model::{HttpOrganizationCreator, OrganizationsRefresher, ToastNotifier};
use crate::domain::a002_organization::ui::list::state::OrganizationsStore;
use crate::shared::toast::ToastService;
use contracts::domain::common::FieldError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the "Create Organization" dialog
#[derive(Clone, Copy)]
pub struct CreateOrgFormViewModel {
    pub name: RwSignal<String>,
    pub errors: RwSignal<Vec<FieldError>>,
    pub phase: RwSignal<SubmitPhase>,
    /// Owned by the caller; the dialog renders while it is `true`
    pub open: RwSignal<bool>,
}

impl CreateOrgFormViewModel {
    pub fn new(open: RwSignal<bool>) -> Self {
        Self {
            name: RwSignal::new(String::new()),
            errors: RwSignal::new(Vec::new()),
            phase: RwSignal::new(SubmitPhase::Idle),
            open,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase.get().is_pending()
    }

    pub fn name_error(&self) -> Option<String> {
        self.errors.with(|errors| {
            errors
                .iter()
                .find(|e| e.field == "name")
                .map(|e| e.message.clone())
        })
    }

    pub fn set_name(&self, value: String) {
        self.name.set(value);
        if self.phase.get_untracked() == SubmitPhase::Failed {
            self.phase.set(SubmitPhase::Idle);
        }
    }

    /// Overlay click, Escape or the close button.
    /// Ignored while a request is in flight; otherwise the form state is dropped.
    pub fn close_requested(&self) {
        if self.phase.get_untracked().is_pending() {
            return;
        }
        self.open.set(false);
        self.reset();
        self.phase.set(SubmitPhase::Idle);
    }

    /// Submit command: validation runs synchronously, the request in a spawned task
    pub fn submit_command(&self, store: OrganizationsStore, toasts: ToastService) {
        let flow = CreateOrgFlow::new(
            HttpOrganizationCreator,
            OrganizationsRefresher(store),
            ToastNotifier(toasts),
        );

        match flow.prepare(self) {
            Ok(request) => {
                let vm = *self;
                spawn_local(async move {
                    flow.execute(&vm, request).await;
                });
            }
            Err(outcome) => log::debug!("create organization not submitted: {:?}", outcome),
        }
    }
}

impl CreateOrgForm for CreateOrgFormViewModel {
    fn name(&self) -> String {
        self.name.get_untracked()
    }

    fn set_errors(&self, errors: Vec<FieldError>) {
        self.errors.set(errors);
    }

    fn phase(&self) -> SubmitPhase {
        self.phase.get_untracked()
    }

    fn set_phase(&self, phase: SubmitPhase) {
        self.phase.set(phase);
    }

    fn close(&self) {
        self.open.set(false);
    }

    fn reset(&self) {
        self.name.set(String::new());
        self.errors.set(Vec::new());
    }
}
