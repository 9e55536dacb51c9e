//! Submit flow of the "Create Organization" dialog.
//!
//! The flow only talks to its seams ([`OrganizationCreator`], [`ViewRefresher`],
//! [`Notifier`], [`CreateOrgForm`]), so it runs the same against Leptos signals
//! and against the fakes in the tests below.
//!
//! ```text
//! Idle -> Validating -> Submitting -> Refreshing -> Idle   (dialog closed, field reset)
//!            |               \
//!            v                `-> Failed                   (dialog open, value kept)
//!          Idle (field errors)
//! ```

use contracts::domain::a002_organization::aggregate::{CreateOrganizationRequest, Organization};
use contracts::domain::common::FieldError;

pub const SUCCESS_TEXT: &str = "Organization created successfully";
pub const FAILURE_FALLBACK_TEXT: &str = "Organization could not be created";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Refreshing,
    Failed,
}

impl SubmitPhase {
    /// Mutation or the follow-up refresh is in flight
    pub fn is_pending(self) -> bool {
        matches!(self, SubmitPhase::Submitting | SubmitPhase::Refreshing)
    }
}

/// Rejection from the create operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationError {
    pub message: Option<String>,
    pub field_errors: Vec<FieldError>,
}

impl OperationError {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            field_errors: Vec::new(),
        }
    }

    pub fn without_message() -> Self {
        Self::default()
    }

    /// Text for the failure toast; blank messages count as missing.
    pub fn display_text(&self, fallback: &str) -> String {
        match self.message.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait OrganizationCreator {
    async fn create(
        &self,
        request: &CreateOrganizationRequest,
    ) -> Result<Organization, OperationError>;
}

/// Re-fetches every view that depends on the organization list.
#[allow(async_fn_in_trait)]
pub trait ViewRefresher {
    async fn refresh(&self);
}

/// Fire-and-forget user feedback.
pub trait Notifier {
    fn success(&self, text: &str);
    fn failure(&self, text: &str);
}

/// Form state owned by a single dialog instance.
pub trait CreateOrgForm {
    fn name(&self) -> String;
    fn set_errors(&self, errors: Vec<FieldError>);
    fn phase(&self) -> SubmitPhase;
    fn set_phase(&self, phase: SubmitPhase);
    fn close(&self);
    fn reset(&self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A submission was already in flight
    Ignored,
    Invalid(Vec<FieldError>),
    Created(Organization),
    Failed(String),
}

pub struct CreateOrgFlow<C, R, N> {
    creator: C,
    refresher: R,
    notifier: N,
}

impl<C, R, N> CreateOrgFlow<C, R, N>
where
    C: OrganizationCreator,
    R: ViewRefresher,
    N: Notifier,
{
    pub fn new(creator: C, refresher: R, notifier: N) -> Self {
        Self {
            creator,
            refresher,
            notifier,
        }
    }

    /// Runs validation and the whole async sequence.
    pub async fn submit<F: CreateOrgForm>(&self, form: &F) -> SubmitOutcome {
        match self.prepare(form) {
            Ok(request) => self.execute(form, request).await,
            Err(outcome) => outcome,
        }
    }

    /// Synchronous part of a submit: guard, validation, switch to `Submitting`.
    ///
    /// Once this returns `Ok` the form already reports pending, so a second
    /// click dispatched before the spawned task starts is ignored.
    pub fn prepare<F: CreateOrgForm>(
        &self,
        form: &F,
    ) -> Result<CreateOrganizationRequest, SubmitOutcome> {
        if form.phase().is_pending() {
            log::debug!("create organization: submit ignored, request in flight");
            return Err(SubmitOutcome::Ignored);
        }

        form.set_phase(SubmitPhase::Validating);
        let name = match CreateOrganizationRequest::new(form.name()).validate() {
            Ok(name) => name,
            Err(errors) => {
                form.set_errors(errors.clone());
                form.set_phase(SubmitPhase::Idle);
                return Err(SubmitOutcome::Invalid(errors));
            }
        };

        form.set_errors(Vec::new());
        form.set_phase(SubmitPhase::Submitting);
        Ok(CreateOrganizationRequest::new(name.into_inner()))
    }

    /// Create, then refresh dependent views, then close. Never retries.
    pub async fn execute<F: CreateOrgForm>(
        &self,
        form: &F,
        request: CreateOrganizationRequest,
    ) -> SubmitOutcome {
        match self.creator.create(&request).await {
            Ok(org) => {
                form.set_phase(SubmitPhase::Refreshing);
                self.refresher.refresh().await;

                form.close();
                form.reset();
                form.set_phase(SubmitPhase::Idle);
                self.notifier.success(SUCCESS_TEXT);
                log::info!("organization created: {}", org.name);
                SubmitOutcome::Created(org)
            }
            Err(err) => {
                let text = err.display_text(FAILURE_FALLBACK_TEXT);
                log::warn!("create organization failed: {}", text);
                if !err.field_errors.is_empty() {
                    form.set_errors(err.field_errors);
                }
                form.set_phase(SubmitPhase::Failed);
                self.notifier.failure(&text);
                SubmitOutcome::Failed(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_organization::aggregate::ValidatedName;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeForm {
        name: RefCell<String>,
        errors: RefCell<Vec<FieldError>>,
        phase: Cell<SubmitPhase>,
        open: Cell<bool>,
    }

    impl FakeForm {
        fn opened_with(name: &str) -> Rc<Self> {
            let form = Self::default();
            *form.name.borrow_mut() = name.to_string();
            form.open.set(true);
            Rc::new(form)
        }
    }

    impl CreateOrgForm for Rc<FakeForm> {
        fn name(&self) -> String {
            self.name.borrow().clone()
        }
        fn set_errors(&self, errors: Vec<FieldError>) {
            *self.errors.borrow_mut() = errors;
        }
        fn phase(&self) -> SubmitPhase {
            self.phase.get()
        }
        fn set_phase(&self, phase: SubmitPhase) {
            self.phase.set(phase);
        }
        fn close(&self) {
            self.open.set(false);
        }
        fn reset(&self) {
            self.name.borrow_mut().clear();
            self.errors.borrow_mut().clear();
        }
    }

    struct FakeCreator {
        form: Rc<FakeForm>,
        result: Result<(), OperationError>,
        calls: Rc<RefCell<Vec<String>>>,
        phase_seen: Cell<Option<SubmitPhase>>,
    }

    impl OrganizationCreator for FakeCreator {
        async fn create(
            &self,
            request: &CreateOrganizationRequest,
        ) -> Result<Organization, OperationError> {
            self.calls.borrow_mut().push(request.name.clone());
            self.phase_seen.set(Some(self.form.phase.get()));
            self.result.clone().map(|_| {
                let name: ValidatedName = request.validate().unwrap();
                Organization::new_for_insert(name)
            })
        }
    }

    struct FakeRefresher {
        form: Rc<FakeForm>,
        refreshed: Cell<usize>,
        phase_seen: Cell<Option<SubmitPhase>>,
        open_seen: Cell<Option<bool>>,
    }

    impl ViewRefresher for FakeRefresher {
        async fn refresh(&self) {
            self.refreshed.set(self.refreshed.get() + 1);
            self.phase_seen.set(Some(self.form.phase.get()));
            self.open_seen.set(Some(self.form.open.get()));
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        successes: RefCell<Vec<String>>,
        failures: RefCell<Vec<String>>,
    }

    impl Notifier for FakeNotifier {
        fn success(&self, text: &str) {
            self.successes.borrow_mut().push(text.to_string());
        }
        fn failure(&self, text: &str) {
            self.failures.borrow_mut().push(text.to_string());
        }
    }

    fn flow_for(
        form: &Rc<FakeForm>,
        result: Result<(), OperationError>,
    ) -> CreateOrgFlow<FakeCreator, FakeRefresher, FakeNotifier> {
        CreateOrgFlow::new(
            FakeCreator {
                form: form.clone(),
                result,
                calls: Rc::new(RefCell::new(Vec::new())),
                phase_seen: Cell::new(None),
            },
            FakeRefresher {
                form: form.clone(),
                refreshed: Cell::new(0),
                phase_seen: Cell::new(None),
                open_seen: Cell::new(None),
            },
            FakeNotifier::default(),
        )
    }

    #[test]
    fn test_success_closes_resets_and_notifies() {
        let form = FakeForm::opened_with("Acme");
        let flow = flow_for(&form, Ok(()));

        let outcome = block_on(flow.submit(&form));

        assert!(matches!(outcome, SubmitOutcome::Created(ref org) if org.name == "Acme"));
        assert!(!form.open.get());
        assert_eq!(*form.name.borrow(), "");
        assert!(!form.phase.get().is_pending());
        assert_eq!(*flow.notifier.successes.borrow(), vec![SUCCESS_TEXT]);
        assert!(flow.notifier.failures.borrow().is_empty());
        assert_eq!(*flow.creator.calls.borrow(), vec!["Acme"]);
    }

    #[test]
    fn test_pending_spans_mutation_and_refresh() {
        let form = FakeForm::opened_with("Acme");
        let flow = flow_for(&form, Ok(()));

        block_on(flow.submit(&form));

        assert_eq!(flow.creator.phase_seen.get(), Some(SubmitPhase::Submitting));
        assert_eq!(flow.refresher.phase_seen.get(), Some(SubmitPhase::Refreshing));
        assert!(SubmitPhase::Submitting.is_pending());
        assert!(SubmitPhase::Refreshing.is_pending());
        // the dialog closes only after the refresh finished
        assert_eq!(flow.refresher.open_seen.get(), Some(true));
        assert_eq!(flow.refresher.refreshed.get(), 1);
    }

    #[test]
    fn test_trimmed_name_is_sent() {
        let form = FakeForm::opened_with("   Acme  ");
        let flow = flow_for(&form, Ok(()));

        block_on(flow.submit(&form));

        assert_eq!(*flow.creator.calls.borrow(), vec!["Acme"]);
    }

    #[test]
    fn test_rejection_keeps_dialog_open_and_value() {
        let form = FakeForm::opened_with("Acme");
        let flow = flow_for(&form, Err(OperationError::with_message("Name taken")));

        let outcome = block_on(flow.submit(&form));

        assert_eq!(outcome, SubmitOutcome::Failed("Name taken".to_string()));
        assert!(form.open.get());
        assert_eq!(*form.name.borrow(), "Acme");
        assert_eq!(form.phase.get(), SubmitPhase::Failed);
        assert!(!form.phase.get().is_pending());
        assert_eq!(*flow.notifier.failures.borrow(), vec!["Name taken"]);
        assert!(flow.notifier.successes.borrow().is_empty());
        assert_eq!(flow.refresher.refreshed.get(), 0);
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let form = FakeForm::opened_with("Acme");
        let flow = flow_for(&form, Err(OperationError::without_message()));

        let outcome = block_on(flow.submit(&form));

        assert_eq!(outcome, SubmitOutcome::Failed(FAILURE_FALLBACK_TEXT.to_string()));
        assert_eq!(*flow.notifier.failures.borrow(), vec![FAILURE_FALLBACK_TEXT]);
    }

    #[test]
    fn test_blank_message_uses_fallback() {
        let err = OperationError::with_message("   ");
        assert_eq!(err.display_text(FAILURE_FALLBACK_TEXT), FAILURE_FALLBACK_TEXT);
    }

    #[test]
    fn test_invalid_names_never_reach_creator() {
        let too_long = "x".repeat(51);
        for name in ["", "ab", "  ab  ", too_long.as_str()] {
            let form = FakeForm::opened_with(name);
            let flow = flow_for(&form, Ok(()));

            let outcome = block_on(flow.submit(&form));

            assert!(matches!(outcome, SubmitOutcome::Invalid(_)), "{name:?}");
            assert!(flow.creator.calls.borrow().is_empty());
            assert_eq!(form.errors.borrow().len(), 1);
            assert_eq!(form.errors.borrow()[0].field, "name");
            assert_eq!(form.phase.get(), SubmitPhase::Idle);
            assert!(form.open.get());
            assert!(flow.notifier.failures.borrow().is_empty());
        }
    }

    #[test]
    fn test_resubmit_after_failure() {
        let form = FakeForm::opened_with("Acme");
        let failing = flow_for(&form, Err(OperationError::with_message("Name taken")));
        block_on(failing.submit(&form));

        *form.name.borrow_mut() = "Acme 2".to_string();
        let ok = flow_for(&form, Ok(()));
        let outcome = block_on(ok.submit(&form));

        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        assert!(!form.open.get());
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let form = FakeForm::opened_with("Acme");
        let flow = flow_for(&form, Ok(()));

        let request = flow.prepare(&form).unwrap();
        assert!(form.phase.get().is_pending());
        assert_eq!(flow.prepare(&form), Err(SubmitOutcome::Ignored));

        block_on(flow.execute(&form, request));
        assert_eq!(flow.creator.calls.borrow().len(), 1);
    }

    #[test]
    fn test_server_field_errors_are_shown() {
        let form = FakeForm::opened_with("Acme");
        let err = OperationError {
            message: Some("Name must be at least 3 characters long".into()),
            field_errors: vec![FieldError::new("name", "Name must be at least 3 characters long")],
        };
        let flow = flow_for(&form, Err(err));

        block_on(flow.submit(&form));

        assert_eq!(form.errors.borrow().len(), 1);
    }

    #[test]
    fn test_validation_clears_previous_errors() {
        let form = FakeForm::opened_with("ab");
        let flow = flow_for(&form, Ok(()));
        block_on(flow.submit(&form));
        assert_eq!(form.errors.borrow().len(), 1);

        *form.name.borrow_mut() = "abc".to_string();
        flow.prepare(&form).unwrap();
        assert!(form.errors.borrow().is_empty());
    }
}
