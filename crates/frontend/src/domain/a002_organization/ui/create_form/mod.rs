//! "Create Organization" dialog
//!
//! - flow.rs: submit state machine and its seams (no browser dependencies)
//! - model.rs: browser implementations of the seams
//! - view_model.rs: signals + commands
//! - view.rs: Leptos component (pure UI)

mod flow;
mod model;
mod view;
mod view_model;

pub use flow::{
    CreateOrgFlow, CreateOrgForm, Notifier, OperationError, OrganizationCreator, SubmitOutcome,
    SubmitPhase, ViewRefresher, FAILURE_FALLBACK_TEXT, SUCCESS_TEXT,
};
pub use view::CreateOrgDialog;
pub use view_model::CreateOrgFormViewModel;
