use super::view_model::CreateOrgFormViewModel;
use crate::domain::a002_organization::ui::list::state::use_organizations;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::toast::use_toasts;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn CreateOrgDialog(
    /// Dialog visibility, owned by the caller (mirrors the dialog's open/close)
    open: RwSignal<bool>,
) -> impl IntoView {
    let vm = CreateOrgFormViewModel::new(open);
    let store = use_organizations();
    let toasts = use_toasts();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(store, toasts);
    };

    view! {
        <Show when=move || open.get()>
            <ModalFrame
                on_close=Callback::new(move |_| vm.close_requested())
                modal_class="create-org-dialog"
                labelled_by="create-org-title"
            >
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title" id="create-org-title">"Create Organization"</h2>
                        <p class="modal-description">
                            "Create a new organization for your team to collaborate and work together."
                        </p>
                    </div>
                    <button
                        class="button button--icon modal__close"
                        title="Close"
                        disabled=move || vm.is_pending()
                        on:click=move |_| vm.close_requested()
                    >
                        {icon("x")}
                    </button>
                </div>
                <form class="modal-body" on:submit=on_submit novalidate=true>
                    <Input
                        id="create-org-name"
                        label="Org Name"
                        placeholder="Ali's Org"
                        description="Enter the name of your organization."
                        value=vm.name
                        on_input=Callback::new(move |v: String| vm.set_name(v))
                        error=Signal::derive(move || vm.name_error())
                        disabled=Signal::derive(move || Some(vm.is_pending()))
                        autofocus=true
                    />
                    <div class="modal-footer">
                        <Button
                            button_type="submit"
                            class="create-org-dialog__submit"
                            loading=Signal::derive(move || Some(vm.is_pending()))
                        >
                            <span>"Create"</span>
                        </Button>
                    </div>
                </form>
            </ModalFrame>
        </Show>
    }
}
