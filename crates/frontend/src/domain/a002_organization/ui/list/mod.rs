pub mod state;

use crate::domain::a002_organization::ui::create_form::CreateOrgDialog;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::use_organizations;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent, Spinner};

/// Список организаций с кнопкой создания
#[component]
pub fn OrganizationList() -> impl IntoView {
    let store = use_organizations();
    let dialog_open = RwSignal::new(false);

    // initial load
    spawn_local(store.reload());

    view! {
        <div class="page organization-list">
            <div class="page__header">
                <h2 class="page__title">"Organizations"</h2>
                <Button on_click=Callback::new(move |_| dialog_open.set(true))>
                    {icon("plus")}
                    <span>"Create organization"</span>
                </Button>
            </div>

            {move || store.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}

            <Show
                when=move || !(store.loading.get() && store.items.with(Vec::is_empty))
                fallback=|| view! { <div class="page__loading"><Spinner /></div> }
            >
                <Show
                    when=move || !store.items.with(Vec::is_empty)
                    fallback=|| view! {
                        <p class="page__empty">"No organizations yet. Create the first one."</p>
                    }
                >
                    <ul class="organization-list__items">
                        <For
                            each=move || store.items.get()
                            key=|org| org.id
                            children=|org| {
                                let created = org.metadata.created_at.format("%Y-%m-%d %H:%M").to_string();
                                view! {
                                    <li class="organization-list__item">
                                        {icon("building")}
                                        <span class="organization-list__name">{org.name}</span>
                                        <span class="organization-list__date">{created}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>

            <CreateOrgDialog open=dialog_open />
        </div>
    }
}
