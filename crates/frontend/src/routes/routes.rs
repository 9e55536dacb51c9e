use crate::domain::a002_organization::ui::list::OrganizationList;
use crate::layout::global_context::use_global_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use contracts::shared::navigation::label_for_href;
use contracts::shared::site_urls;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Page for a sidebar entry that has no dedicated screen yet
#[component]
fn SectionPage() -> impl IntoView {
    let location = use_location();
    let title = move || {
        let path = location.pathname.get();
        label_for_href(&path).unwrap_or("Not found").to_string()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">{title}</h2>
            </div>
            <p class="page__empty">{move || location.pathname.get()}</p>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();
    let hidden = Signal::derive(move || ctx.hidden_sections());

    view! {
        <Shell
            left=move || view! { <Sidebar remove_ids=hidden /> }.into_any()
            center=|| view! {
                <Routes fallback=|| view! { <SectionPage /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=site_urls::dashboard::HOME /> } />
                    <Route path=path!("/dashboard") view=OrganizationList />
                    <Route path=path!("/*any") view=SectionPage />
                </Routes>
            }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}
