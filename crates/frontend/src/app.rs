use crate::domain::a002_organization::ui::list::state::OrganizationsStore;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastService, ToastViewport};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());
    provide_context(OrganizationsStore::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <ToastViewport />
        </ConfigProvider>
    }
}
