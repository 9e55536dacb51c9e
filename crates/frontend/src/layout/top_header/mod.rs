//! TopHeader component - application top bar: sidebar toggle, title,
//! admin section toggle and organization count.

use crate::domain::a002_organization::ui::list::state::use_organizations;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let organizations = use_organizations();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Starter Kit"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__meta">
                    {icon("building")}
                    {move || organizations.items.with(|items| items.len())}
                </span>
                <button
                    class="top-header__icon-btn"
                    class:top-header__icon-btn--active=move || ctx.show_admin.get()
                    on:click=move |_| ctx.toggle_admin()
                    title=move || if ctx.show_admin.get() { "Hide admin section" } else { "Show admin section" }
                >
                    {icon("shield")}
                </button>
            </div>
        </div>
    }
}
