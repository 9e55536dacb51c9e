//! Sidebar rendering the navigation table from `contracts::shared::navigation`.
//! Which sections are visible is decided by `filter_nav_items`.

use crate::shared::icons::icon;
use contracts::shared::navigation::{filter_nav_items, NavigationItem, NavigationSection, SubItem};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar(
    /// Only these sections (all when empty)
    #[prop(optional)]
    included_ids: Vec<&'static str>,
    /// Sections to hide, applied after `included_ids`
    #[prop(optional, into)]
    remove_ids: Signal<Vec<&'static str>>,
) -> impl IntoView {
    let included = StoredValue::new(included_ids);
    let sections = move || {
        let removed = remove_ids.get();
        included.with_value(|inc| filter_nav_items(inc, &removed))
    };

    view! {
        <nav class="app-sidebar__content">
            {move || sections()
                .into_iter()
                .map(|section| view! { <SidebarSection section=section /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn SidebarSection(section: &'static NavigationSection) -> impl IntoView {
    view! {
        <div class="app-sidebar__section" data-section=section.id>
            {section.show_label.then(|| view! {
                <div class="app-sidebar__section-label">{section.label}</div>
            })}
            {section.items.iter().map(|item| match item {
                NavigationItem::Link { label, icon: icon_name, href, disabled } => view! {
                    <SidebarLink label=*label icon_name=*icon_name href=*href disabled=*disabled indent=12 />
                }.into_any(),
                NavigationItem::Group { label, icon: icon_name, sub_menu, disabled } => view! {
                    <SidebarGroup label=*label icon_name=*icon_name sub_menu=sub_menu disabled=*disabled />
                }.into_any(),
            }).collect_view()}
        </div>
    }
}

#[component]
fn SidebarLink(
    label: &'static str,
    icon_name: &'static str,
    href: &'static str,
    disabled: bool,
    indent: u32,
) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.get() == href;
    let padding = format!("{indent}px");

    if disabled {
        return view! {
            <div class="app-sidebar__item app-sidebar__item--disabled" style:padding-left=padding aria-disabled="true">
                <div class="app-sidebar__item-content">
                    {icon(icon_name)}
                    <span>{label}</span>
                </div>
            </div>
        }
        .into_any();
    }

    view! {
        <A href=href attr:class="app-sidebar__link">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=is_active
                style:padding-left=padding
            >
                <div class="app-sidebar__item-content">
                    {icon(icon_name)}
                    <span>{label}</span>
                </div>
            </div>
        </A>
    }
    .into_any()
}

#[component]
fn SidebarGroup(
    label: &'static str,
    icon_name: &'static str,
    sub_menu: &'static [SubItem],
    disabled: bool,
) -> impl IntoView {
    let location = use_location();
    // a group starts expanded when one of its links is the current page
    let expanded = RwSignal::new(
        location
            .pathname
            .with_untracked(|path| sub_menu.iter().any(|s| s.href == path.as_str())),
    );

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--disabled=disabled
                style:padding-left="12px"
                on:click=move |_| {
                    if !disabled {
                        expanded.update(|v| *v = !*v);
                    }
                }
            >
                <div class="app-sidebar__item-content">
                    {icon(icon_name)}
                    <span>{label}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=move || expanded.get()
                >
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=move || expanded.get()>
                <div class="app-sidebar__children">
                    {sub_menu.iter().map(|s| view! {
                        <SidebarLink label=s.label icon_name=s.icon href=s.href disabled=s.disabled indent=28 />
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
