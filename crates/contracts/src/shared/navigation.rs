//! Sidebar navigation table.
//!
//! Every section has a unique `id` (see [`nav_ids`]), a label, a flag telling
//! whether the label is rendered, and an ordered list of items. An item is
//! either a direct link or an expandable group of sub-links.
//!
//! To show only part of the sidebar use [`filter_nav_items`].

use crate::shared::site_urls;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Идентификаторы секций
pub mod nav_ids {
    pub const ADMIN: &str = "admin";
    pub const GENERAL: &str = "general";
    pub const RESOURCES: &str = "resources";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavigationItem {
    Link {
        label: &'static str,
        icon: &'static str,
        href: &'static str,
        disabled: bool,
    },
    Group {
        label: &'static str,
        icon: &'static str,
        #[serde(rename = "subMenu")]
        sub_menu: Vec<SubItem>,
        disabled: bool,
    },
}

impl NavigationItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavigationItem::Link { label, .. } | NavigationItem::Group { label, .. } => label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavigationItem::Link { icon, .. } | NavigationItem::Group { icon, .. } => icon,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            NavigationItem::Link { disabled, .. } | NavigationItem::Group { disabled, .. } => {
                *disabled
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSection {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(rename = "showLabel")]
    pub show_label: bool,
    pub items: Vec<NavigationItem>,
}

fn link(label: &'static str, icon: &'static str, href: &'static str) -> NavigationItem {
    NavigationItem::Link {
        label,
        icon,
        href,
        disabled: false,
    }
}

fn group(label: &'static str, icon: &'static str, sub_menu: Vec<SubItem>) -> NavigationItem {
    NavigationItem::Group {
        label,
        icon,
        sub_menu,
        disabled: false,
    }
}

fn sub(label: &'static str, href: &'static str, icon: &'static str) -> SubItem {
    SubItem {
        label,
        href,
        icon,
        disabled: false,
    }
}

/// Полная таблица навигации, строится один раз при первом обращении
pub static NAVIGATION: Lazy<Vec<NavigationSection>> = Lazy::new(|| {
    vec![
        NavigationSection {
            id: nav_ids::ADMIN,
            label: "Admin",
            show_label: true,
            items: vec![
                link("Dashboard", "layout-dashboard", site_urls::admin::DASHBOARD),
                link("Users", "users", site_urls::admin::USERS),
                link("Blog", "pen-line", site_urls::admin::BLOG),
                link("Application Settings", "settings", site_urls::admin::SETTINGS),
                link("Feedback List", "help-circle", site_urls::admin::FEEDBACK),
            ],
        },
        NavigationSection {
            id: nav_ids::GENERAL,
            label: "General",
            show_label: true,
            items: vec![
                link("Dashboard", "layout-dashboard", site_urls::dashboard::HOME),
                group(
                    "Projects",
                    "activity",
                    vec![
                        sub("See Projects", site_urls::dashboard::projects::HOME, "list-checks"),
                        sub("Create Project", site_urls::dashboard::projects::NEW, "plus-circle"),
                    ],
                ),
                group(
                    "Tasks",
                    "check-square",
                    vec![
                        sub("See Tasks", site_urls::dashboard::tasks::HOME, "list-checks"),
                        sub("Create Task", site_urls::dashboard::tasks::NEW, "plus-circle"),
                    ],
                ),
                link("Database", "database", site_urls::dashboard::DATABASE),
                link("Team", "users", site_urls::dashboard::TEAM),
                link("Notifications", "bell", site_urls::dashboard::NOTIFICATIONS),
            ],
        },
        NavigationSection {
            id: nav_ids::RESOURCES,
            label: "Resources",
            show_label: true,
            items: vec![
                link("Docs", "book-text", site_urls::docs::HOME),
                link("Blog", "pen-line", site_urls::BLOG),
                link("Support", "help-circle", site_urls::SUPPORT),
            ],
        },
    ]
});

/// Filters the sidebar sections.
///
/// A non-empty `included_ids` keeps only the listed sections, then a non-empty
/// `remove_ids` drops the listed ones. Table order is always preserved and
/// unknown ids are ignored.
pub fn filter_nav_items(
    included_ids: &[&str],
    remove_ids: &[&str],
) -> Vec<&'static NavigationSection> {
    NAVIGATION
        .iter()
        .filter(|section| included_ids.is_empty() || included_ids.contains(&section.id))
        .filter(|section| remove_ids.is_empty() || !remove_ids.contains(&section.id))
        .collect()
}

/// Ищет подпись пункта меню по его адресу (для заголовков страниц)
pub fn label_for_href(href: &str) -> Option<&'static str> {
    NAVIGATION.iter().flat_map(|s| s.items.iter()).find_map(|item| match item {
        NavigationItem::Link { label, href: h, .. } if *h == href => Some(*label),
        NavigationItem::Group { sub_menu, .. } => sub_menu
            .iter()
            .find(|s| s.href == href)
            .map(|s| s.label),
        _ => None,
    })
}
