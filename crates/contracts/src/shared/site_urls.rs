//! Route paths of the application, used by the sidebar navigation table
//! and the frontend router.

pub const BLOG: &str = "/blog";
pub const SUPPORT: &str = "/support";

pub mod admin {
    pub const DASHBOARD: &str = "/admin/dashboard";
    pub const USERS: &str = "/admin/users";
    pub const BLOG: &str = "/admin/blog";
    pub const SETTINGS: &str = "/admin/settings";
    pub const FEEDBACK: &str = "/admin/feedback";
}

pub mod dashboard {
    pub const HOME: &str = "/dashboard";
    pub const DATABASE: &str = "/dashboard/database";
    pub const TEAM: &str = "/dashboard/team";
    pub const NOTIFICATIONS: &str = "/dashboard/notifications";

    pub mod projects {
        pub const HOME: &str = "/dashboard/projects";
        pub const NEW: &str = "/dashboard/projects/new";
    }

    pub mod tasks {
        pub const HOME: &str = "/dashboard/tasks";
        pub const NEW: &str = "/dashboard/tasks/new";
    }
}

pub mod docs {
    pub const HOME: &str = "/docs";
}
