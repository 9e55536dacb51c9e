use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::domain::a002_organization::OrganizationStore;
use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(store: Arc<OrganizationStore>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/organization",
            get(handlers::a002_organization::list_all).post(handlers::a002_organization::create),
        )
        .route(
            "/api/organization/testdata",
            post(handlers::a002_organization::insert_test_data),
        )
        .route(
            "/api/organization/:id",
            get(handlers::a002_organization::get_by_id),
        )
        .with_state(store)
}
