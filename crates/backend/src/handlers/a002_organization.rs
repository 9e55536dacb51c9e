use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_organization::aggregate::{
    CreateOrganizationRequest, Organization, OrganizationId,
};
use contracts::domain::common::AggregateId;
use std::sync::Arc;

use crate::domain::a002_organization::{service, OrganizationError, OrganizationStore};

/// GET /api/organization
pub async fn list_all(State(store): State<Arc<OrganizationStore>>) -> Json<Vec<Organization>> {
    Json(service::list_all(&store).await)
}

/// GET /api/organization/:id
pub async fn get_by_id(
    State(store): State<Arc<OrganizationStore>>,
    Path(id): Path<String>,
) -> Result<Json<Organization>, StatusCode> {
    let id = OrganizationId::from_string(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::get_by_id(&store, id).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(e.status()),
    }
}

/// POST /api/organization
pub async fn create(
    State(store): State<Arc<OrganizationStore>>,
    Json(request): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<Organization>), OrganizationError> {
    let org = service::create(&store, request).await?;
    Ok((StatusCode::CREATED, Json(org)))
}

/// POST /api/organization/testdata
pub async fn insert_test_data(State(store): State<Arc<OrganizationStore>>) -> StatusCode {
    match service::insert_test_data(&store).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("insert_test_data failed: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use contracts::domain::common::ApiErrorBody;

    async fn body_of(response: axum::response::Response) -> ApiErrorBody {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let store = Arc::new(OrganizationStore::new());
        let (status, Json(org)) = create(
            State(store.clone()),
            Json(CreateOrganizationRequest::new("Acme")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(org.name, "Acme");

        let Json(list) = list_all(State(store)).await;
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_maps_to_conflict_with_message() {
        let store = Arc::new(OrganizationStore::new());
        create(State(store.clone()), Json(CreateOrganizationRequest::new("Acme")))
            .await
            .unwrap();
        let err = create(State(store), Json(CreateOrganizationRequest::new("acme")))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_of(response).await.message.as_deref(), Some("Name taken"));
    }

    #[tokio::test]
    async fn test_validation_maps_to_bad_request_with_field_errors() {
        let store = Arc::new(OrganizationStore::new());
        let err = create(State(store), Json(CreateOrganizationRequest::new(" x ")))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert_eq!(
            body.message.as_deref(),
            Some("Name must be at least 3 characters long")
        );
        assert_eq!(body.errors[0].field, "name");
    }

    #[tokio::test]
    async fn test_get_by_id_bad_uuid() {
        let store = Arc::new(OrganizationStore::new());
        let result = get_by_id(State(store), Path("not-a-uuid".to_string())).await;
        assert_eq!(result.unwrap_err(), StatusCode::BAD_REQUEST);
    }
}
