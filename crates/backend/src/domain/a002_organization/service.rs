use super::error::OrganizationError;
use super::repository::OrganizationStore;
use contracts::domain::a002_organization::aggregate::{
    CreateOrganizationRequest, Organization, OrganizationId,
};

/// Создание новой организации
pub async fn create(
    store: &OrganizationStore,
    request: CreateOrganizationRequest,
) -> Result<Organization, OrganizationError> {
    // Валидация (та же, что и на клиенте)
    let name = request.validate().map_err(OrganizationError::Validation)?;

    let mut aggregate = Organization::new_for_insert(name);

    // Before write
    aggregate.before_write();

    if !store.insert_unique(&aggregate).await {
        tracing::info!("organization name already taken: {}", aggregate.name);
        return Err(OrganizationError::NameTaken);
    }

    tracing::info!(
        "organization created: {} ({})",
        aggregate.name,
        aggregate.to_string_id()
    );
    Ok(aggregate)
}

/// Получение организации по ID
pub async fn get_by_id(
    store: &OrganizationStore,
    id: OrganizationId,
) -> Result<Organization, OrganizationError> {
    store
        .get_by_id(id)
        .await
        .ok_or(OrganizationError::NotFound)
}

/// Получение списка всех организаций
pub async fn list_all(store: &OrganizationStore) -> Vec<Organization> {
    store.list_all().await
}

/// Вставка демонстрационных данных (пропускает уже существующие)
pub async fn insert_test_data(store: &OrganizationStore) -> anyhow::Result<usize> {
    let names = ["Acme Inc.", "Globex Corporation", "Initech"];

    let mut inserted = 0;
    for name in names {
        if store.exists_by_name(name).await {
            continue;
        }
        match create(store, CreateOrganizationRequest::new(name)).await {
            Ok(_) => inserted += 1,
            Err(OrganizationError::NameTaken) => {}
            Err(e) => return Err(anyhow::anyhow!("seed '{}' failed: {}", name, e)),
        }
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_trims_and_stores() {
        let store = OrganizationStore::new();
        let org = create(&store, CreateOrganizationRequest::new("  Acme  "))
            .await
            .unwrap();
        assert_eq!(org.name, "Acme");
        assert_eq!(store.count().await, 1);
        assert_eq!(get_by_id(&store, org.id).await.unwrap(), org);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_name() {
        let store = OrganizationStore::new();
        let err = create(&store, CreateOrganizationRequest::new("ab"))
            .await
            .unwrap_err();
        assert!(matches!(err, OrganizationError::Validation(_)));
        assert_eq!(err.to_string(), "Name must be at least 3 characters long");
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name_case_insensitive() {
        let store = OrganizationStore::new();
        create(&store, CreateOrganizationRequest::new("Acme"))
            .await
            .unwrap();
        let err = create(&store, CreateOrganizationRequest::new(" ACME"))
            .await
            .unwrap_err();
        assert!(matches!(err, OrganizationError::NameTaken));
        assert_eq!(err.to_string(), "Name taken");
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let store = OrganizationStore::new();
        let err = get_by_id(&store, OrganizationId::new_v4()).await.unwrap_err();
        assert!(matches!(err, OrganizationError::NotFound));
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let store = OrganizationStore::new();
        for name in ["beta", "Alpha", "gamma"] {
            create(&store, CreateOrganizationRequest::new(name))
                .await
                .unwrap();
        }
        let names: Vec<String> = list_all(&store).await.into_iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_insert_test_data_is_repeatable() {
        let store = OrganizationStore::new();
        assert_eq!(insert_test_data(&store).await.unwrap(), 3);
        assert_eq!(insert_test_data(&store).await.unwrap(), 0);
        assert_eq!(store.count().await, 3);
    }
}
