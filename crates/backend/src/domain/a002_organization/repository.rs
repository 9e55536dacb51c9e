use contracts::domain::a002_organization::aggregate::{normalize_name, Organization, OrganizationId};
use tokio::sync::RwLock;

/// Хранилище организаций в памяти процесса.
///
/// Проверка уникальности наименования и вставка выполняются под одной
/// блокировкой записи.
#[derive(Debug, Default)]
pub struct OrganizationStore {
    items: RwLock<Vec<Organization>>,
}

impl OrganizationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Все организации, отсортированные по наименованию без учёта регистра
    pub async fn list_all(&self) -> Vec<Organization> {
        let mut items = self.items.read().await.clone();
        items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        items
    }

    pub async fn get_by_id(&self, id: OrganizationId) -> Option<Organization> {
        self.items
            .read()
            .await
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    /// Вставка, если наименование ещё не занято.
    /// Возвращает `false`, если организация с таким наименованием уже есть.
    pub async fn insert_unique(&self, aggregate: &Organization) -> bool {
        let mut items = self.items.write().await;
        let key = aggregate.name_key();
        if items.iter().any(|o| o.name_key() == key) {
            return false;
        }
        items.push(aggregate.clone());
        true
    }

    pub async fn exists_by_name(&self, name: &str) -> bool {
        let key = normalize_name(name);
        self.items.read().await.iter().any(|o| o.name_key() == key)
    }

    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }
}
