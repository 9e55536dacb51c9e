use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::common::{AggregateId, EntityMetadata, FieldError};

/// Минимальная длина наименования (после trim)
pub const NAME_MIN_LEN: usize = 3;
/// Максимальная длина наименования (после trim)
pub const NAME_MAX_LEN: usize = 50;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор организации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizationId(pub Uuid);

impl OrganizationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for OrganizationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrganizationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Организация (рабочее пространство команды)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Organization {
    /// Создать новую организацию из уже провалидированного наименования
    pub fn new_for_insert(name: ValidatedName) -> Self {
        Self {
            id: OrganizationId::new_v4(),
            name: name.into_inner(),
            metadata: EntityMetadata::new(),
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Ключ для сравнения наименований без учёта регистра
    pub fn name_key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

/// Нормализованное наименование: trim + нижний регистр
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Наименование, прошедшее валидацию (уже без пробелов по краям)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedName(String);

impl ValidatedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Результат валидации формы: либо чистое значение, либо ошибки по полям
pub type ValidationResult = Result<ValidatedName, Vec<FieldError>>;

/// Запрос на создание организации
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
}

impl CreateOrganizationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Валидация: trim, длина от 3 до 50 символов
    pub fn validate(&self) -> ValidationResult {
        let trimmed = self.name.trim();
        let len = trimmed.chars().count();

        if len < NAME_MIN_LEN {
            return Err(vec![FieldError::new(
                "name",
                format!("Name must be at least {} characters long", NAME_MIN_LEN),
            )]);
        }
        if len > NAME_MAX_LEN {
            return Err(vec![FieldError::new(
                "name",
                format!("Name must be at most {} characters long", NAME_MAX_LEN),
            )]);
        }

        Ok(ValidatedName(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_whitespace() {
        let req = CreateOrganizationRequest::new("   Acme  ");
        assert_eq!(req.validate().unwrap().as_str(), "Acme");
    }

    #[test]
    fn test_validate_too_short() {
        for name in ["", "ab", "  ab  ", "       "] {
            let errors = CreateOrganizationRequest::new(name).validate().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "name");
            assert_eq!(errors[0].message, "Name must be at least 3 characters long");
        }
    }

    #[test]
    fn test_validate_too_long() {
        let name = "x".repeat(51);
        let errors = CreateOrganizationRequest::new(name).validate().unwrap_err();
        assert_eq!(errors[0].message, "Name must be at most 50 characters long");
    }

    #[test]
    fn test_validate_bounds_inclusive() {
        assert!(CreateOrganizationRequest::new("abc").validate().is_ok());
        assert!(CreateOrganizationRequest::new("x".repeat(50)).validate().is_ok());
        // пробелы по краям не учитываются в длине
        let padded = format!("  {}  ", "x".repeat(50));
        assert!(CreateOrganizationRequest::new(padded).validate().is_ok());
    }

    #[test]
    fn test_validate_counts_chars_not_bytes() {
        // 3 символа кириллицы = 6 байт
        assert!(CreateOrganizationRequest::new("Рог").validate().is_ok());
        assert!(CreateOrganizationRequest::new("ж".repeat(50)).validate().is_ok());
    }

    #[test]
    fn test_organization_serializes_flat() {
        let org = Organization::new_for_insert(
            CreateOrganizationRequest::new("Acme").validate().unwrap(),
        );
        let json = serde_json::to_value(&org).unwrap();
        assert_eq!(json["name"], "Acme");
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["version"], 0);

        let back: Organization = serde_json::from_value(json).unwrap();
        assert_eq!(back, org);
    }

    #[test]
    fn test_name_key_is_case_insensitive() {
        let org = Organization::new_for_insert(
            CreateOrganizationRequest::new(" ACME ").validate().unwrap(),
        );
        assert_eq!(org.name_key(), normalize_name("acme"));
    }
}
