use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{DomainEntity, EntityId, FieldError};
use crate::enums::{EntityStatus, UserRole};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl EntityId for UserId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UserId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Пользователь системы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: EntityStatus,

    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,

    #[serde(rename = "lastLogin", skip_serializing_if = "Option::is_none")]
    pub last_login: Option<NaiveDate>,
}

impl User {
    /// Создать нового пользователя из формы; роль/статус по умолчанию
    /// user/active, как в форме создания
    pub fn new_for_insert(dto: &UserDto, today: NaiveDate) -> Self {
        Self {
            id: UserId::new_v4(),
            name: dto.name.clone().unwrap_or_default(),
            email: dto.email.clone().unwrap_or_default(),
            role: dto.role.unwrap_or(UserRole::User),
            status: dto.status.unwrap_or(EntityStatus::Active),
            created_at: today,
            last_login: None,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

impl DomainEntity for User {
    type Id = UserId;
    type Patch = UserDto;

    fn id(&self) -> UserId {
        self.id
    }

    fn apply_patch(&mut self, patch: &UserDto) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы создания/редактирования пользователя. Незаполненные поля
/// при обновлении не трогают агрегат.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<EntityStatus>,
}

impl UserDto {
    /// Валидация формы; пустой список означает успех
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.as_deref().unwrap_or("").trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.chars().count() < 2 {
            errors.push(FieldError::new("name", "Name must be at least 2 characters"));
        }

        let email = self.email.as_deref().unwrap_or("").trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !is_well_formed_email(email) {
            errors.push(FieldError::new("email", "Invalid email"));
        }

        errors
    }
}

/// Достаточная для формы проверка: непустые local@domain, в домене есть точка
pub(crate) fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    domain.contains('.') && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::message_for;

    fn valid_dto() -> UserDto {
        UserDto {
            name: Some("John Doe".to_string()),
            email: Some("john@example.com".to_string()),
            role: Some(UserRole::Admin),
            status: Some(EntityStatus::Active),
        }
    }

    #[test]
    fn test_valid_dto_passes() {
        assert!(valid_dto().validate().is_empty());
    }

    #[test]
    fn test_name_rules() {
        let mut dto = valid_dto();
        dto.name = None;
        assert_eq!(
            message_for(&dto.validate(), "name"),
            Some("Name is required")
        );

        dto.name = Some("J".to_string());
        assert_eq!(
            message_for(&dto.validate(), "name"),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_email_rules() {
        let mut dto = valid_dto();
        for bad in ["", "plainaddress", "a@b", "a@.com", "a b@example.com"] {
            dto.email = Some(bad.to_string());
            assert!(
                message_for(&dto.validate(), "email").is_some(),
                "expected error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_new_for_insert_defaults() {
        let dto = UserDto {
            name: Some("Jane".to_string()),
            email: Some("jane@example.com".to_string()),
            role: None,
            status: None,
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let user = User::new_for_insert(&dto, today);
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.status, EntityStatus::Active);
        assert_eq!(user.created_at, today);
        assert!(user.last_login.is_none());
    }

    #[test]
    fn test_apply_patch_skips_unset_fields() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let mut user = User::new_for_insert(&valid_dto(), today);
        let id_before = user.id;

        user.apply_patch(&UserDto {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        });

        assert_eq!(user.id, id_before);
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email, "new@example.com");
    }
}
