use serde::{Deserialize, Serialize};

use crate::domain::common::FieldError;
use crate::domain::a001_user::aggregate::is_well_formed_email;
use crate::enums::{Language, UserRole};

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Login form payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Field-level validation; empty list means the form may be submitted
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.chars().count() < 2 {
            errors.push(FieldError::new("name", "Name must be at least 2 characters"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !is_well_formed_email(email) {
            errors.push(FieldError::new("email", "Invalid email"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        } else if self.password.chars().count() < 6 {
            errors.push(FieldError::new(
                "password",
                "Password must be at least 6 characters",
            ));
        }

        errors
    }
}

/// The preference subset persisted per browser. Field names match the
/// storage payload written by earlier releases, so existing entries
/// restore cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredPreferences {
    pub user: Option<AuthUser>,

    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,

    #[serde(rename = "darkMode")]
    pub dark_mode: bool,

    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::message_for;

    #[test]
    fn test_login_form_rules() {
        let form = LoginForm {
            name: "J".to_string(),
            email: "not-an-email".to_string(),
            password: "123".to_string(),
        };
        let errors = form.validate();
        assert_eq!(
            message_for(&errors, "name"),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(message_for(&errors, "email"), Some("Invalid email"));
        assert_eq!(
            message_for(&errors, "password"),
            Some("Password must be at least 6 characters")
        );

        let ok = LoginForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(ok.validate().is_empty());
    }

    #[test]
    fn test_preferences_storage_shape() {
        let prefs = StoredPreferences {
            user: Some(AuthUser {
                id: "1".to_string(),
                name: "John".to_string(),
                email: "john@example.com".to_string(),
                role: UserRole::Admin,
            }),
            is_authenticated: true,
            dark_mode: true,
            language: Language::Ar,
        };

        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"isAuthenticated\":true"));
        assert!(json.contains("\"darkMode\":true"));
        assert!(json.contains("\"language\":\"ar\""));

        let back: StoredPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
