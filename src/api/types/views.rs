//! Outbound user views
//!
//! Views never carry the password or its hash.

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// Public profile of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub name: String,
    pub email: String,
}

impl UserView {
    /// Create a view, trimming the name
    pub fn new(name: &str, email: impl Into<String>) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.into(),
        }
    }

    /// Create a view from a domain user
    pub fn from_user(user: &User) -> Self {
        Self::new(user.name(), user.email())
    }
}

/// Token issued on registration or login, optionally with the profile
///
/// A missing `user` is a valid state, e.g. when a token is reissued without
/// disclosing the profile again; it is omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthView {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserView>,
}

impl AuthView {
    pub fn new(token: impl Into<String>, user: Option<UserView>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::MockPasswordHasher;

    #[test]
    fn test_user_view() {
        let cases = [
            ("João Silva", "joao@example.com", "João Silva"),
            ("  Maria Oliveira  ", "maria@example.com", "Maria Oliveira"),
            ("", "empty@example.com", ""),
        ];

        for (name, email, expected_name) in cases {
            let view = UserView::new(name, email);
            assert_eq!(view.name, expected_name);
            assert_eq!(view.email, email);
        }
    }

    #[test]
    fn test_user_view_from_created_user() {
        let user =
            User::create("  Ana  ", "a@b.com", "secret1", &MockPasswordHasher::new()).unwrap();

        let view = UserView::from_user(&user);
        assert_eq!(view.name, "Ana");
        assert_eq!(view.email, "a@b.com");

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("secret1"));
        assert!(!json.contains(user.password_hash()));
    }

    #[test]
    fn test_auth_view_with_user() {
        let user = UserView::new("João Silva", "joao@example.com");
        let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...";

        let view = AuthView::new(token, Some(user.clone()));
        assert_eq!(view.token, token);
        assert_eq!(view.user, Some(user));
    }

    #[test]
    fn test_auth_view_without_user() {
        let view = AuthView::new("token", None);
        assert!(view.user.is_none());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json, serde_json::json!({ "token": "token" }));
    }
}
