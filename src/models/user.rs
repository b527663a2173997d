//! Panel users and login payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_access: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_user() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","email":"admin@dreamworks.com","role":"ADMIN","status":"ACTIVE",
                "createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(user.is_admin());
        assert!(user.is_active());
        assert!(user.last_access.is_none());
    }

    #[test]
    fn test_login_response() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":"jwt","user":{"id":1,"email":"a@b.c","role":"USER","status":"INACTIVE"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token, "jwt");
        assert!(!resp.user.is_admin());
    }
}
