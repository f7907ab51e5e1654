use serde::{Deserialize, Serialize};

use crate::model::level::Level;

/// Authorization tag stored on a profile document under the wire name
/// `type`. Anything the store holds that is not the admin tag deserializes
/// as `Learner`, so an unexpected tag can never open the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    Admin,
    #[default]
    Learner,
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        if tag == "Admin" { Role::Admin } else { Role::Learner }
    }
}

/// Profile document in the `users` collection, keyed by the identity id the
/// provider issued. Unlike the content entities, the id is also stored in
/// the document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default)]
    pub role: Role,
    #[serde(default)]
    pub level: Level,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_tag_round_trips_under_the_type_wire_name() {
        let profile = UserProfile {
            id: "uid-1".to_string(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            role: Role::Admin,
            level: Level::Beginner,
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["type"], "Admin");

        let back: UserProfile = serde_json::from_value(json).unwrap();
        assert!(back.is_admin());
    }

    #[test]
    fn unknown_authorization_tag_is_not_admin() {
        let doc = serde_json::json!({
            "id": "uid-2",
            "name": "B",
            "email": "b@x.com",
            "type": "Moderator",
            "level": "Advanced"
        });
        let profile: UserProfile = serde_json::from_value(doc).unwrap();
        assert_eq!(profile.role, Role::Learner);
        assert!(!profile.is_admin());
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let doc = serde_json::json!({ "id": "uid-3" });
        let profile: UserProfile = serde_json::from_value(doc).unwrap();
        assert_eq!(profile.level, Level::Beginner);
        assert!(!profile.is_admin());
        assert!(profile.created_at.is_none());
    }
}
