use serde::{Deserialize, Serialize};

use crate::model::level::Level;
use crate::validation::{self, ValidationError};

/// A top-level content module in the `modules` collection.
///
/// The struct doubles as the form screen's in-memory draft: screens mutate
/// a copy field by field and hand it back to the document gateway on save.
/// The `id` lives on the document key, never in the document body; list
/// screens fill it in from the collection snapshot. Timestamps are written
/// by the store itself (the gateway requests server values), so on a fresh
/// draft they are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl Module {
    /// Submit guard for the form screen. The level is already constrained
    /// by its enum; only the free-text title needs checking.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::check_title(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_module() -> Module {
        Module {
            title: "Ownership".to_string(),
            level: Level::Intermediate,
            ..Module::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(valid_module().validate(), Ok(()));
    }

    #[test]
    fn empty_title_is_rejected() {
        let module = Module {
            title: String::new(),
            ..valid_module()
        };
        assert_eq!(module.validate(), Err(ValidationError::TitleMissing));
    }

    #[test]
    fn short_title_is_rejected() {
        let module = Module {
            title: "ab".to_string(),
            ..valid_module()
        };
        assert_eq!(module.validate(), Err(ValidationError::TitleTooShort));
    }

    #[test]
    fn id_and_empty_optionals_stay_out_of_the_document_body() {
        let mut module = valid_module();
        module.id = "-Nabc".to_string();
        let json = serde_json::to_value(&module).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("thumbnail_url").is_none());
        assert!(json.get("createdAt").is_none());
        assert_eq!(json["title"], "Ownership");
        assert_eq!(json["level"], "Intermediate");
    }

    #[test]
    fn stored_timestamps_survive_a_round_trip() {
        let doc = serde_json::json!({
            "title": "Ownership",
            "level": "Advanced",
            "thumbnail_url": "https://cdn.example/m.png",
            "createdAt": 1700000000000u64,
            "updatedAt": 1700000001000u64
        });
        let module: Module = serde_json::from_value(doc).unwrap();
        assert_eq!(module.created_at, Some(1_700_000_000_000));
        let back = serde_json::to_value(&module).unwrap();
        assert_eq!(back["createdAt"], 1_700_000_000_000u64);
    }
}
