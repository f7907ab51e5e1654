use serde::{Deserialize, Serialize};

use crate::model::level::Level;
use crate::model::module::Module;
use crate::validation::{self, ValidationError};

/// A lesson inside a module, stored in the `sub_modules` collection.
///
/// `module_title` is a denormalized copy of the parent's title taken at the
/// moment the parent was selected; it is not kept in sync if the parent is
/// later renamed. The wire names for the content body and asset fields are
/// inherited from the store's existing documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubModule {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub module_id: String,
    #[serde(default)]
    pub module_title: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thumbnail_url: String,
    /// Markdown content body.
    #[serde(rename = "sub_module_content", default)]
    pub content: String,
    #[serde(rename = "watch_videos", default, skip_serializing_if = "String::is_empty")]
    pub video_url: String,
    #[serde(rename = "pdf_note", default, skip_serializing_if = "String::is_empty")]
    pub document_url: String,
    #[serde(rename = "additional_note", default, skip_serializing_if = "String::is_empty")]
    pub extra_document_url: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<u64>,
}

impl SubModule {
    /// Copies the parent's identity and title into the draft and seeds the
    /// level from the parent. The level stays user-overridable afterwards;
    /// the title copy is what later renders in list screens even if the
    /// parent is renamed.
    pub fn adopt_parent(&mut self, parent: &Module) {
        self.module_id = parent.id.clone();
        self.module_title = parent.title.clone();
        self.level = parent.level;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.module_id.is_empty() {
            return Err(ValidationError::ParentModuleMissing);
        }
        validation::check_title(&self.title)?;
        if !self.video_url.is_empty() {
            validation::check_video_host(&self.video_url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_sub_module() -> SubModule {
        SubModule {
            module_id: "-Nmod".to_string(),
            module_title: "Ownership".to_string(),
            title: "Borrowing".to_string(),
            level: Level::Beginner,
            ..SubModule::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(valid_sub_module().validate(), Ok(()));
    }

    #[test]
    fn parent_module_is_required() {
        let sub = SubModule {
            module_id: String::new(),
            ..valid_sub_module()
        };
        assert_eq!(sub.validate(), Err(ValidationError::ParentModuleMissing));
    }

    #[test]
    fn video_url_must_use_an_allowed_host() {
        let mut sub = valid_sub_module();
        sub.video_url = "https://www.youtube.com/watch?v=abc".to_string();
        assert_eq!(sub.validate(), Ok(()));

        sub.video_url = "https://videos.example.com/abc".to_string();
        assert_eq!(sub.validate(), Err(ValidationError::VideoHostNotAllowed));
    }

    #[test]
    fn empty_video_url_is_fine() {
        assert_eq!(valid_sub_module().validate(), Ok(()));
    }

    #[test]
    fn adopt_parent_copies_title_and_seeds_level() {
        let parent = Module {
            id: "-Nmod2".to_string(),
            title: "Async".to_string(),
            level: Level::Advanced,
            ..Module::default()
        };
        let mut sub = valid_sub_module();
        sub.adopt_parent(&parent);
        assert_eq!(sub.module_id, "-Nmod2");
        assert_eq!(sub.module_title, "Async");
        assert_eq!(sub.level, Level::Advanced);

        // user can still override the seeded level afterwards
        sub.level = Level::Beginner;
        assert_eq!(sub.module_title, "Async");
    }

    #[test]
    fn wire_names_match_the_existing_store_documents() {
        let mut sub = valid_sub_module();
        sub.content = "# Intro".to_string();
        sub.video_url = "https://youtu.be/abc".to_string();
        sub.document_url = "https://cdn.example/a.pdf".to_string();
        sub.extra_document_url = "https://cdn.example/b.pdf".to_string();

        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["sub_module_content"], "# Intro");
        assert_eq!(json["watch_videos"], "https://youtu.be/abc");
        assert_eq!(json["pdf_note"], "https://cdn.example/a.pdf");
        assert_eq!(json["additional_note"], "https://cdn.example/b.pdf");
        assert!(json.get("id").is_none());
    }
}
