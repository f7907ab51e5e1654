//! Component state for the sub-module form.
//!
//! Holds the draft being edited, the pre-fetched parent-module options,
//! the per-field upload progress, and the digest of the last saved draft
//! used for the unsaved-changes indicator.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::model::module::Module;
use common::model::submodule::SubModule;
use common::validation::AssetField;

use crate::session::SessionHandle;

/// Which pane of the content editor is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Preview,
}

/// The three asset fields of a sub-module. Each has its own independent
/// upload sub-flow; none of them blocks editing or the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSlot {
    Thumbnail,
    Document,
    ExtraDocument,
}

impl UploadSlot {
    /// The policy the picked file must pass before any network call.
    pub fn policy(self) -> AssetField {
        match self {
            UploadSlot::Thumbnail => AssetField::Thumbnail,
            UploadSlot::Document | UploadSlot::ExtraDocument => AssetField::Document,
        }
    }
}

/// Upload progress per asset field; `None` means idle.
#[derive(Debug, Default)]
pub struct Uploads {
    thumbnail: Option<f64>,
    document: Option<f64>,
    extra_document: Option<f64>,
}

impl Uploads {
    pub fn get(&self, slot: UploadSlot) -> Option<f64> {
        match slot {
            UploadSlot::Thumbnail => self.thumbnail,
            UploadSlot::Document => self.document,
            UploadSlot::ExtraDocument => self.extra_document,
        }
    }

    pub fn set(&mut self, slot: UploadSlot, progress: Option<f64>) {
        match slot {
            UploadSlot::Thumbnail => self.thumbnail = progress,
            UploadSlot::Document => self.document = progress,
            UploadSlot::ExtraDocument => self.extra_document = progress,
        }
    }

    pub fn any_in_flight(&self) -> bool {
        self.thumbnail.is_some() || self.document.is_some() || self.extra_document.is_some()
    }
}

pub struct SubModuleFormPage {
    pub draft: SubModule,
    pub parents: Vec<Module>,
    /// Fetch-by-id in flight (edit mode only).
    pub initializing: bool,
    /// Edit target missing; the view renders the banner and nothing else.
    pub dead: bool,
    pub saving: bool,
    pub active_tab: Tab,
    pub uploads: Uploads,
    pub banner: Option<String>,
    /// Digest of the draft as last loaded or saved; `None` for a fresh
    /// draft that was never saved.
    pub saved_digest: Option<String>,
    pub textarea_ref: NodeRef,
    pub thumbnail_input_ref: NodeRef,
    pub document_input_ref: NodeRef,
    pub extra_input_ref: NodeRef,
    pub session: SessionHandle,
}

impl SubModuleFormPage {
    pub fn new(session: SessionHandle, editing: bool) -> Self {
        Self {
            draft: SubModule::default(),
            parents: Vec::new(),
            initializing: editing,
            dead: false,
            saving: false,
            active_tab: Tab::Editor,
            uploads: Uploads::default(),
            banner: None,
            saved_digest: None,
            textarea_ref: Default::default(),
            thumbnail_input_ref: Default::default(),
            document_input_ref: Default::default(),
            extra_input_ref: Default::default(),
            session,
        }
    }

    /// Whether the draft differs from what the store last saw.
    pub fn is_dirty(&self) -> bool {
        match &self.saved_digest {
            Some(digest) => digest != &digest_of(&self.draft),
            None => self.draft != SubModule::default(),
        }
    }

    pub fn input_ref(&self, slot: UploadSlot) -> NodeRef {
        match slot {
            UploadSlot::Thumbnail => self.thumbnail_input_ref.clone(),
            UploadSlot::Document => self.document_input_ref.clone(),
            UploadSlot::ExtraDocument => self.extra_input_ref.clone(),
        }
    }

    /// Grows the content textarea to its scroll height so the editor never
    /// shows an internal scrollbar.
    pub fn resize_textarea(&self) {
        if let Some(textarea) = self.textarea_ref.cast::<HtmlTextAreaElement>() {
            if let Ok(html_elem) = textarea.clone().dyn_into::<HtmlElement>() {
                let style = html_elem.style();
                let _ = style.set_property("height", "auto");
                let scroll_height = textarea.scroll_height();
                let _ = style.set_property("height", &format!("{}px", scroll_height));
            }
        }
    }
}

/// Digest of the full draft, used for dirty tracking.
pub fn digest_of(draft: &SubModule) -> String {
    let serialized = serde_json::to_string(draft).unwrap_or_default();
    format!("{:x}", md5::compute(serialized))
}
