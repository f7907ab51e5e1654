//! Update function for the sub-module form.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Parent selection copies the chosen module's title into the draft and
//!   seeds the level from it; the selection is locked in edit mode (the
//!   view never emits `SelectParent` there).
//! - Each asset field runs its own upload sub-flow: policy check first
//!   (wrong type or size never reaches the network), then progress events
//!   until the gateway returns the permanent URL. A failed upload leaves
//!   the previous URL untouched.
//! - Save validates the draft, upserts at the known id or creates with a
//!   store-generated one, then navigates back to the list after a short
//!   delay.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::helpers::show_toast;
use crate::routes::Route;
use crate::services::{assets, documents};

use super::messages::Msg;
use super::state::{SubModuleFormPage, Tab, UploadSlot, digest_of};

pub fn update(form: &mut SubModuleFormPage, ctx: &Context<SubModuleFormPage>, msg: Msg) -> bool {
    match msg {
        Msg::Parents(parents) => {
            form.parents = parents;
            true
        }
        Msg::ParentsFailed(err) => {
            error!("failed to load module options:", err.to_string());
            form.banner = Some(err.to_string());
            true
        }
        Msg::Loaded(sub) => {
            form.draft = *sub;
            form.initializing = false;
            form.saved_digest = Some(digest_of(&form.draft));
            ctx.link().send_message(Msg::AutoResize);
            true
        }
        Msg::LoadFailed(err) => {
            error!("failed to load sub-module:", err.to_string());
            form.initializing = false;
            form.dead = true;
            form.banner = Some(err.to_string());
            true
        }
        Msg::SelectParent(module_id) => {
            match form.parents.iter().find(|module| module.id == module_id) {
                Some(parent) => form.draft.adopt_parent(parent),
                None => {
                    form.draft.module_id = String::new();
                    form.draft.module_title = String::new();
                }
            }
            true
        }
        Msg::SetTitle(title) => {
            form.draft.title = title;
            false
        }
        Msg::SetLevel(level) => {
            form.draft.level = level;
            true
        }
        Msg::SetContent(content) => {
            form.draft.content = content;
            true
        }
        Msg::SetVideoUrl(url) => {
            form.draft.video_url = url;
            false
        }
        Msg::SetTab(tab) => {
            form.active_tab = tab;
            if form.active_tab == Tab::Editor {
                ctx.link().send_message(Msg::AutoResize);
            }
            true
        }
        Msg::AutoResize => {
            form.resize_textarea();
            false
        }
        Msg::PickFile(slot) => {
            if let Some(input) = form.input_ref(slot).cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileChosen(slot, file) => {
            let blob = gloo_file::Blob::from(file.clone());
            if let Err(err) = slot.policy().check(&blob.raw_mime_type(), blob.size()) {
                // rejected locally; no request is issued and the previous
                // asset URL stays
                show_toast(&err.to_string());
                return false;
            }
            form.uploads.set(slot, Some(0.0));
            assets::upload(
                &file,
                ctx.link().callback(move |fraction| Msg::Progress(slot, fraction)),
                ctx.link().callback(move |result| Msg::Uploaded(slot, result)),
            );
            true
        }
        Msg::Progress(slot, fraction) => {
            form.uploads.set(slot, Some(fraction));
            true
        }
        Msg::Uploaded(slot, Ok(url)) => {
            form.uploads.set(slot, None);
            match slot {
                UploadSlot::Thumbnail => form.draft.thumbnail_url = url,
                UploadSlot::Document => form.draft.document_url = url,
                UploadSlot::ExtraDocument => form.draft.extra_document_url = url,
            }
            true
        }
        Msg::Uploaded(slot, Err(err)) => {
            error!("upload failed:", err.to_string());
            form.uploads.set(slot, None);
            show_toast(&err.to_string());
            true
        }
        Msg::Submit => {
            if form.saving {
                return false;
            }
            if let Err(err) = form.draft.validate() {
                form.banner = Some(err.to_string());
                return true;
            }
            form.saving = true;
            form.banner = None;

            let draft = form.draft.clone();
            let id = ctx.props().id.clone();
            let docs = form.session.docs();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = match id {
                    Some(id) => docs.upsert(documents::SUB_MODULES, &id, &draft).await,
                    None => docs
                        .create(documents::SUB_MODULES, &draft)
                        .await
                        .map(|_| ()),
                };
                match outcome {
                    Ok(()) => link.send_message(Msg::Saved),
                    Err(err) => link.send_message(Msg::SaveFailed(err)),
                }
            });
            true
        }
        Msg::Saved => {
            form.saving = false;
            form.saved_digest = Some(digest_of(&form.draft));
            show_toast("Sub-module saved.");
            if let Some(navigator) = ctx.link().navigator() {
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(800).await;
                    navigator.push(&Route::SubModules);
                });
            }
            true
        }
        Msg::SaveFailed(err) => {
            error!("failed to save sub-module:", err.to_string());
            form.saving = false;
            form.banner = Some(err.to_string());
            true
        }
        Msg::DismissBanner => {
            form.banner = None;
            true
        }
    }
}
