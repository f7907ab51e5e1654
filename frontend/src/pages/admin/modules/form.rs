//! Module form screen: create or edit a single module.
//!
//! The draft lives in memory, one field set per input event. Saving is
//! guarded by the draft's own validation; nothing reaches the document
//! gateway for an invalid draft. The thumbnail upload is an independent
//! sub-flow that never blocks editing.

use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::level::Level;
use common::model::module::Module;
use common::validation::AssetField;

use crate::helpers::show_toast;
use crate::routes::Route;
use crate::services::error::ServiceError;
use crate::services::{assets, documents};
use crate::session::SessionHandle;

pub struct ModuleFormPage {
    module: Module,
    initializing: bool,
    dead: bool,
    busy: bool,
    upload: Option<f64>,
    banner: Option<String>,
    file_input_ref: NodeRef,
    session: SessionHandle,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub id: Option<String>,
}

pub enum Msg {
    Loaded(Box<Module>),
    LoadFailed(ServiceError),
    SetTitle(String),
    SetLevel(Level),
    SetDescription(String),
    PickThumbnail,
    FileChosen(web_sys::File),
    Progress(f64),
    Uploaded(Result<String, ServiceError>),
    Submit,
    Saved,
    SaveFailed(ServiceError),
    DismissBanner,
}

impl Component for ModuleFormPage {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let (session, _) = ctx
            .link()
            .context::<SessionHandle>(Callback::noop())
            .expect("session context");
        Self {
            module: Module::default(),
            initializing: ctx.props().id.is_some(),
            dead: false,
            busy: false,
            upload: None,
            banner: None,
            file_input_ref: NodeRef::default(),
            session,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(id) = ctx.props().id.clone() else {
            return;
        };
        let docs = self.session.docs();
        let link = ctx.link().clone();
        spawn_local(async move {
            match docs.get_by_id::<Module>(documents::MODULES, &id).await {
                Ok(Some(mut module)) => {
                    module.id = id;
                    link.send_message(Msg::Loaded(Box::new(module)));
                }
                Ok(None) => link.send_message(Msg::LoadFailed(ServiceError::NotFound("Module"))),
                Err(err) => link.send_message(Msg::LoadFailed(err)),
            }
        });
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(module) => {
                self.module = *module;
                self.initializing = false;
                true
            }
            Msg::LoadFailed(err) => {
                error!("failed to load module:", err.to_string());
                self.initializing = false;
                self.dead = true;
                self.banner = Some(err.to_string());
                true
            }
            Msg::SetTitle(title) => {
                self.module.title = title;
                false
            }
            Msg::SetLevel(level) => {
                self.module.level = level;
                true
            }
            Msg::SetDescription(description) => {
                self.module.description = description;
                false
            }
            Msg::PickThumbnail => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::FileChosen(file) => {
                let blob = gloo_file::Blob::from(file.clone());
                if let Err(err) =
                    AssetField::Thumbnail.check(&blob.raw_mime_type(), blob.size())
                {
                    // rejected locally; no request is issued and the
                    // previous thumbnail stays
                    show_toast(&err.to_string());
                    return false;
                }
                self.upload = Some(0.0);
                assets::upload(
                    &file,
                    ctx.link().callback(Msg::Progress),
                    ctx.link().callback(Msg::Uploaded),
                );
                true
            }
            Msg::Progress(fraction) => {
                self.upload = Some(fraction);
                true
            }
            Msg::Uploaded(Ok(url)) => {
                self.upload = None;
                self.module.thumbnail_url = url;
                true
            }
            Msg::Uploaded(Err(err)) => {
                error!("thumbnail upload failed:", err.to_string());
                self.upload = None;
                show_toast(&err.to_string());
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                if let Err(err) = self.module.validate() {
                    self.banner = Some(err.to_string());
                    return true;
                }
                self.busy = true;
                self.banner = None;

                let module = self.module.clone();
                let id = ctx.props().id.clone();
                let docs = self.session.docs();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match id {
                        Some(id) => docs.upsert(documents::MODULES, &id, &module).await,
                        None => docs.create(documents::MODULES, &module).await.map(|_| ()),
                    };
                    match outcome {
                        Ok(()) => link.send_message(Msg::Saved),
                        Err(err) => link.send_message(Msg::SaveFailed(err)),
                    }
                });
                true
            }
            Msg::Saved => {
                self.busy = false;
                show_toast("Module saved.");
                if let Some(navigator) = ctx.link().navigator() {
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(800).await;
                        navigator.push(&Route::Modules);
                    });
                }
                true
            }
            Msg::SaveFailed(err) => {
                error!("failed to save module:", err.to_string());
                self.busy = false;
                self.banner = Some(err.to_string());
                true
            }
            Msg::DismissBanner => {
                self.banner = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let editing = ctx.props().id.is_some();

        if self.initializing {
            return html! { <p style="color:#666;">{ "Loading..." }</p> };
        }

        let banner = if let Some(banner) = &self.banner {
            html! {
                <div class="banner-error">
                    <span>{ banner.clone() }</span>
                    <button onclick={link.callback(|_| Msg::DismissBanner)} class="banner-btn" style="float:right;">{ "Dismiss" }</button>
                </div>
            }
        } else {
            html! {}
        };

        if self.dead {
            // edit target missing: banner only, nothing to edit
            return html! { <div style="max-width:600px;margin:0 auto;">{ banner }</div> };
        }

        let onsubmit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        html! {
            <form {onsubmit} style="max-width:600px;margin:0 auto;">
                <h1>{ if editing { "Edit Module" } else { "Create New Module" } }</h1>
                { banner }

                <label class="field-label">{ "Title" }</label>
                <input
                    class="field-input"
                    value={self.module.title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />

                <label class="field-label">{ "Level" }</label>
                <select
                    class="field-input"
                    onchange={link.batch_callback(|e: Event| {
                        e.target_unchecked_into::<HtmlSelectElement>()
                            .value()
                            .parse::<Level>()
                            .ok()
                            .map(Msg::SetLevel)
                    })}
                >
                    {
                        Level::ALL.iter().map(|level| html! {
                            <option value={level.as_str()} selected={*level == self.module.level}>
                                { level.as_str() }
                            </option>
                        }).collect::<Html>()
                    }
                </select>

                <label class="field-label">{ "Description" }</label>
                <textarea
                    class="field-input"
                    rows="4"
                    value={self.module.description.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />

                <label class="field-label">{ "Thumbnail Image" }</label>
                <input
                    type="file"
                    accept="image/*"
                    ref={self.file_input_ref.clone()}
                    style="display:none;"
                    onchange={link.batch_callback(|e: Event| {
                        e.target_unchecked_into::<HtmlInputElement>()
                            .files()
                            .and_then(|files| files.get(0))
                            .map(Msg::FileChosen)
                    })}
                />
                <div style="display:flex;align-items:center;gap:12px;">
                    <button
                        type="button"
                        onclick={link.callback(|_| Msg::PickThumbnail)}
                        class="banner-btn"
                        disabled={self.upload.is_some()}
                    >
                        { "Choose image" }
                    </button>
                    { upload_progress(self.upload) }
                </div>
                {
                    if self.module.thumbnail_url.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <img
                                src={self.module.thumbnail_url.clone()}
                                alt="Thumbnail preview"
                                style="margin-top:12px;max-width:100%;max-height:200px;display:block;"
                            />
                        }
                    }
                }

                <button
                    type="submit"
                    class="primary-btn"
                    disabled={self.busy || self.upload.is_some()}
                >
                    { if self.busy { "Saving..." } else { "Save Module" } }
                </button>
            </form>
        }
    }
}

/// Fractional progress as a bar plus percentage; empty when idle.
pub fn upload_progress(fraction: Option<f64>) -> Html {
    match fraction {
        Some(fraction) => {
            let percent = (fraction * 100.0).round() as u32;
            html! {
                <span style="display:inline-flex;align-items:center;gap:8px;">
                    <span style="width:120px;height:6px;background:#e0e0e0;border-radius:3px;overflow:hidden;display:inline-block;">
                        <span style={format!("display:block;height:100%;width:{percent}%;background:#1976d2;")}></span>
                    </span>
                    <span style="font-size:0.8rem;color:#666;">{ format!("{percent}%") }</span>
                </span>
            }
        }
        None => html! {},
    }
}
