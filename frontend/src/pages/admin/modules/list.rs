//! Module list screen: full collection snapshot, card per module,
//! delete-with-confirmation.

use gloo_console::error;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::module::Module;

use crate::components::confirm::confirm_dialog;
use crate::components::top_sheet::{close_top_sheet, open_top_sheet};
use crate::helpers::show_toast;
use crate::routes::Route;
use crate::services::documents;
use crate::services::error::ServiceError;
use crate::session::SessionHandle;

pub struct ModuleListPage {
    modules: Vec<Module>,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<String>,
    dialog_ref: NodeRef,
    session: SessionHandle,
}

pub enum Msg {
    Loaded(Vec<Module>),
    LoadFailed(ServiceError),
    Refresh,
    DismissError,
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    Deleted(String),
    DeleteFailed(ServiceError),
}

impl Component for ModuleListPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, _) = ctx
            .link()
            .context::<SessionHandle>(Callback::noop())
            .expect("session context");
        Self {
            modules: Vec::new(),
            loading: true,
            error: None,
            pending_delete: None,
            dialog_ref: NodeRef::default(),
            session,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.load(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(modules) => {
                self.modules = modules;
                self.loading = false;
                true
            }
            Msg::LoadFailed(err) => {
                error!("failed to load modules:", err.to_string());
                // previous list (if any) stays on screen under the banner
                self.loading = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::Refresh => {
                self.error = None;
                self.load(ctx);
                true
            }
            Msg::DismissError => {
                self.error = None;
                true
            }
            Msg::RequestDelete(id) => {
                self.pending_delete = Some(id);
                open_top_sheet(self.dialog_ref.clone());
                true
            }
            Msg::CancelDelete => {
                self.pending_delete = None;
                close_top_sheet(self.dialog_ref.clone());
                true
            }
            Msg::ConfirmDelete => {
                let Some(id) = self.pending_delete.take() else {
                    return false;
                };
                close_top_sheet(self.dialog_ref.clone());

                let docs = self.session.docs();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match docs.delete(documents::MODULES, &id).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(err) => link.send_message(Msg::DeleteFailed(err)),
                    }
                });
                true
            }
            Msg::Deleted(id) => {
                self.modules.retain(|module| module.id != id);
                show_toast("Module deleted.");
                true
            }
            Msg::DeleteFailed(err) => {
                error!("failed to delete module:", err.to_string());
                show_toast(&err.to_string());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div>
                <div style="display:flex;justify-content:space-between;align-items:center;margin-bottom:24px;">
                    <h1 style="margin:0;">{ "Modules" }</h1>
                    <Link<Route> to={Route::ModuleNew}>
                        <span class="primary-btn" style="width:auto;display:inline-block;">{ "Add New Module" }</span>
                    </Link<Route>>
                </div>

                {
                    if let Some(error) = &self.error {
                        html! {
                            <div class="banner-error">
                                <span>{ error.clone() }</span>
                                <span style="float:right;display:flex;gap:8px;">
                                    <button onclick={link.callback(|_| Msg::Refresh)} class="banner-btn">{ "Refresh" }</button>
                                    <button onclick={link.callback(|_| Msg::DismissError)} class="banner-btn">{ "Dismiss" }</button>
                                </span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if self.loading {
                        html! { <p style="color:#666;">{ "Loading..." }</p> }
                    } else if self.modules.is_empty() {
                        html! { <p style="text-align:center;color:#666;margin-top:32px;">{ "No modules yet. Create your first one!" }</p> }
                    } else {
                        html! {
                            <div style="display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:24px;">
                                { self.modules.iter().map(|module| self.module_card(module, link)).collect::<Html>() }
                            </div>
                        }
                    }
                }

                {
                    confirm_dialog(
                        self.dialog_ref.clone(),
                        "Delete this module? This cannot be undone.",
                        link.callback(|_| Msg::ConfirmDelete),
                        link.callback(|_| Msg::CancelDelete),
                    )
                }
            </div>
        }
    }
}

impl ModuleListPage {
    /// Replaces the list wholesale with a fresh snapshot.
    fn load(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        let docs = self.session.docs();
        let link = ctx.link().clone();
        spawn_local(async move {
            match docs.list_all::<Module>(documents::MODULES).await {
                Ok(rows) => {
                    let modules = rows
                        .into_iter()
                        .map(|(id, mut module)| {
                            module.id = id;
                            module
                        })
                        .collect();
                    link.send_message(Msg::Loaded(modules));
                }
                Err(err) => link.send_message(Msg::LoadFailed(err)),
            }
        });
    }

    fn module_card(&self, module: &Module, link: &Scope<Self>) -> Html {
        let id = module.id.clone();
        let thumbnail = if module.thumbnail_url.is_empty() {
            html! { <div style="height:140px;background:#e0e0e0;border-radius:8px 8px 0 0;"></div> }
        } else {
            html! { <img src={module.thumbnail_url.clone()} alt={module.title.clone()} style="height:140px;width:100%;object-fit:cover;border-radius:8px 8px 0 0;" /> }
        };

        html! {
            <div style="background:#fff;border:1px solid #e0e0e0;border-radius:8px;overflow:hidden;">
                { thumbnail }
                <div style="padding:16px;">
                    <h2 style="margin:0 0 8px 0;font-size:1.1rem;">{ module.title.clone() }</h2>
                    <p style="margin:0;color:#666;font-size:0.9rem;">{ format!("Level: {}", module.level) }</p>
                </div>
                <div style="display:flex;gap:8px;padding:0 16px 16px 16px;">
                    <Link<Route> to={Route::ModuleEdit { id: module.id.clone() }}>
                        <span style="color:#1976d2;cursor:pointer;">{ "Edit" }</span>
                    </Link<Route>>
                    <button
                        onclick={link.callback(move |_| Msg::RequestDelete(id.clone()))}
                        style="background:none;border:none;color:#d32f2f;cursor:pointer;padding:0;"
                    >
                        { "Delete" }
                    </button>
                </div>
            </div>
        }
    }
}
