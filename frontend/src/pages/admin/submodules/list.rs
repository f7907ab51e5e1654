//! Sub-module list screen: full collection snapshot rendered as a table,
//! delete-with-confirmation.

use gloo_console::error;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::level::Level;
use common::model::submodule::SubModule;

use crate::components::confirm::confirm_dialog;
use crate::components::top_sheet::{close_top_sheet, open_top_sheet};
use crate::helpers::show_toast;
use crate::routes::Route;
use crate::services::documents;
use crate::services::error::ServiceError;
use crate::session::SessionHandle;

pub struct SubModuleListPage {
    sub_modules: Vec<SubModule>,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<String>,
    dialog_ref: NodeRef,
    session: SessionHandle,
}

pub enum Msg {
    Loaded(Vec<SubModule>),
    LoadFailed(ServiceError),
    Refresh,
    DismissError,
    RequestDelete(String),
    CancelDelete,
    ConfirmDelete,
    Deleted(String),
    DeleteFailed(ServiceError),
}

impl Component for SubModuleListPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, _) = ctx
            .link()
            .context::<SessionHandle>(Callback::noop())
            .expect("session context");
        Self {
            sub_modules: Vec::new(),
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
            Msg::Loaded(sub_modules) => {
                self.sub_modules = sub_modules;
                self.loading = false;
                true
            }
            Msg::LoadFailed(err) => {
                error!("failed to load sub-modules:", err.to_string());
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
                    match docs.delete(documents::SUB_MODULES, &id).await {
                        Ok(()) => link.send_message(Msg::Deleted(id)),
                        Err(err) => link.send_message(Msg::DeleteFailed(err)),
                    }
                });
                true
            }
            Msg::Deleted(id) => {
                self.sub_modules.retain(|sub| sub.id != id);
                show_toast("Sub-module deleted.");
                true
            }
            Msg::DeleteFailed(err) => {
                error!("failed to delete sub-module:", err.to_string());
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
                    <h1 style="margin:0;">{ "Sub-Modules" }</h1>
                    <Link<Route> to={Route::SubModuleNew}>
                        <span class="primary-btn" style="width:auto;display:inline-block;">{ "Add New Sub-Module" }</span>
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
                    } else if self.sub_modules.is_empty() {
                        html! { <p style="text-align:center;color:#666;margin-top:32px;">{ "No sub-modules found. Create your first one!" }</p> }
                    } else {
                        self.table(link)
                    }
                }

                {
                    confirm_dialog(
                        self.dialog_ref.clone(),
                        "Delete this sub-module? This cannot be undone.",
                        link.callback(|_| Msg::ConfirmDelete),
                        link.callback(|_| Msg::CancelDelete),
                    )
                }
            </div>
        }
    }
}

impl SubModuleListPage {
    fn load(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        let docs = self.session.docs();
        let link = ctx.link().clone();
        spawn_local(async move {
            match docs.list_all::<SubModule>(documents::SUB_MODULES).await {
                Ok(rows) => {
                    let sub_modules = rows
                        .into_iter()
                        .map(|(id, mut sub)| {
                            sub.id = id;
                            sub
                        })
                        .collect();
                    link.send_message(Msg::Loaded(sub_modules));
                }
                Err(err) => link.send_message(Msg::LoadFailed(err)),
            }
        });
    }

    fn table(&self, link: &Scope<Self>) -> Html {
        html! {
            <div style="background:#fff;border:1px solid #e0e0e0;border-radius:8px;overflow-x:auto;">
                <table style="width:100%;border-collapse:collapse;">
                    <thead>
                        <tr style="text-align:left;border-bottom:2px solid #e0e0e0;">
                            <th class="cell">{ "Thumbnail" }</th>
                            <th class="cell">{ "Title" }</th>
                            <th class="cell">{ "Module" }</th>
                            <th class="cell">{ "Level" }</th>
                            <th class="cell">{ "Resources" }</th>
                            <th class="cell">{ "Actions" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { self.sub_modules.iter().map(|sub| self.row(sub, link)).collect::<Html>() }
                    </tbody>
                </table>
            </div>
        }
    }

    fn row(&self, sub: &SubModule, link: &Scope<Self>) -> Html {
        let id = sub.id.clone();

        html! {
            <tr style="border-bottom:1px solid #eee;">
                <td class="cell">
                    {
                        if sub.thumbnail_url.is_empty() {
                            html! {}
                        } else {
                            html! { <img src={sub.thumbnail_url.clone()} alt={sub.title.clone()} style="width:80px;height:45px;object-fit:cover;border-radius:4px;" /> }
                        }
                    }
                </td>
                <td class="cell" style="font-weight:500;">{ sub.title.clone() }</td>
                <td class="cell">{ sub.module_title.clone() }</td>
                <td class="cell">
                    <span style={format!("padding:2px 10px;border-radius:12px;font-size:0.8rem;color:#fff;background:{};", level_color(sub.level))}>
                        { sub.level.as_str() }
                    </span>
                </td>
                <td class="cell">
                    <span style="display:flex;gap:8px;">
                        {
                            if sub.video_url.is_empty() {
                                html! {}
                            } else {
                                html! { <a href={sub.video_url.clone()} target="_blank" rel="noopener noreferrer">{ "Video" }</a> }
                            }
                        }
                        {
                            if sub.document_url.is_empty() {
                                html! {}
                            } else {
                                html! { <a href={sub.document_url.clone()} target="_blank" rel="noopener noreferrer">{ "PDF" }</a> }
                            }
                        }
                    </span>
                </td>
                <td class="cell">
                    <span style="display:flex;gap:12px;">
                        <Link<Route> to={Route::SubModuleEdit { id: sub.id.clone() }}>
                            <span style="color:#1976d2;cursor:pointer;">{ "Edit" }</span>
                        </Link<Route>>
                        <button
                            onclick={link.callback(move |_| Msg::RequestDelete(id.clone()))}
                            style="background:none;border:none;color:#d32f2f;cursor:pointer;padding:0;"
                        >
                            { "Delete" }
                        </button>
                    </span>
                </td>
            </tr>
        }
    }
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Beginner => "#2e7d32",
        Level::Intermediate => "#ed6c02",
        Level::Advanced => "#d32f2f",
    }
}
