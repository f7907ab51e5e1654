//! Sub-module form screen: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic and view
//! rendering.
//!
//! Responsibilities
//! - Re-export the component, its messages and props.
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the parent-module options (always) and the
//!   sub-module being edited (only when an id is present). A missing edit
//!   target surfaces as a banner and the form stays in a minimal state.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::module::Module;
use common::model::submodule::SubModule;

use crate::services::documents;
use crate::services::error::ServiceError;
use crate::session::SessionHandle;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::SubModuleFormPage;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub id: Option<String>,
}

impl Component for SubModuleFormPage {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let (session, _) = ctx
            .link()
            .context::<SessionHandle>(Callback::noop())
            .expect("session context");
        SubModuleFormPage::new(session, ctx.props().id.is_some())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        // parent options feed the module selector in both modes
        let docs = self.session.docs();
        let link = ctx.link().clone();
        spawn_local(async move {
            match docs.list_all::<Module>(documents::MODULES).await {
                Ok(rows) => {
                    let parents = rows
                        .into_iter()
                        .map(|(id, mut module)| {
                            module.id = id;
                            module
                        })
                        .collect();
                    link.send_message(Msg::Parents(parents));
                }
                Err(err) => link.send_message(Msg::ParentsFailed(err)),
            }
        });

        if let Some(id) = ctx.props().id.clone() {
            let docs = self.session.docs();
            let link = ctx.link().clone();
            spawn_local(async move {
                match docs.get_by_id::<SubModule>(documents::SUB_MODULES, &id).await {
                    Ok(Some(mut sub)) => {
                        sub.id = id;
                        link.send_message(Msg::Loaded(Box::new(sub)));
                    }
                    Ok(None) => {
                        link.send_message(Msg::LoadFailed(ServiceError::NotFound("Sub-module")));
                    }
                    Err(err) => link.send_message(Msg::LoadFailed(err)),
                }
            });
        }
    }
}
