//! Route guard for the administrative screens.
//!
//! Pure function of the session context, re-evaluated on every context
//! change: while the store is loading it renders a placeholder, without an
//! identity it redirects to the login screen, otherwise it renders the
//! protected subtree. The decision is never cached.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::SessionHandle;

pub struct RequireAdmin {
    session: Option<SessionHandle>,
    _listener: Option<ContextHandle<SessionHandle>>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    SessionChanged(SessionHandle),
}

impl Component for RequireAdmin {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let (session, listener) = match ctx
            .link()
            .context::<SessionHandle>(ctx.link().callback(Msg::SessionChanged))
        {
            Some((session, listener)) => (Some(session), Some(listener)),
            None => (None, None),
        };
        Self {
            session,
            _listener: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                self.session = Some(session);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &self.session {
            Some(session) if session.is_loading() => html! {
                <div style="display:flex;justify-content:center;padding:48px;color:#666;">
                    { "Loading..." }
                </div>
            },
            Some(session) if session.identity().is_some() => ctx.props().children.clone(),
            _ => html! { <Redirect<Route> to={Route::Login} /> },
        }
    }
}
