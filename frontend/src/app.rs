//! Root component. Owns the session store for the lifetime of the process
//! and provides it to the tree as a context, then mounts the router.

use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{self, Route};
use crate::services::auth;
use crate::session::{SessionAction, SessionHandle, SessionState};

pub struct App {
    session: Rc<SessionState>,
}

pub enum Msg {
    Session(SessionAction),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Rc::new(SessionState::starting()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Session(action) => {
                self.session = Rc::new(self.session.apply(action));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let handle = SessionHandle {
            state: self.session.clone(),
            dispatch: ctx.link().callback(Msg::Session),
        };

        html! {
            <ContextProvider<SessionHandle> context={handle}>
                <BrowserRouter>
                    <Switch<Route> render={routes::switch} />
                </BrowserRouter>
            </ContextProvider<SessionHandle>>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            // Ask the provider for a restored session; it reports one (or
            // its absence) and the store leaves its loading state.
            let action = match auth::restore_session() {
                Some(identity) => SessionAction::SetIdentity(identity),
                None => SessionAction::SetLoading(false),
            };
            ctx.link().send_message(Msg::Session(action));
        }
    }
}
