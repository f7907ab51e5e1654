use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::SessionHandle;

/// Top bar: brand, the signed-in user's name and the sign-out action.
pub struct AdminNavbar {
    session: Option<SessionHandle>,
    _listener: Option<ContextHandle<SessionHandle>>,
}

pub enum Msg {
    SessionChanged(SessionHandle),
    SignOut,
}

impl Component for AdminNavbar {
    type Message = Msg;
    type Properties = ();

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

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                self.session = Some(session);
                true
            }
            Msg::SignOut => {
                if let Some(session) = &self.session {
                    session.sign_out();
                }
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let who = self
            .session
            .as_ref()
            .and_then(|session| session.identity())
            .map(|identity| {
                if identity.display_name.is_empty() {
                    identity.email.clone()
                } else {
                    identity.display_name.clone()
                }
            })
            .unwrap_or_default();

        html! {
            <header style="display:flex;align-items:center;justify-content:space-between;padding:12px 24px;background:#1976d2;color:#fff;">
                <Link<Route> to={Route::Modules}>
                    <span style="font-size:1.2rem;font-weight:600;color:#fff;">{ "Dev Path Admin" }</span>
                </Link<Route>>
                <div style="display:flex;align-items:center;gap:16px;">
                    <span style="font-size:0.9rem;">{ who }</span>
                    <button
                        onclick={ctx.link().callback(|_| Msg::SignOut)}
                        style="padding:0.4rem 0.9rem;background:transparent;color:#fff;border:1px solid rgba(255,255,255,0.6);border-radius:4px;cursor:pointer;"
                    >
                        { "Sign out" }
                    </button>
                </div>
            </header>
        }
    }
}
