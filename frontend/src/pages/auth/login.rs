//! Login screen.
//!
//! Credentials go to the identity provider; a successful sign-in is then
//! gated on the caller's profile carrying the admin tag. That second check
//! is this console's own business rule: valid credentials with a
//! non-admin profile surface an authorization failure and no session is
//! established.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::user::UserProfile;

use crate::routes::Route;
use crate::services::auth;
use crate::services::documents::{self, Documents};
use crate::services::error::ServiceError;
use crate::session::{Identity, SessionAction, SessionHandle};

pub struct LoginPage {
    email: String,
    password: String,
    show_password: bool,
    error: Option<String>,
    busy: bool,
    session: SessionHandle,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    TogglePassword,
    Submit,
    SignedIn(Identity),
    Failed(ServiceError),
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, _) = ctx
            .link()
            .context::<SessionHandle>(Callback::noop())
            .expect("session context");
        Self {
            email: String::new(),
            password: String::new(),
            show_password: false,
            error: None,
            busy: false,
            session,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.email = email;
                false
            }
            Msg::SetPassword(password) => {
                self.password = password;
                false
            }
            Msg::TogglePassword => {
                self.show_password = !self.show_password;
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                self.busy = true;
                self.error = None;

                let email = self.email.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match sign_in_as_admin(&email, &password).await {
                        Ok(identity) => link.send_message(Msg::SignedIn(identity)),
                        Err(err) => link.send_message(Msg::Failed(err)),
                    }
                });
                true
            }
            Msg::SignedIn(identity) => {
                self.busy = false;
                self.session
                    .dispatch
                    .emit(SessionAction::SetIdentity(identity));
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Modules);
                }
                false
            }
            Msg::Failed(err) => {
                self.busy = false;
                self.error = Some(err.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });
        let password_type = if self.show_password { "text" } else { "password" };

        html! {
            <div style="max-width:420px;margin:64px auto;padding:32px;border:1px solid #e0e0e0;border-radius:8px;background:#fff;box-shadow:0 4px 20px rgba(0,0,0,0.05);">
                <h1 style="margin-top:0;text-align:center;">{ "Admin Login" }</h1>
                <p style="text-align:center;color:#666;">
                    { "Enter your credentials to access the admin dashboard" }
                </p>

                {
                    if let Some(error) = &self.error {
                        html! { <div class="banner-error">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }

                <form {onsubmit}>
                    <label class="field-label">{ "Email Address" }</label>
                    <input
                        type="email"
                        class="field-input"
                        value={self.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                        required={true}
                    />

                    <label class="field-label">{ "Password" }</label>
                    <div style="display:flex;gap:8px;">
                        <input
                            type={password_type}
                            class="field-input"
                            style="flex:1;"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                            })}
                            required={true}
                        />
                        <button
                            type="button"
                            onclick={link.callback(|_| Msg::TogglePassword)}
                            style="padding:0 12px;background:#eee;border:none;border-radius:4px;cursor:pointer;"
                        >
                            { if self.show_password { "Hide" } else { "Show" } }
                        </button>
                    </div>

                    <button type="submit" class="primary-btn" disabled={self.busy}>
                        { if self.busy { "Signing in..." } else { "Login" } }
                    </button>
                </form>

                <p style="text-align:center;color:#666;margin-bottom:0;">
                    { "Don't have an account? " }
                    <Link<Route> to={Route::Signup}>{ "Create account" }</Link<Route>>
                </p>
            </div>
        }
    }
}

/// The full login flow: provider check first, then the profile gate. The
/// authorization failure path deliberately returns before any session
/// state exists.
async fn sign_in_as_admin(email: &str, password: &str) -> Result<Identity, ServiceError> {
    let identity = auth::sign_in(email, password).await?;
    let docs = Documents::with_token(&identity.id_token);
    let profile: Option<UserProfile> = docs.get_by_id(documents::USERS, &identity.uid).await?;
    match profile {
        Some(profile) if profile.is_admin() => Ok(identity),
        _ => Err(ServiceError::Authorization),
    }
}
