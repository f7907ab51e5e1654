//! Signup screen.
//!
//! Password rules are checked locally before the provider is called. A
//! successful account creation is followed by the profile-document write;
//! every account created through this screen gets the admin tag. If that
//! second write fails the provider account exists without a profile; the
//! error is surfaced and no session is established (such an account can
//! never pass the login gate).

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::level::Level;
use common::model::user::{Role, UserProfile};
use common::validation;

use crate::routes::Route;
use crate::services::auth;
use crate::services::documents::{self, Documents};
use crate::services::error::ServiceError;
use crate::session::{Identity, SessionAction, SessionHandle};

pub struct SignupPage {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    level: Level,
    error: Option<String>,
    busy: bool,
    session: SessionHandle,
}

pub enum Msg {
    SetName(String),
    SetEmail(String),
    SetPassword(String),
    SetConfirmPassword(String),
    SetLevel(Level),
    Submit,
    SignedUp(Identity),
    Failed(String),
}

impl Component for SignupPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, _) = ctx
            .link()
            .context::<SessionHandle>(Callback::noop())
            .expect("session context");
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            level: Level::Beginner,
            error: None,
            busy: false,
            session,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetName(name) => {
                self.name = name;
                false
            }
            Msg::SetEmail(email) => {
                self.email = email;
                false
            }
            Msg::SetPassword(password) => {
                self.password = password;
                false
            }
            Msg::SetConfirmPassword(confirm) => {
                self.confirm_password = confirm;
                false
            }
            Msg::SetLevel(level) => {
                self.level = level;
                true
            }
            Msg::Submit => {
                if self.busy {
                    return false;
                }
                self.error = None;

                // Local checks first; the provider is never called for a
                // draft that fails them.
                if let Err(err) =
                    validation::check_password(&self.password, &self.confirm_password)
                {
                    self.error = Some(err.to_string());
                    return true;
                }

                self.busy = true;
                let name = self.name.clone();
                let email = self.email.clone();
                let password = self.password.clone();
                let level = self.level;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match sign_up_as_admin(&name, &email, &password, level).await {
                        Ok(identity) => link.send_message(Msg::SignedUp(identity)),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                true
            }
            Msg::SignedUp(identity) => {
                self.busy = false;
                self.session
                    .dispatch
                    .emit(SessionAction::SetIdentity(identity));
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Modules);
                }
                false
            }
            Msg::Failed(message) => {
                self.busy = false;
                self.error = Some(message);
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

        html! {
            <div style="max-width:420px;margin:64px auto;padding:32px;border:1px solid #e0e0e0;border-radius:8px;background:#fff;box-shadow:0 4px 20px rgba(0,0,0,0.05);">
                <h1 style="margin-top:0;text-align:center;">{ "Admin Sign Up" }</h1>

                {
                    if let Some(error) = &self.error {
                        html! { <div class="banner-error">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }

                <form {onsubmit}>
                    <label class="field-label">{ "Full Name" }</label>
                    <input
                        class="field-input"
                        value={self.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                        required={true}
                    />

                    <label class="field-label">{ "Email" }</label>
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
                    <input
                        type="password"
                        class="field-input"
                        value={self.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                        required={true}
                    />
                    <p style="margin:4px 0 0 0;font-size:0.8rem;color:#888;">
                        { format!("At least {} characters", validation::MIN_PASSWORD_CHARS) }
                    </p>

                    <label class="field-label">{ "Confirm Password" }</label>
                    <input
                        type="password"
                        class="field-input"
                        value={self.confirm_password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetConfirmPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                        required={true}
                    />

                    <label class="field-label">{ "Skill Level" }</label>
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
                                <option
                                    value={level.as_str()}
                                    selected={*level == self.level}
                                >
                                    { level.as_str() }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>

                    <button type="submit" class="primary-btn" disabled={self.busy}>
                        { if self.busy { "Creating account..." } else { "Sign Up" } }
                    </button>
                </form>

                <p style="text-align:center;color:#666;margin-bottom:0;">
                    { "Already have an account? " }
                    <Link<Route> to={Route::Login}>{ "Log In" }</Link<Route>>
                </p>
            </div>
        }
    }
}

async fn sign_up_as_admin(
    name: &str,
    email: &str,
    password: &str,
    level: Level,
) -> Result<Identity, ServiceError> {
    let identity = auth::sign_up(email, password).await?;

    // Accounts created through this console are administrators.
    let profile = UserProfile {
        id: identity.uid.clone(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Admin,
        level,
        created_at: None,
        updated_at: None,
    };
    Documents::with_token(&identity.id_token)
        .upsert(documents::USERS, &identity.uid, &profile)
        .await?;
    Ok(identity)
}
