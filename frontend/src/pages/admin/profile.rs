//! Profile screen: the signed-in administrator's own document.

use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::level::Level;
use common::model::user::UserProfile;

use crate::helpers::show_toast;
use crate::routes::Route;
use crate::services::documents;
use crate::services::error::ServiceError;
use crate::session::SessionHandle;

pub struct ProfilePage {
    profile: Option<UserProfile>,
    loading: bool,
    busy: bool,
    error: Option<String>,
    session: SessionHandle,
}

pub enum Msg {
    Loaded(Box<UserProfile>),
    LoadFailed(ServiceError),
    SetName(String),
    SetLevel(Level),
    Submit,
    Saved,
    SaveFailed(ServiceError),
    SignOut,
}

impl Component for ProfilePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, _) = ctx
            .link()
            .context::<SessionHandle>(Callback::noop())
            .expect("session context");
        Self {
            profile: None,
            loading: true,
            busy: false,
            error: None,
            session,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(identity) = self.session.identity().cloned() else {
            return;
        };
        let docs = self.session.docs();
        let link = ctx.link().clone();
        spawn_local(async move {
            match docs
                .get_by_id::<UserProfile>(documents::USERS, &identity.uid)
                .await
            {
                Ok(Some(profile)) => link.send_message(Msg::Loaded(Box::new(profile))),
                Ok(None) => link.send_message(Msg::LoadFailed(ServiceError::NotFound("Profile"))),
                Err(err) => link.send_message(Msg::LoadFailed(err)),
            }
        });
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(profile) => {
                self.profile = Some(*profile);
                self.loading = false;
                true
            }
            Msg::LoadFailed(err) => {
                error!("failed to load profile:", err.to_string());
                self.loading = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::SetName(name) => {
                if let Some(profile) = &mut self.profile {
                    profile.name = name;
                }
                false
            }
            Msg::SetLevel(level) => {
                if let Some(profile) = &mut self.profile {
                    profile.level = level;
                }
                true
            }
            Msg::Submit => {
                let Some(profile) = self.profile.clone() else {
                    return false;
                };
                self.busy = true;
                self.error = None;

                let docs = self.session.docs();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match docs
                        .upsert(documents::USERS, &profile.id, &profile)
                        .await
                    {
                        Ok(()) => link.send_message(Msg::Saved),
                        Err(err) => link.send_message(Msg::SaveFailed(err)),
                    }
                });
                true
            }
            Msg::Saved => {
                self.busy = false;
                show_toast("Profile updated.");
                true
            }
            Msg::SaveFailed(err) => {
                error!("failed to save profile:", err.to_string());
                self.busy = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::SignOut => {
                self.session.sign_out();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if self.loading {
            return html! { <p style="color:#666;">{ "Loading..." }</p> };
        }

        let onsubmit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        html! {
            <div style="max-width:600px;margin:0 auto;background:#fff;border:1px solid #e0e0e0;border-radius:8px;padding:24px;">
                <h1 style="margin-top:0;">{ "Admin Profile" }</h1>

                {
                    if let Some(error) = &self.error {
                        html! { <div class="banner-error">{ error.clone() }</div> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(profile) = &self.profile {
                        html! {
                            <form {onsubmit}>
                                <label class="field-label">{ "Name" }</label>
                                <input
                                    class="field-input"
                                    value={profile.name.clone()}
                                    oninput={link.callback(|e: InputEvent| {
                                        Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                                    })}
                                    required={true}
                                />

                                <label class="field-label">{ "Email" }</label>
                                <input
                                    class="field-input"
                                    value={profile.email.clone()}
                                    disabled={true}
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
                                            <option
                                                value={level.as_str()}
                                                selected={*level == profile.level}
                                            >
                                                { level.as_str() }
                                            </option>
                                        }).collect::<Html>()
                                    }
                                </select>

                                <button type="submit" class="primary-btn" disabled={self.busy}>
                                    { if self.busy { "Saving..." } else { "Update Profile" } }
                                </button>
                            </form>
                        }
                    } else {
                        html! {}
                    }
                }

                <button
                    onclick={link.callback(|_| Msg::SignOut)}
                    style="margin-top:16px;width:100%;padding:0.6rem;background:#fff;color:#d32f2f;border:1px solid #d32f2f;border-radius:4px;cursor:pointer;"
                >
                    { "Logout" }
                </button>
            </div>
        }
    }
}
