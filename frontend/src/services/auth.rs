//! Identity-provider client (email+password REST endpoints).
//!
//! Only the two account operations this console needs are wrapped. The
//! provider's own session machinery (restore-on-reload, revocation) is its
//! responsibility; this REST client keeps the token in memory only.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::services::error::ServiceError;
use crate::session::Identity;

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct AuthResponse {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(rename = "idToken")]
    id_token: String,
    #[serde(default)]
    email: String,
    #[serde(rename = "displayName", default)]
    display_name: String,
}

#[derive(Deserialize)]
struct AuthErrorBody {
    error: AuthErrorDetail,
}

#[derive(Deserialize)]
struct AuthErrorDetail {
    message: String,
}

pub async fn sign_in(email: &str, password: &str) -> Result<Identity, ServiceError> {
    account_call("signInWithPassword", email, password).await
}

pub async fn sign_up(email: &str, password: &str) -> Result<Identity, ServiceError> {
    account_call("signUp", email, password).await
}

/// The REST client holds no durable session on this side, so a reload has
/// nothing to restore: the provider reports "no session" immediately and
/// the session store leaves its loading state.
pub fn restore_session() -> Option<Identity> {
    None
}

async fn account_call(
    operation: &str,
    email: &str,
    password: &str,
) -> Result<Identity, ServiceError> {
    let url = format!(
        "{}/accounts:{}?key={}",
        config::IDENTITY_BASE,
        operation,
        config::IDENTITY_API_KEY
    );
    let body = CredentialsBody {
        email,
        password,
        return_secure_token: true,
    };

    let response = Request::post(&url)
        .json(&body)
        .map_err(|err| ServiceError::Authentication(err.to_string()))?
        .send()
        .await
        .map_err(|err| ServiceError::Authentication(err.to_string()))?;

    if response.ok() {
        let body: AuthResponse = response
            .json()
            .await
            .map_err(|err| ServiceError::Authentication(err.to_string()))?;
        Ok(Identity {
            uid: body.local_id,
            email: body.email,
            display_name: body.display_name,
            id_token: body.id_token,
        })
    } else {
        let status = response.status();
        let message = match response.json::<AuthErrorBody>().await {
            Ok(body) => vendor_error_text(&body.error.message),
            Err(_) => format!("Identity provider responded {status}"),
        };
        Err(ServiceError::Authentication(message))
    }
}

/// Provider failures arrive as SCREAMING_SNAKE codes, sometimes with a
/// ` : detail` suffix. The code is surfaced verbatim with that vendor
/// framing stripped.
pub fn vendor_error_text(raw: &str) -> String {
    raw.split(" : ").next().unwrap_or(raw).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_codes_pass_through() {
        assert_eq!(vendor_error_text("EMAIL_NOT_FOUND"), "EMAIL_NOT_FOUND");
        assert_eq!(vendor_error_text("INVALID_PASSWORD"), "INVALID_PASSWORD");
    }

    #[test]
    fn detail_suffix_is_stripped() {
        assert_eq!(
            vendor_error_text(
                "WEAK_PASSWORD : Password should be at least 6 characters"
            ),
            "WEAK_PASSWORD"
        );
        assert_eq!(
            vendor_error_text("TOO_MANY_ATTEMPTS_TRY_LATER : Try again later."),
            "TOO_MANY_ATTEMPTS_TRY_LATER"
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(vendor_error_text("  EMAIL_EXISTS  "), "EMAIL_EXISTS");
    }
}
