//! Asset-gateway client: multipart upload with byte-level progress.
//!
//! `fetch` exposes no upload progress, so this client drives a raw
//! `XmlHttpRequest` and forwards its progress events to the screen as a
//! fraction in `[0, 1]`. The terminal outcome arrives exactly once on
//! `on_done` with the permanent URL the gateway issued for the asset.
//!
//! MIME/size policy is the caller's job (`common::validation::AssetField`)
//! and must run before this function: once called, the request is issued
//! unconditionally.

use serde::Deserialize;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, ProgressEvent, XmlHttpRequest};
use yew::Callback;

use crate::config;
use crate::services::error::ServiceError;

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

pub fn upload(
    file: &web_sys::File,
    on_progress: Callback<f64>,
    on_done: Callback<Result<String, ServiceError>>,
) {
    if start(file, on_progress, &on_done).is_err() {
        on_done.emit(Err(ServiceError::Upload(
            "could not start the upload".to_string(),
        )));
    }
}

fn start(
    file: &web_sys::File,
    on_progress: Callback<f64>,
    on_done: &Callback<Result<String, ServiceError>>,
) -> Result<(), JsValue> {
    let url = format!(
        "{}/{}/auto/upload",
        config::UPLOAD_BASE,
        config::MEDIA_CLOUD_NAME
    );

    // The gateway contract: the file plus the two fixed configuration
    // fields of the unsigned-upload preset.
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", file, &file.name())?;
    form.append_with_str("upload_preset", config::MEDIA_UPLOAD_PRESET)?;
    form.append_with_str("cloud_name", config::MEDIA_CLOUD_NAME)?;

    let xhr = XmlHttpRequest::new()?;
    xhr.open("POST", &url)?;

    let progress = Closure::wrap(Box::new(move |event: ProgressEvent| {
        if event.length_computable() && event.total() > 0.0 {
            on_progress.emit(event.loaded() / event.total());
        }
    }) as Box<dyn FnMut(ProgressEvent)>);
    xhr.upload()?
        .set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let loaded = {
        let xhr = xhr.clone();
        let on_done = on_done.clone();
        Closure::wrap(Box::new(move |_: ProgressEvent| {
            on_done.emit(finish(&xhr));
        }) as Box<dyn FnMut(ProgressEvent)>)
    };
    xhr.set_onload(Some(loaded.as_ref().unchecked_ref()));

    let failed = {
        let on_done = on_done.clone();
        Closure::wrap(Box::new(move |_: ProgressEvent| {
            on_done.emit(Err(ServiceError::Upload(
                "network error while uploading".to_string(),
            )));
        }) as Box<dyn FnMut(ProgressEvent)>)
    };
    xhr.set_onerror(Some(failed.as_ref().unchecked_ref()));

    xhr.send_with_opt_form_data(Some(&form))?;

    // The handlers must outlive this function; the browser drops them with
    // the request.
    progress.forget();
    loaded.forget();
    failed.forget();
    Ok(())
}

fn finish(xhr: &XmlHttpRequest) -> Result<String, ServiceError> {
    let status = xhr.status().unwrap_or(0);
    if !(200..300).contains(&status) {
        return Err(ServiceError::Upload(format!(
            "media gateway responded {status}"
        )));
    }
    let body = xhr.response_text().ok().flatten().unwrap_or_default();
    serde_json::from_str::<UploadResponse>(&body)
        .map(|response| response.secure_url)
        .map_err(|_| {
            ServiceError::Upload("unexpected response from the media gateway".to_string())
        })
}
