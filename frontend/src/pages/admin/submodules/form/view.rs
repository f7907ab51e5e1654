//! View rendering for the sub-module form.
//!
//! The content body is edited as markdown across two tabs: "Editor" (a
//! growing textarea) and "Preview" (rendered markdown). The tab bar shows
//! a red dot while the draft differs from what the store last saw. Each
//! asset field renders its own picker, progress bar and current-asset
//! reference.

use pulldown_cmark::{Parser, html as md_html};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use common::model::level::Level;

use crate::pages::admin::modules::form::upload_progress;

use super::messages::Msg;
use super::state::{SubModuleFormPage, Tab, UploadSlot};

pub fn view(form: &SubModuleFormPage, ctx: &Context<SubModuleFormPage>) -> Html {
    let link = ctx.link();
    let editing = ctx.props().id.is_some();

    if form.initializing {
        return html! { <p style="color:#666;">{ "Loading..." }</p> };
    }

    let banner = build_banner(form, link);
    if form.dead {
        return html! { <div style="max-width:800px;margin:0 auto;">{ banner }</div> };
    }

    let onsubmit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });

    html! {
        <form {onsubmit} style="max-width:800px;margin:0 auto;">
            <h1>{ if editing { "Edit Sub-Module" } else { "Create New Sub-Module" } }</h1>
            { banner }

            { build_parent_select(form, link, editing) }

            <label class="field-label">{ "Title" }</label>
            <input
                class="field-input"
                value={form.draft.title.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
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
                        <option value={level.as_str()} selected={*level == form.draft.level}>
                            { level.as_str() }
                        </option>
                    }).collect::<Html>()
                }
            </select>

            { build_upload_block(form, link, UploadSlot::Thumbnail) }
            { build_content_editor(form, link) }

            <label class="field-label">{ "Video URL" }</label>
            <input
                class="field-input"
                placeholder="https://www.youtube.com/watch?v=..."
                value={form.draft.video_url.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetVideoUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />

            { build_upload_block(form, link, UploadSlot::Document) }
            { build_upload_block(form, link, UploadSlot::ExtraDocument) }

            <button
                type="submit"
                class="primary-btn"
                disabled={form.saving || form.uploads.any_in_flight()}
            >
                { if form.saving { "Saving..." } else { "Save Sub-Module" } }
            </button>
        </form>
    }
}

fn build_banner(form: &SubModuleFormPage, link: &Scope<SubModuleFormPage>) -> Html {
    match &form.banner {
        Some(banner) => html! {
            <div class="banner-error">
                <span>{ banner.clone() }</span>
                <button
                    onclick={link.callback(|_| Msg::DismissBanner)}
                    class="banner-btn"
                    style="float:right;"
                >
                    { "Dismiss" }
                </button>
            </div>
        },
        None => html! {},
    }
}

/// The parent selector. Locked once an existing sub-module is being
/// edited, so the denormalized title/level copied at selection time keep
/// their history.
fn build_parent_select(
    form: &SubModuleFormPage,
    link: &Scope<SubModuleFormPage>,
    editing: bool,
) -> Html {
    html! {
        <>
            <label class="field-label">{ "Module" }</label>
            <select
                class="field-input"
                disabled={editing}
                onchange={link.callback(|e: Event| {
                    Msg::SelectParent(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                <option value="" selected={form.draft.module_id.is_empty()}>
                    { "Select a module" }
                </option>
                {
                    form.parents.iter().map(|module| html! {
                        <option
                            value={module.id.clone()}
                            selected={module.id == form.draft.module_id}
                        >
                            { format!("{} ({})", module.title, module.level) }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            {
                if form.draft.module_title.is_empty() {
                    html! {}
                } else {
                    html! {
                        <p style="margin:4px 0 0 0;font-size:0.8rem;color:#888;">
                            { format!("Selected Module: {}", form.draft.module_title) }
                        </p>
                    }
                }
            }
        </>
    }
}

fn build_upload_block(
    form: &SubModuleFormPage,
    link: &Scope<SubModuleFormPage>,
    slot: UploadSlot,
) -> Html {
    let (label, accept, button) = match slot {
        UploadSlot::Thumbnail => ("Thumbnail Image", "image/*", "Choose image"),
        UploadSlot::Document => ("PDF Note", "application/pdf", "Choose PDF"),
        UploadSlot::ExtraDocument => ("Additional Note (PDF)", "application/pdf", "Choose PDF"),
    };

    html! {
        <div style="margin:16px 0;">
            <label class="field-label">{ label }</label>
            <input
                type="file"
                accept={accept}
                ref={form.input_ref(slot)}
                style="display:none;"
                onchange={link.batch_callback(move |e: Event| {
                    e.target_unchecked_into::<HtmlInputElement>()
                        .files()
                        .and_then(|files| files.get(0))
                        .map(move |file| Msg::FileChosen(slot, file))
                })}
            />
            <div style="display:flex;align-items:center;gap:12px;">
                <button
                    type="button"
                    class="banner-btn"
                    onclick={link.callback(move |_| Msg::PickFile(slot))}
                    disabled={form.uploads.get(slot).is_some()}
                >
                    { button }
                </button>
                { upload_progress(form.uploads.get(slot)) }
            </div>
            { current_asset(form, slot) }
        </div>
    }
}

fn current_asset(form: &SubModuleFormPage, slot: UploadSlot) -> Html {
    match slot {
        UploadSlot::Thumbnail => {
            if form.draft.thumbnail_url.is_empty() {
                html! {}
            } else {
                html! {
                    <img
                        src={form.draft.thumbnail_url.clone()}
                        alt="Thumbnail preview"
                        style="margin-top:12px;max-width:100%;max-height:200px;display:block;"
                    />
                }
            }
        }
        UploadSlot::Document | UploadSlot::ExtraDocument => {
            let url = match slot {
                UploadSlot::Document => &form.draft.document_url,
                _ => &form.draft.extra_document_url,
            };
            if url.is_empty() {
                html! {}
            } else {
                html! {
                    <p style="margin:8px 0 0 0;font-size:0.9rem;">
                        { "Current file: " }
                        <a href={url.clone()} target="_blank" rel="noopener noreferrer">{ "View PDF" }</a>
                    </p>
                }
            }
        }
    }
}

fn build_content_editor(form: &SubModuleFormPage, link: &Scope<SubModuleFormPage>) -> Html {
    html! {
        <div style="margin:16px 0;">
            <label class="field-label">{ "Content" }</label>
            { build_tab_bar(form, link) }
            {
                if form.active_tab == Tab::Editor {
                    html! {
                        <textarea
                            ref={form.textarea_ref.clone()}
                            value={form.draft.content.clone()}
                            spellcheck="false"
                            rows="6"
                            style="width:100%;min-height:120px;resize:none;overflow:hidden;font-family:monospace;padding:8px;box-sizing:border-box;"
                            oninput={link.batch_callback(|e: InputEvent| {
                                let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                                vec![Msg::SetContent(value), Msg::AutoResize]
                            })}
                        />
                    }
                } else {
                    html! {
                        <div
                            class="markdown-preview"
                            style="border:1px solid #e0e0e0;border-radius:4px;padding:8px 16px;min-height:120px;background:#fff;"
                        >
                            { Html::from_html_unchecked(compute_preview_html(&form.draft.content)) }
                        </div>
                    }
                }
            }
        </div>
    }
}

/// Tab bar for switching between editor and preview; shows a red dot while
/// there are unsaved changes.
fn build_tab_bar(form: &SubModuleFormPage, link: &Scope<SubModuleFormPage>) -> Html {
    let dirty = form.is_dirty();

    html! {
        <div style="display:flex;gap:4px;margin-bottom:4px;">
            <button
                type="button"
                class={classes!("tab-btn", (form.active_tab == Tab::Editor).then_some("active"))}
                onclick={link.callback(|_| Msg::SetTab(Tab::Editor))}
                style="position:relative;"
            >
                { "Editor" }
                {
                    if dirty {
                        html! {
                            <span
                                title="Unsaved changes"
                                style="position:absolute;top:4px;right:6px;width:8px;height:8px;background:#e53935;border-radius:50%;display:inline-block;"
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </button>
            <button
                type="button"
                class={classes!("tab-btn", (form.active_tab == Tab::Preview).then_some("active"))}
                onclick={link.callback(|_| Msg::SetTab(Tab::Preview))}
            >
                { "Preview" }
            </button>
        </div>
    }
}

/// Renders the markdown content body to HTML for the preview tab.
fn compute_preview_html(content: &str) -> AttrValue {
    let parser = Parser::new(content);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    AttrValue::from(out)
}
