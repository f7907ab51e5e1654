use yew::prelude::*;

use crate::components::top_sheet::TopSheet;

/// Confirmation dialog rendered inside a [`TopSheet`]. Nothing is deleted
/// until the confirm button is pressed; the cancel button (and the ✕) just
/// closes the sheet.
pub fn confirm_dialog(
    sheet_ref: NodeRef,
    message: &str,
    on_confirm: Callback<MouseEvent>,
    on_cancel: Callback<MouseEvent>,
) -> Html {
    html! {
        <TopSheet node_ref={sheet_ref}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div style="background:#fff;border-radius:8px;padding:24px 32px;max-width:420px;box-shadow:0 8px 32px rgba(0,0,0,0.35);">
                    <p style="margin:0 0 20px 0;font-size:1rem;">{ message }</p>
                    <div style="display:flex;justify-content:flex-end;gap:12px;">
                        <button
                            onclick={on_cancel}
                            style="padding:0.5rem 1rem;background:#eee;border:none;border-radius:4px;cursor:pointer;"
                        >
                            { "Cancel" }
                        </button>
                        <button
                            onclick={on_confirm}
                            style="padding:0.5rem 1rem;background:#d32f2f;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                        >
                            { "Delete" }
                        </button>
                    </div>
                </div>
            </div>
        </TopSheet>
    }
}
