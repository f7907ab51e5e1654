use uuid::Uuid;
use web_sys::js_sys;
use yew::{Component, Context, Html, NodeRef, Properties, html};

/// Overlay host for modal content (delete confirmations and the like).
/// The sheet is always in the DOM; visibility is toggled through the
/// `show` class so CSS can animate it.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(sheet_ref: NodeRef) {
    toggle_class(sheet_ref, "add");
}

pub fn close_top_sheet(sheet_ref: NodeRef) {
    toggle_class(sheet_ref, "remove");
}

fn toggle_class(sheet_ref: NodeRef, operation: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            sheet.id(),
            operation
        ));
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
            .unwrap();
    }
}
