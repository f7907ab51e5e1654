//! Chrome around every administrative screen: top navbar, side navigation
//! and the main content area.

mod navbar;
mod sidebar;

use yew::prelude::*;

use navbar::AdminNavbar;
use sidebar::AdminSidebar;

pub struct AdminLayout;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

impl Component for AdminLayout {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        AdminLayout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div style="min-height:100vh;display:flex;flex-direction:column;">
                <AdminNavbar />
                <div style="display:flex;flex:1;">
                    <AdminSidebar />
                    <main style="flex:1;padding:24px;background:#fafafa;">
                        { ctx.props().children.clone() }
                    </main>
                </div>
            </div>
        }
    }
}
