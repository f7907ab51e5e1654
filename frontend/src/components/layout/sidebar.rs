use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

pub struct AdminSidebar;

impl Component for AdminSidebar {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminSidebar
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <nav style="width:200px;padding:24px 0;background:#fff;border-right:1px solid #e0e0e0;">
                <ul style="list-style:none;margin:0;padding:0;display:flex;flex-direction:column;gap:4px;">
                    { nav_item(Route::Modules, "Modules") }
                    { nav_item(Route::SubModules, "Sub-Modules") }
                    { nav_item(Route::Profile, "Profile") }
                </ul>
            </nav>
        }
    }
}

fn nav_item(to: Route, label: &str) -> Html {
    html! {
        <li>
            <Link<Route> to={to}>
                <span style="display:block;padding:10px 24px;color:#333;">{ label }</span>
            </Link<Route>>
        </li>
    }
}
