//! Client-side route table. Administrative screens are wrapped in the
//! route guard plus the admin chrome; unmatched paths land on the login
//! screen, and the bare root forwards to the admin entry screen once the
//! guard lets it through.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::guard::RequireAdmin;
use crate::components::layout::AdminLayout;
use crate::pages::admin::modules::form::ModuleFormPage;
use crate::pages::admin::modules::list::ModuleListPage;
use crate::pages::admin::profile::ProfilePage;
use crate::pages::admin::submodules::form::SubModuleFormPage;
use crate::pages::admin::submodules::list::SubModuleListPage;
use crate::pages::auth::login::LoginPage;
use crate::pages::auth::signup::SignupPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/admin/profile")]
    Profile,
    #[at("/admin/modules")]
    Modules,
    #[at("/admin/modules/new")]
    ModuleNew,
    #[at("/admin/modules/edit/:id")]
    ModuleEdit { id: String },
    #[at("/admin/submodules")]
    SubModules,
    #[at("/admin/submodules/new")]
    SubModuleNew,
    #[at("/admin/submodules/edit/:id")]
    SubModuleEdit { id: String },
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Home => admin(html! { <Redirect<Route> to={Route::Modules} /> }),
        Route::Profile => admin(html! { <ProfilePage /> }),
        Route::Modules => admin(html! { <ModuleListPage /> }),
        Route::ModuleNew => admin(html! { <ModuleFormPage id={None::<String>} /> }),
        Route::ModuleEdit { id } => admin(html! { <ModuleFormPage id={Some(id)} /> }),
        Route::SubModules => admin(html! { <SubModuleListPage /> }),
        Route::SubModuleNew => admin(html! { <SubModuleFormPage id={None::<String>} /> }),
        Route::SubModuleEdit { id } => admin(html! { <SubModuleFormPage id={Some(id)} /> }),
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

fn admin(screen: Html) -> Html {
    html! {
        <RequireAdmin>
            <AdminLayout>
                { screen }
            </AdminLayout>
        </RequireAdmin>
    }
}
