use crate::app::App;

mod app;
mod components;
mod config;
mod helpers;
mod pages;
mod routes;
mod services;
mod session;

fn main() {
    yew::Renderer::<App>::new().render();
}
