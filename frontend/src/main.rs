use yew::prelude::*;

mod components;
mod config;
mod pages;
mod parallax;

use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Starting Flowix landing");
    yew::Renderer::<App>::new().render();
}
