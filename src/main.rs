use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod download;
mod notify;
mod observe;
mod state;

mod components {
    pub mod back_to_top;
    pub mod notification;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
