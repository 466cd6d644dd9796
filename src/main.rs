use log::info;
use yew::prelude::*;
use yew_router::history::{AnyHistory, BrowserHistory};

mod config;
mod controller;
mod forms;
mod handoff;
mod legal;
mod navigation;
mod router;
mod pages {
    pub mod home;
    pub mod legal;
}

use pages::{home::Home, legal::LegalPage};
use router::{Route, Site};

fn switch(route: Route, on_navigate: Callback<Route>) -> Html {
    match route {
        legal if legal.is_legal() => {
            info!("Rendering {} page", legal);
            html! { <LegalPage route={legal} {on_navigate} /> }
        }
        _ => {
            info!("Rendering Home page");
            html! { <Home {on_navigate} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let force_update = use_force_update();
    let site = use_memo(
        move |_| {
            let history = AnyHistory::from(BrowserHistory::new());
            Site::mount(history, move |_| force_update.force_update())
        },
        (), // Mount once, location changes arrive through the subscription
    );

    let on_navigate = {
        let site = site.clone();
        Callback::from(move |route: Route| site.open(route))
    };

    switch(site.route(), on_navigate)
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
