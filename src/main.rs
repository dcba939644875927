use dioxus::logger::tracing::info;
use dioxus::prelude::*;

// Module Declarations
mod components;
mod pages;

use components::layout::AppShell;
use pages::{AboutUs, Home, MyPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/mypage")]
        MyPage {},
        #[route("/Aboutus")]
        AboutUs {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    info!("starting EcoGreenSeoul client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
