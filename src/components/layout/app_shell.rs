use dioxus::prelude::*;

use crate::components::navigation::Nav;
use crate::Route;

/// Common frame for every routed page: the fixed sidebar on the left,
/// the active page rendered through the router outlet on the right.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "app-shell",
            Nav {}

            main { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}
