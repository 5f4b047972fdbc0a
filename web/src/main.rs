use dioxus::prelude::*;

use ui::assets::{NAVBAR_CSS, THEME_CSS};
use ui::components::Navbar;

const FAVICON: Asset = asset!("/assets/favicon.ico");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        Navbar {}
    }
}
