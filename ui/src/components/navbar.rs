use dioxus::prelude::*;

use crate::assets::NAV_ICON;

/// Static top navigation bar: React icon, logo text, and course title.
///
/// No props, no hooks, no document writes; one render always yields the same
/// four-element tree (`nav` > `img` + `h3` + `h4`). Stylesheet wiring is the
/// launching shell's job, so the markup below is the whole contract.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            img { src: NAV_ICON, class: "nav--icon" }
            h3 { class: "nav--logo_text", "ReactFacts" }
            h4 { class: "nav--title", "React Course - Project 1" }
        }
    }
}
