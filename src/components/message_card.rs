//! Empty-state message card
//!
//! Several views render a title-plus-blurb card when the data they present
//! does not exist yet.

use dioxus::prelude::*;

#[component]
pub fn MessageCard(title: &'static str, body: &'static str) -> Element {
    rsx! {
        section {
            class: "card message-card",
            h2 { "{title}" }
            p { "{body}" }
        }
    }
}
