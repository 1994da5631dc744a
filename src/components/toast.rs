use dioxus::prelude::*;

use crate::state::Notice;

#[allow(non_snake_case)]
#[component]
pub fn Toast(notice: Notice) -> Element {
    let bg = notice.kind.class();
    rsx! {
        div {
            class: "fixed top-8 right-8 py-2 px-4 rounded-lg shadow-lg text-white font-medium z-50 {bg}",
            role: "status",
            "{notice.message}"
        }
    }
}
