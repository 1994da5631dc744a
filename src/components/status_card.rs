use dioxus::prelude::*;

use crate::state::HealthState;

#[allow(non_snake_case)]
#[component]
pub fn StatusCard(health: HealthState) -> Element {
    let dot = health.dot_class();
    let label = health.label().to_string();

    rsx! {
        div { class: "rounded-2xl border border-gray-800 bg-gray-900/60 shadow-xl p-6",
            h2 { class: "text-xl font-semibold mb-4 text-white", "System Status" }
            div { class: "flex items-center space-x-2",
                div { class: "w-3 h-3 rounded-full {dot}" }
                span { class: "text-sm text-gray-400", "API Status: {label}" }
            }
        }
    }
}
