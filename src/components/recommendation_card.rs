use dioxus::prelude::*;

use crate::state::recommendations::RecommendationItem;
use crate::state::ItemState;
use crate::utils::format::{format_confidence, format_currency};

#[allow(non_snake_case)]
#[component]
pub fn RecommendationCard(
    item: RecommendationItem,
    state: ItemState,
    on_implement: EventHandler<i64>,
) -> Element {
    let rec = &item.recommendation;
    let resource_id = rec.resource_id;
    let saving = format_currency(rec.potential_saving);
    let confidence = format_confidence(rec.confidence);
    let border = if state == ItemState::Implemented {
        "border-gray-600 opacity-70"
    } else {
        "border-purple-500"
    };

    rsx! {
        div {
            class: "rounded-2xl bg-gray-900/60 p-6 relative border-l-4 {border} transition-opacity",
            "aria-label": "Optimization recommendation",
            div { class: "flex flex-wrap justify-between items-center",
                div {
                    div { class: "text-lg font-semibold text-white",
                        "{rec.current_config} → "
                        span { class: "text-green-400", "{rec.suggested_config}" }
                    }
                    div { class: "text-gray-400 text-sm mb-2", "{rec.reason}" }
                    div { class: "flex items-center gap-4 text-sm",
                        span { class: "font-mono text-purple-300",
                            "Potential savings: "
                            span { class: "font-bold text-green-400", "{saving}" }
                            "/mo"
                        }
                        span { class: "text-gray-300",
                            "Confidence: "
                            span { class: "font-semibold", "{confidence}" }
                        }
                        span { class: "text-xs px-2 py-1 rounded-full bg-purple-900/50 text-purple-300 border border-purple-700",
                            "{rec.recommendation_type}"
                        }
                    }
                }
                div { class: "mt-2 flex items-center gap-2",
                    {
                        match state {
                            ItemState::Implemented => rsx! {
                                span { class: "text-green-400 font-medium", "Implemented" }
                            },
                            ItemState::Posting => rsx! {
                                button {
                                    class: "px-4 py-2 rounded bg-purple-600 text-white opacity-50",
                                    disabled: true,
                                    "Updating..."
                                }
                            },
                            ItemState::Open => rsx! {
                                button {
                                    class: "px-4 py-2 rounded bg-purple-600 hover:bg-purple-500 text-white transition",
                                    "aria-label": "Mark recommendation as implemented",
                                    onclick: move |_| on_implement.call(resource_id),
                                    "Mark Implemented"
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
