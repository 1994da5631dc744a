use dioxus::prelude::*;

use crate::shared::types::Summary;
use crate::state::{SummaryTiles, ViewStatus};

#[allow(non_snake_case)]
#[component]
pub fn SummaryHeader(status: ViewStatus<Summary>) -> Element {
    match SummaryTiles::from_status(&status) {
        SummaryTiles::Loading => rsx! {
            div { class: "flex gap-6 mb-8",
                for i in 0..SummaryTiles::COUNT {
                    div { key: "{i}", class: "animate-pulse rounded-lg bg-gray-800 h-24 w-56" }
                }
            }
        },
        SummaryTiles::Failed(err) => rsx! {
            div { class: "text-red-400 font-semibold mb-8", "Could not load summary: {err}" }
        },
        SummaryTiles::Tiles(tiles) => rsx! {
            div { class: "flex flex-wrap gap-6 mb-8",
                for tile in tiles.into_iter() {
                    div { key: "{tile.label}", class: "rounded-2xl border border-gray-800 bg-gray-900/60 p-6 flex-1 min-w-[12rem] text-center",
                        div { class: "text-sm text-gray-400", "{tile.label}" }
                        div { class: "font-bold text-3xl tabular-nums {tile.accent}", "{tile.value}" }
                        if let Some(caption) = &tile.caption {
                            div { class: "text-xs text-gray-500 mt-1", "{caption}" }
                        }
                    }
                }
            }
        },
    }
}
