use dioxus::prelude::*;

use crate::shared::types::Resource;
use crate::state::resources::{ResourceTable, EMPTY_MESSAGE};
use crate::state::ViewStatus;

const TH: &str = "px-4 py-3 text-xs font-medium text-gray-300 tracking-wider uppercase";
const TD: &str = "whitespace-nowrap px-4 py-3 text-sm";

#[allow(non_snake_case)]
#[component]
pub fn ResourcesTable(status: ViewStatus<Vec<Resource>>, on_retry: EventHandler<()>) -> Element {
    match ResourceTable::from_status(&status) {
        ResourceTable::Loading => rsx! {
            div { class: "p-4 text-center text-gray-400", "Loading resources..." }
        },
        ResourceTable::Failed(err) => rsx! {
            div { class: "p-4 text-center text-red-400 font-semibold",
                "Error fetching resources: {err}"
                button {
                    class: "ml-4 px-3 py-1 rounded bg-gray-700 text-white text-sm",
                    "aria-label": "Retry fetching resources",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        },
        ResourceTable::Empty => rsx! {
            div { class: "p-4 text-center text-gray-400", "{EMPTY_MESSAGE}" }
        },
        ResourceTable::Rows(rows) => rsx! {
            div { class: "overflow-x-auto shadow-lg rounded-lg border border-gray-700 bg-black",
                table { class: "min-w-full divide-y divide-gray-700",
                    thead { class: "bg-gray-800",
                        tr {
                            th { class: "{TH} text-left", "Name" }
                            th { class: "{TH} text-left", "Type" }
                            th { class: "{TH} text-left", "Provider" }
                            th { class: "{TH} text-center", "CPU %" }
                            th { class: "{TH} text-center", "Memory %" }
                            th { class: "{TH} text-center", "Storage (GB)" }
                            th { class: "{TH} text-right", "Monthly Cost ($)" }
                        }
                    }
                    tbody { class: "divide-y divide-gray-700",
                        for row in rows.into_iter() {
                            tr { key: "{row.id}", class: "hover:bg-gray-800 transition-colors",
                                td { class: "{TD} font-medium text-white", "{row.name}" }
                                td { class: "{TD} text-gray-300", "{row.kind}" }
                                td { class: "{TD} text-gray-300", "{row.provider}" }
                                td { class: "{TD} text-center {row.cpu_class}", "{row.cpu_text}" }
                                td { class: "{TD} text-center {row.memory_class}", "{row.memory_text}" }
                                td { class: "{TD} text-center text-gray-300", "{row.storage_text}" }
                                td { class: "{TD} font-semibold text-right text-white tabular-nums", "{row.cost_text}" }
                            }
                        }
                    }
                }
            }
        },
    }
}
