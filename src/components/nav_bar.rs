use dioxus::prelude::*;

use crate::api::api_docs_url;

#[allow(non_snake_case)]
#[component]
pub fn NavBar() -> Element {
    // Link appears once the server has told us where the backend lives.
    let docs = use_resource(|| async move { api_docs_url().await.ok() });
    let docs_v = docs.read_unchecked();

    rsx! {
        nav { class: "bg-black/80 backdrop-blur-sm text-white shadow-lg border-b border-purple-500/20 px-4 py-3",
            div { class: "max-w-7xl mx-auto flex items-center justify-between",
                span { class: "text-xl font-bold tracking-wide text-purple-400", "CloudOpt" }
                div { class: "flex gap-4 items-center",
                    if let Some(Some(href)) = &*docs_v {
                        a {
                            class: "underline text-purple-300 hover:text-purple-100 text-xs transition-colors",
                            href: "{href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "Open API documentation",
                            "Docs"
                        }
                    }
                }
            }
        }
    }
}
