use dioxus::prelude::*;

/// Fallback shown in place of the whole dashboard after a render failure.
#[allow(non_snake_case)]
#[component]
pub fn CrashScreen() -> Element {
    rsx! {
        div { class: "p-10 text-center text-red-700 font-semibold",
            "Something went wrong."
            br {}
            button {
                class: "mt-4 px-4 py-2 rounded bg-gray-700 text-white",
                "aria-label": "Reload Page",
                onclick: move |_| {
                    let _ = document::eval("window.location.reload();");
                },
                "Reload Page"
            }
        }
    }
}
