use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

use crate::api::{
    error_message, health_check, list_recommendations, list_resources, DEFAULT_LIMIT,
    DEFAULT_OFFSET,
};
use crate::components::{
    CrashScreen, NavBar, RecommendationsPanel, ResourcesTable, StatusCard, SummaryHeader,
};
use crate::state::{HealthState, ViewStatus};
use crate::{FAVICON, TAILWIND_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "Cloud Optimization Dashboard" }
        document::Meta { name: "color-scheme", content: "dark" }
        RootBoundary { Dashboard {} }
    }
}

/// Swaps the whole page for the crash screen when a component below returns
/// `Err` from render (usually through `?`). Panics are not caught here; they
/// abort the renderer. Failed fetches never reach it either, since every
/// section turns those into its own error state.
#[allow(non_snake_case)]
#[component]
pub fn RootBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_errors: ErrorContext| {
                error!("[app] render failure caught at the root boundary");
                rsx! { CrashScreen {} }
            },
            {children}
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Dashboard() -> Element {
    // Three independent fetches, started together on mount. None waits on
    // another and each fails on its own.
    let health = use_resource(|| async move { health_check().await });
    let mut resources =
        use_resource(|| async move { list_resources(DEFAULT_LIMIT, DEFAULT_OFFSET).await });
    let mut summary =
        use_resource(|| async move { list_recommendations().await.map(|r| r.summary) });

    use_effect(move || {
        if let Some(Err(e)) = &*health.read() {
            warn!("[app] API health check failed: {}", error_message(e));
        }
    });

    let health_state =
        HealthState::from_resource(health.state().cloned(), (*health.read_unchecked()).as_ref());
    let resources_status = ViewStatus::from_resource(
        resources.state().cloned(),
        (*resources.read_unchecked()).as_ref(),
    );
    let summary_status = ViewStatus::from_resource(
        summary.state().cloned(),
        (*summary.read_unchecked()).as_ref(),
    );

    rsx! {
        div { class: "min-h-screen bg-gray-950 text-gray-100",
            NavBar {}
            div { class: "max-w-7xl mx-auto px-4 py-8 space-y-8",
                h1 { class: "text-3xl font-bold text-white", "Cloud Optimization Dashboard" }
                StatusCard { health: health_state }
                SummaryHeader { status: summary_status }
                section {
                    h2 { class: "text-xl font-semibold mb-4 text-white", "Cloud Resources" }
                    ResourcesTable {
                        status: resources_status,
                        on_retry: move |_| resources.restart(),
                    }
                }
                section {
                    // Implementing changes cost and savings, not the inventory,
                    // so only the summary is refetched.
                    RecommendationsPanel { on_implement: move |_| summary.restart() }
                }
            }
        }
    }
}
