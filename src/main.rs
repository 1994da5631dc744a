use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod state;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::{error, info};

        // .env first so RUST_LOG and API_BASE_URL from it apply
        dotenvy::dotenv().ok();
        backend::init_tracing();

        match backend::init_api() {
            Ok(api) => info!("[api] backend at {}", api.base_url()),
            Err(e) => error!("[api] failed to init: {e:#}"),
        }
    }
    dioxus::launch(app::App);
}
