use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api::{error_message, implement_recommendation, list_recommendations};
use crate::components::{RecommendationCard, Toast};
use crate::state::recommendations::EMPTY_MESSAGE;
use crate::state::{
    FollowUp, ItemState, ListPhase, NoticeSlot, RecommendationBoard, NOTICE_DISMISS_MS,
};
use crate::utils::format::{format_count_opt, format_currency_opt};
use crate::utils::timer::sleep_ms;

#[allow(non_snake_case)]
#[component]
pub fn RecommendationsPanel(on_implement: Option<EventHandler<()>>) -> Element {
    let mut board = use_signal(RecommendationBoard::new);
    let mut notices = use_signal(NoticeSlot::default);

    // One fetch cycle. Tasks die with this scope, so a late response never
    // lands in an unmounted panel.
    let load = move || {
        spawn(async move {
            let ticket = board.write().begin_fetch();
            let result = list_recommendations().await.map_err(|e| {
                let msg = error_message(&e);
                warn!("[recommendations] fetch failed: {}", msg);
                msg
            });
            if !board.write().finish_fetch(ticket, result) {
                info!("[recommendations] dropped result of superseded fetch");
            }
        });
    };

    use_hook(move || load());

    let implement = move |resource_id: i64| {
        if !board.write().begin_implement(resource_id) {
            return;
        }
        spawn(async move {
            let result = implement_recommendation(resource_id)
                .await
                .map_err(|e| error_message(&e));
            if let Err(msg) = &result {
                warn!("[recommendations] implement {} failed: {}", resource_id, msg);
            }
            let outcome = board.write().finish_implement(resource_id, result);
            let shown = notices.write().show(outcome.notice);
            match outcome.follow_up {
                FollowUp::RefreshAndRefetch => {
                    info!("[recommendations] resource {} implemented", resource_id);
                    if let Some(cb) = on_implement {
                        cb.call(());
                    }
                    load();
                }
                FollowUp::Nothing => {}
            }
            sleep_ms(NOTICE_DISMISS_MS).await;
            notices.write().dismiss(shown);
        });
    };

    let b = board.read();
    let cards: Vec<_> = b
        .items()
        .iter()
        .map(|item| {
            let id = item.recommendation.resource_id;
            (id, b.item_state(id).unwrap_or(ItemState::Open), item.clone())
        })
        .collect();
    let toast = notices.read().current().cloned();

    rsx! {
        div {
            div { class: "flex items-center justify-between mb-4",
                h2 { class: "text-xl font-semibold text-white", "Optimization Recommendations" }
                if b.is_refreshing() {
                    span { class: "text-xs text-gray-500", "Refreshing..." }
                }
            }
            {
                match b.phase() {
                    ListPhase::Loading => rsx! {
                        div { class: "p-4 text-gray-400", "Loading recommendations..." }
                    },
                    ListPhase::Error(err) => rsx! {
                        div { class: "p-4 text-red-400 font-semibold",
                            "Error: {err}"
                            button {
                                class: "ml-4 px-3 py-1 rounded bg-gray-700 text-white text-sm",
                                "aria-label": "Retry fetching recommendations",
                                onclick: move |_| load(),
                                "Retry"
                            }
                        }
                    },
                    ListPhase::Empty => rsx! {
                        div { class: "p-4 text-gray-400", "{EMPTY_MESSAGE}" }
                    },
                    ListPhase::Loaded => rsx! {
                        div { class: "space-y-4",
                            for (id, state, item) in cards.into_iter() {
                                RecommendationCard { key: "{id}", item, state, on_implement: implement }
                            }
                        }
                    },
                }
            }
            if let Some(summary) = b.summary() {
                div { class: "mt-8 text-sm text-gray-400",
                    div {
                        span { class: "font-semibold", "Open recommendations: " }
                        "{format_count_opt(summary.open_recommendations)}"
                    }
                    div {
                        span { class: "font-semibold", "Total potential monthly savings: " }
                        "{format_currency_opt(summary.total_potential_savings)}"
                    }
                }
            }
            if let Some(notice) = toast {
                Toast { notice }
            }
        }
    }
}
