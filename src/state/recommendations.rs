//! Recommendation list state machine.
//!
//! The list moves `Loading -> Loaded | Error`; each item moves
//! `Open -> Posting -> Implemented` and never back. A successful implement
//! flips the item locally and marks it provisional. The next completed fetch
//! replaces the whole list and is authoritative, even when it disagrees.

use std::collections::BTreeSet;

use crate::shared::types::{Recommendation, RecommendationsResponse, Summary};
use crate::state::notice::Notice;

pub const EMPTY_MESSAGE: &str = "No optimization opportunities found";
pub const IMPLEMENTED_MESSAGE: &str = "Recommendation marked as implemented.";
pub const IMPLEMENT_FAILED_MESSAGE: &str = "Failed to update.";

/// Identifies one fetch cycle. Only the latest cycle may settle the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationItem {
    pub recommendation: Recommendation,
    /// Set by a local implement flip, cleared by the next fetch.
    pub provisional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Open,
    Posting,
    Implemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Loaded,
}

/// What the panel owes the rest of the page once an implement call settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Refresh the page summary, then refetch the list to confirm the flip.
    RefreshAndRefetch,
    Nothing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImplementOutcome {
    pub notice: Notice,
    pub follow_up: FollowUp,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationBoard {
    items: Vec<RecommendationItem>,
    summary: Option<Summary>,
    loading: bool,
    loaded_once: bool,
    error: Option<String>,
    posting: BTreeSet<i64>,
    cycle: u64,
}

impl RecommendationBoard {
    /// A freshly mounted board is Loading until its first fetch settles.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.cycle += 1;
        self.loading = true;
        self.error = None;
        FetchTicket(self.cycle)
    }

    /// Returns false when a newer cycle has started and this result was dropped.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<RecommendationsResponse, String>,
    ) -> bool {
        if ticket.0 != self.cycle {
            return false;
        }
        self.loading = false;
        match result {
            Ok(resp) => {
                self.items = resp
                    .recommendations
                    .into_iter()
                    .map(|recommendation| RecommendationItem {
                        recommendation,
                        provisional: false,
                    })
                    .collect();
                self.summary = Some(resp.summary);
                self.loaded_once = true;
            }
            Err(msg) => {
                self.error = Some(msg);
            }
        }
        true
    }

    /// Enters Posting for the item. Returns false if the action is not on offer.
    pub fn begin_implement(&mut self, resource_id: i64) -> bool {
        if !self.can_implement(resource_id) {
            return false;
        }
        self.posting.insert(resource_id);
        true
    }

    pub fn finish_implement(
        &mut self,
        resource_id: i64,
        result: Result<(), String>,
    ) -> ImplementOutcome {
        self.posting.remove(&resource_id);
        let notice = match result {
            Ok(()) => {
                for item in self
                    .items
                    .iter_mut()
                    .filter(|i| i.recommendation.resource_id == resource_id)
                {
                    if !item.recommendation.implemented {
                        item.recommendation.implemented = true;
                        item.provisional = true;
                    }
                }
                return ImplementOutcome {
                    notice: Notice::success(IMPLEMENTED_MESSAGE),
                    follow_up: FollowUp::RefreshAndRefetch,
                };
            }
            Err(msg) if msg.trim().is_empty() => Notice::error(IMPLEMENT_FAILED_MESSAGE),
            Err(msg) => Notice::error(msg),
        };
        ImplementOutcome {
            notice,
            follow_up: FollowUp::Nothing,
        }
    }

    pub fn phase(&self) -> ListPhase<'_> {
        if let Some(e) = &self.error {
            return ListPhase::Error(e);
        }
        if self.loading && !self.loaded_once {
            return ListPhase::Loading;
        }
        if self.items.is_empty() {
            if self.loading {
                ListPhase::Loading
            } else {
                ListPhase::Empty
            }
        } else {
            ListPhase::Loaded
        }
    }

    /// A fetch is in flight while earlier data is still shown.
    pub fn is_refreshing(&self) -> bool {
        self.loading && self.loaded_once
    }

    pub fn items(&self) -> &[RecommendationItem] {
        &self.items
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    fn find(&self, resource_id: i64) -> Option<&RecommendationItem> {
        self.items
            .iter()
            .find(|i| i.recommendation.resource_id == resource_id)
    }

    pub fn item_state(&self, resource_id: i64) -> Option<ItemState> {
        let item = self.find(resource_id)?;
        Some(if item.recommendation.implemented {
            ItemState::Implemented
        } else if self.posting.contains(&resource_id) {
            ItemState::Posting
        } else {
            ItemState::Open
        })
    }

    pub fn can_implement(&self, resource_id: i64) -> bool {
        self.item_state(resource_id) == Some(ItemState::Open)
    }

    pub fn is_posting(&self, resource_id: i64) -> bool {
        self.posting.contains(&resource_id)
    }

    pub fn is_provisional(&self, resource_id: i64) -> bool {
        self.find(resource_id).map(|i| i.provisional).unwrap_or(false)
    }
}
