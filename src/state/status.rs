use dioxus::prelude::{ServerFnError, UseResourceState};

use crate::api::error_message;

/// Tri-state carried by every fetch-backed section.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus<T> {
    Loading,
    Error(String),
    Loaded(T),
}

impl<T: Clone> ViewStatus<T> {
    /// `None` means the fetch is still in flight.
    pub fn from_outcome(outcome: Option<&Result<T, ServerFnError>>) -> Self {
        match outcome {
            None => ViewStatus::Loading,
            Some(Ok(v)) => ViewStatus::Loaded(v.clone()),
            Some(Err(e)) => ViewStatus::Error(error_message(e)),
        }
    }

    /// A restarted resource keeps its previous value until the new one lands,
    /// so the task state decides Loading before the value is looked at.
    pub fn from_resource(
        state: UseResourceState,
        outcome: Option<&Result<T, ServerFnError>>,
    ) -> Self {
        match state {
            UseResourceState::Pending => ViewStatus::Loading,
            _ => Self::from_outcome(outcome),
        }
    }
}

impl<T> ViewStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewStatus::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewStatus::Error(e) => Some(e.as_str()),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewStatus<U> {
        match self {
            ViewStatus::Loading => ViewStatus::Loading,
            ViewStatus::Error(e) => ViewStatus::Error(e),
            ViewStatus::Loaded(v) => ViewStatus::Loaded(f(v)),
        }
    }
}
