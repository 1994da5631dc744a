use dioxus::prelude::{ServerFnError, UseResourceState};

use crate::shared::types::HealthDto;

#[derive(Debug, Clone, PartialEq)]
pub enum HealthState {
    Checking,
    Reported(String),
    /// The call itself failed. Shown as `error`, never fatal.
    Unreachable,
}

impl HealthState {
    pub fn from_outcome(outcome: Option<&Result<HealthDto, ServerFnError>>) -> Self {
        match outcome {
            None => HealthState::Checking,
            Some(Ok(h)) => HealthState::Reported(h.status.clone()),
            Some(Err(_)) => HealthState::Unreachable,
        }
    }

    pub fn from_resource(
        state: UseResourceState,
        outcome: Option<&Result<HealthDto, ServerFnError>>,
    ) -> Self {
        match state {
            UseResourceState::Pending => HealthState::Checking,
            _ => Self::from_outcome(outcome),
        }
    }

    pub fn connected(&self) -> bool {
        matches!(self, HealthState::Reported(s) if s == "ok")
    }

    pub fn label(&self) -> &str {
        match self {
            HealthState::Checking => "checking...",
            HealthState::Reported(s) => s,
            HealthState::Unreachable => "error",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        if self.connected() {
            "bg-green-500"
        } else {
            "bg-red-500"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_is_connected() {
        let ok: Result<HealthDto, ServerFnError> = Ok(HealthDto { status: "ok".into() });
        let h = HealthState::from_outcome(Some(&ok));
        assert!(h.connected());
        assert_eq!(h.label(), "ok");
    }

    #[test]
    fn unhealthy_status_is_shown_but_not_connected() {
        let bad: Result<HealthDto, ServerFnError> = Ok(HealthDto {
            status: "unhealthy".into(),
        });
        let h = HealthState::from_outcome(Some(&bad));
        assert!(!h.connected());
        assert_eq!(h.label(), "unhealthy");
    }

    #[test]
    fn failed_call_reads_as_error() {
        let err: Result<HealthDto, ServerFnError> =
            Err(ServerFnError::ServerError("connection refused".into()));
        let h = HealthState::from_outcome(Some(&err));
        assert_eq!(h, HealthState::Unreachable);
        assert_eq!(h.label(), "error");
        assert_eq!(h.dot_class(), "bg-red-500");
        assert_eq!(HealthState::from_outcome(None).label(), "checking...");
    }

    #[test]
    fn pending_recheck_reads_as_checking() {
        let ok: Result<HealthDto, ServerFnError> = Ok(HealthDto { status: "ok".into() });
        let h = HealthState::from_resource(UseResourceState::Pending, Some(&ok));
        assert_eq!(h, HealthState::Checking);
        assert!(!h.connected());
    }
}
