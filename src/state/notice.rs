/// How long a toast stays on screen.
pub const NOTICE_DISMISS_MS: u32 = 2_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "bg-green-600",
            NoticeKind::Error => "bg-red-600",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Holds at most one transient notice. A newer notice replaces the current
/// one, and a stale dismiss timer cannot clear it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeSlot {
    next: u64,
    current: Option<(NoticeId, Notice)>,
}

impl NoticeSlot {
    pub fn show(&mut self, notice: Notice) -> NoticeId {
        self.next += 1;
        let id = NoticeId(self.next);
        self.current = Some((id, notice));
        id
    }

    pub fn dismiss(&mut self, id: NoticeId) {
        if matches!(self.current, Some((cur, _)) if cur == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, n)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_clears_matching_notice() {
        let mut slot = NoticeSlot::default();
        let id = slot.show(Notice::success("done"));
        assert_eq!(slot.current().map(|n| n.kind), Some(NoticeKind::Success));
        slot.dismiss(id);
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_timer_leaves_newer_notice() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(Notice::success("first"));
        let _second = slot.show(Notice::error("second"));
        slot.dismiss(first);
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("second"));
    }
}
