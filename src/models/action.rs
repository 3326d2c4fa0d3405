use super::coordinates::Coordinates;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Kind of a queued attendance action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "checkIn")]
    CheckIn,
    #[serde(rename = "checkOut")]
    CheckOut,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::CheckIn => "check-in",
            ActionKind::CheckOut => "check-out",
        }
    }
}

/// One attendance action that failed to reach the backend and is waiting
/// for replay.
///
/// Persisted as `{kind, payload, enqueuedAt}` records, in insertion
/// order. Duplicates are allowed: retrying an offline check-in queues a
/// second record. Never mutated after creation; removed only when the
/// replay pass acknowledges it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingAction {
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Coordinates>,
    #[serde(rename = "enqueuedAt")]
    pub enqueued_at: i64, // epoch milliseconds
}

impl PendingAction {
    pub fn check_in(coordinates: Coordinates) -> Self {
        Self {
            kind: ActionKind::CheckIn,
            payload: Some(coordinates),
            enqueued_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn check_out() -> Self {
        Self {
            kind: ActionKind::CheckOut,
            payload: None,
            enqueued_at: Utc::now().timestamp_millis(),
        }
    }
}
