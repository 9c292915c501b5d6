//! The per-user availability record consumed by the engine.

use serde::{Deserialize, Serialize};

/// One user's free/busy declaration for one `(date, time block)` pair within
/// one event.
///
/// `date` and `time_block` are opaque calendar tokens: dates are compared for
/// equality and sort lexicographically in practice (ISO `YYYY-MM-DD`), time
/// blocks are compared for equality only (e.g. `"09:00-09:30"`). The engine
/// never parses them as clock math.
///
/// A consistent dataset holds at most one record per
/// `(event_id, user_id, date, time_block)` tuple -- the write path upserts, so
/// the last write wins. [`crate::compute_overlap`] assumes that invariant;
/// [`crate::compute_overlap_checked`] enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub date: String,
    pub time_block: String,
    /// `true` = free, `false` = busy.
    pub is_available: bool,
}
