//! Flexible-threshold overlap: "at least N of M people free".
//!
//! Delegates to the strict aggregation, then re-derives the available bucket
//! with a minimum-count threshold instead of strict unanimity. Busy-time
//! consensus has no partial-credit notion in this system, so the
//! all-unavailable bucket always passes through unchanged.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::overlap::{compute_overlap, OverlapResults, OverlapSlot};
use crate::slot::TimeSlot;

/// Options for [`compute_flexible_overlap`].
///
/// Every field is optional on the wire; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlexibleOverlapOptions {
    /// Minimum `available_count` for a slot to count as available.
    /// `None` means strict unanimity (the full participant count).
    pub min_required: Option<usize>,
    /// Whether to surface the partial bucket at all when a lower threshold is
    /// in effect.
    pub include_partial: bool,
    /// Reserved for the display layer's anonymization policy; the aggregation
    /// itself does not consume it.
    pub anonymize_threshold: Option<usize>,
}

/// Aggregate with a flexible availability threshold.
///
/// When the resolved threshold equals the full participant count, the strict
/// result is returned unchanged -- partial bucket included -- so strict and
/// flexible computations agree exactly at unanimity. Otherwise the available
/// bucket becomes every observed slot with `available_count >= min_required`,
/// in first-seen order.
pub fn compute_flexible_overlap(
    time_slots: &[TimeSlot],
    selected_user_ids: &[String],
    options: &FlexibleOverlapOptions,
) -> OverlapResults {
    let participant_count = selected_user_ids
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .len();
    let min_required = options.min_required.unwrap_or(participant_count);

    let base = compute_overlap(time_slots, selected_user_ids);

    if min_required == participant_count {
        return base;
    }

    let flexible_available: Vec<OverlapSlot> = base
        .by_date_time
        .iter()
        .filter(|(_, slot)| slot.available_count >= min_required)
        .map(|(_, slot)| slot.clone())
        .collect();

    OverlapResults {
        all_available: flexible_available,
        all_unavailable: base.all_unavailable,
        partial: if options.include_partial {
            base.partial
        } else {
            Vec::new()
        },
        by_date_time: base.by_date_time,
    }
}
