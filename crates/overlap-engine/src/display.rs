//! Privacy-preserving display helpers.
//!
//! Formatting and ranking for the rendering layer: anonymized count strings,
//! ratio-to-color mapping for grid cells, and best-time ranking. The wording
//! and hex values are presentation policy -- the engine's aggregates carry the
//! actual information.

use crate::overlap::OverlapSlot;

/// Every selected participant is free.
pub const COLOR_ALL_AVAILABLE: &str = "#10B981";
/// At least three quarters are free.
pub const COLOR_MOST_AVAILABLE: &str = "#84CC16";
/// At least half are free.
pub const COLOR_HALF_AVAILABLE: &str = "#F59E0B";
/// At least a quarter is free.
pub const COLOR_FEW_AVAILABLE: &str = "#F97316";
/// Fewer than a quarter, or nobody.
pub const COLOR_NONE_AVAILABLE: &str = "#EF4444";

/// Format an available/total count for display, optionally anonymized.
///
/// Groups of two or fewer always get the exact `"{available}/{total}"` form --
/// they cannot be meaningfully anonymized. Larger groups with `anonymize` set
/// get `"Few available"` when exactly one person is free and
/// `"Most available"` when all but one are, deliberately leaking only the
/// near-zero / near-unanimous extremes. Mid-range values fall back to exact
/// counts: no single descriptive word covers them without misleading.
pub fn format_availability_count(available: usize, total: usize, anonymize: bool) -> String {
    if total <= 2 || !anonymize {
        return format!("{}/{}", available, total);
    }

    if available == 1 {
        return "Few available".to_string();
    }

    if available == total - 1 {
        return "Most available".to_string();
    }

    format!("{}/{}", available, total)
}

/// Map an availability ratio to its grid-cell color.
///
/// Five discrete tiers with inclusive lower bounds, checked top-down: full
/// consensus, >= 0.75, >= 0.5, >= 0.25, everything else. A zero participant
/// total has no defined ratio and renders as the empty tier.
pub fn availability_color(available_count: usize, total_count: usize) -> &'static str {
    if total_count == 0 {
        return COLOR_NONE_AVAILABLE;
    }
    if available_count == total_count {
        return COLOR_ALL_AVAILABLE;
    }

    let ratio = available_count as f64 / total_count as f64;
    if ratio >= 0.75 {
        COLOR_MOST_AVAILABLE
    } else if ratio >= 0.5 {
        COLOR_HALF_AVAILABLE
    } else if ratio >= 0.25 {
        COLOR_FEW_AVAILABLE
    } else {
        COLOR_NONE_AVAILABLE
    }
}

/// Sort slots by `available_count`, stably -- ties keep their input order.
pub fn sort_slots_by_availability(slots: &[OverlapSlot], descending: bool) -> Vec<OverlapSlot> {
    let mut sorted = slots.to_vec();
    if descending {
        sorted.sort_by(|a, b| b.available_count.cmp(&a.available_count));
    } else {
        sorted.sort_by(|a, b| a.available_count.cmp(&b.available_count));
    }
    sorted
}

/// Partition slots by date, preserving input order within each group.
///
/// Dates appear in first-seen order. Pair-vec rather than a map so the
/// rendering layer iterates days in a deterministic order.
pub fn group_slots_by_date(slots: &[OverlapSlot]) -> Vec<(String, Vec<OverlapSlot>)> {
    let mut groups: Vec<(String, Vec<OverlapSlot>)> = Vec::new();

    for slot in slots {
        match groups.iter_mut().find(|(date, _)| *date == slot.date) {
            Some((_, group)) => group.push(slot.clone()),
            None => groups.push((slot.date.clone(), vec![slot.clone()])),
        }
    }

    groups
}

/// The top `count` slots by descending `available_count`.
///
/// Returns all of them when there are fewer than `count`.
pub fn find_best_times(slots: &[OverlapSlot], count: usize) -> Vec<OverlapSlot> {
    let mut best = sort_slots_by_availability(slots, true);
    best.truncate(count);
    best
}
