//! Strict group-overlap aggregation.
//!
//! Folds a flat collection of per-user availability records into per-slot
//! aggregate counts, then classifies each observed slot as unanimously free,
//! unanimously busy, or mixed. Individual answers never appear in the output
//! -- only counts against the selected participant total.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};
use crate::slot::TimeSlot;

/// Lookup key for one grid cell: `"{date}|{time_block}"`.
pub fn slot_key(date: &str, time_block: &str) -> String {
    format!("{}|{}", date, time_block)
}

/// Aggregate availability for one `(date, time block)` grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapSlot {
    pub date: String,
    pub time_block: String,
    /// How many selected participants answered "free" for this cell.
    pub available_count: usize,
    /// How many selected participants answered "busy" for this cell.
    pub unavailable_count: usize,
    /// Size of the selected participant set -- NOT the responder count, so the
    /// denominator stays correct while answers are still trickling in.
    pub total_participants: usize,
    /// `available_count / total_participants`; 0.0 when the set is empty.
    pub availability_ratio: f64,
}

/// Classified aggregation output for one engine invocation.
///
/// The three buckets partition the observed slots: every entry of
/// [`by_date_time`](Self::by_date_time) appears in exactly one of them.
/// All four sequences share the insertion order of first-seen
/// `(date, time block)` pairs. Grid cells nobody has answered yet are absent
/// entirely -- renderers treat a missing key as 0/0 with the participant total
/// known from context.
///
/// The lookup sequence is a plain `Vec` of `(key, slot)` pairs to keep
/// insertion order without an `IndexMap` dependency; use
/// [`get`](Self::get) for keyed access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapResults {
    /// Slots where every selected participant answered "free".
    pub all_available: Vec<OverlapSlot>,
    /// Slots where every selected participant answered "busy".
    pub all_unavailable: Vec<OverlapSlot>,
    /// Everything else: mixed answers or not everyone has responded.
    pub partial: Vec<OverlapSlot>,
    /// `("{date}|{time_block}", slot)` pairs in first-seen order.
    pub by_date_time: Vec<(String, OverlapSlot)>,
}

impl OverlapResults {
    /// Look up the aggregate for one grid cell, if anyone has answered it.
    pub fn get(&self, date: &str, time_block: &str) -> Option<&OverlapSlot> {
        self.by_date_time
            .iter()
            .find(|(_, slot)| slot.date == date && slot.time_block == time_block)
            .map(|(_, slot)| slot)
    }
}

/// Aggregate availability records across a selected participant subset.
///
/// Records whose `user_id` is not in `selected_user_ids` are dropped -- the
/// filter set defines "the group" for this computation, so unknown users are
/// not an error. The caller is responsible for pre-filtering by event.
///
/// `selected_user_ids` has set semantics: duplicate ids do not inflate the
/// participant total. An empty set yields an empty result (no record survives
/// the filter).
///
/// A slot is `all_available` iff `available_count == total_participants` AND
/// the count is positive; symmetrically for `all_unavailable`. The positive
/// guard keeps a zero-participant slot from counting as vacuous consensus.
///
/// Assumes at most one record per `(event, user, date, time block)` tuple --
/// duplicate records are silently double counted here. Use
/// [`compute_overlap_checked`] when the input cannot be trusted.
pub fn compute_overlap(time_slots: &[TimeSlot], selected_user_ids: &[String]) -> OverlapResults {
    let selected: HashSet<&str> = selected_user_ids.iter().map(String::as_str).collect();
    let total_participants = selected.len();

    // First pass: tally counts per (date, time block), preserving first-seen
    // order. The side index gives O(1) lookup into the ordered vec.
    let mut slots: Vec<OverlapSlot> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in time_slots {
        if !selected.contains(record.user_id.as_str()) {
            continue;
        }

        let key = slot_key(&record.date, &record.time_block);
        let i = *index.entry(key).or_insert_with(|| {
            slots.push(OverlapSlot {
                date: record.date.clone(),
                time_block: record.time_block.clone(),
                available_count: 0,
                unavailable_count: 0,
                total_participants,
                availability_ratio: 0.0,
            });
            slots.len() - 1
        });

        if record.is_available {
            slots[i].available_count += 1;
        } else {
            slots[i].unavailable_count += 1;
        }
    }

    // Second pass: fill in ratios and classify.
    let mut results = OverlapResults {
        all_available: Vec::new(),
        all_unavailable: Vec::new(),
        partial: Vec::new(),
        by_date_time: Vec::with_capacity(slots.len()),
    };

    for mut slot in slots {
        slot.availability_ratio = if slot.total_participants == 0 {
            0.0
        } else {
            slot.available_count as f64 / slot.total_participants as f64
        };

        if slot.available_count == slot.total_participants && slot.available_count > 0 {
            results.all_available.push(slot.clone());
        } else if slot.unavailable_count == slot.total_participants && slot.unavailable_count > 0 {
            results.all_unavailable.push(slot.clone());
        } else {
            results.partial.push(slot.clone());
        }

        let key = slot_key(&slot.date, &slot.time_block);
        results.by_date_time.push((key, slot));
    }

    results
}

/// [`compute_overlap`] with the uniqueness invariant enforced up front.
///
/// Rejects the input if any `(event, user, date, time block)` tuple appears
/// more than once, naming the first offending record. This is the entry point
/// for callers that cannot trust their write path to upsert.
///
/// # Errors
/// Returns [`OverlapError::DuplicateRecord`] on the first repeated tuple.
pub fn compute_overlap_checked(
    time_slots: &[TimeSlot],
    selected_user_ids: &[String],
) -> Result<OverlapResults> {
    let mut seen: HashSet<(&str, &str, &str, &str)> = HashSet::with_capacity(time_slots.len());
    for record in time_slots {
        let tuple = (
            record.event_id.as_str(),
            record.user_id.as_str(),
            record.date.as_str(),
            record.time_block.as_str(),
        );
        if !seen.insert(tuple) {
            return Err(OverlapError::DuplicateRecord {
                event_id: record.event_id.clone(),
                user_id: record.user_id.clone(),
                date: record.date.clone(),
                time_block: record.time_block.clone(),
            });
        }
    }

    Ok(compute_overlap(time_slots, selected_user_ids))
}
