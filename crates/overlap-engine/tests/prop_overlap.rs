//! Property-based tests for the overlap engine using proptest.
//!
//! These verify the structural invariants that must hold for *any*
//! duplicate-free input, not just the hand-written examples in
//! `overlap_tests.rs` and `flexible_tests.rs`.

use proptest::prelude::*;

use overlap_engine::{
    compute_flexible_overlap, compute_overlap, FlexibleOverlapOptions, TimeSlot,
};

// ---------------------------------------------------------------------------
// Strategies -- small pools keep collisions (shared cells) likely
// ---------------------------------------------------------------------------

const USER_POOL: [&str; 6] = ["ana", "bo", "cleo", "dev", "eli", "fern"];
const DATE_POOL: [&str; 4] = ["2026-03-02", "2026-03-03", "2026-03-04", "2026-03-05"];
const BLOCK_POOL: [&str; 4] = [
    "09:00-09:30",
    "09:30-10:00",
    "10:00-10:30",
    "10:30-11:00",
];

/// Generate a duplicate-free record set: at most one answer per
/// (user, date, block) tuple, which is the invariant the upsert write path
/// guarantees.
fn arb_records() -> impl Strategy<Value = Vec<TimeSlot>> {
    prop::collection::hash_map(
        (
            0..USER_POOL.len(),
            0..DATE_POOL.len(),
            0..BLOCK_POOL.len(),
        ),
        any::<bool>(),
        0..48,
    )
    .prop_map(|answers| {
        answers
            .into_iter()
            .map(|((u, d, b), is_available)| TimeSlot {
                id: format!("{}-{}-{}", u, d, b),
                event_id: "evt-1".to_string(),
                user_id: USER_POOL[u].to_string(),
                date: DATE_POOL[d].to_string(),
                time_block: BLOCK_POOL[b].to_string(),
                is_available,
            })
            .collect()
    })
}

/// Generate a distinct participant subset of the user pool.
fn arb_selected() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set(0..USER_POOL.len(), 0..=USER_POOL.len())
        .prop_map(|set| set.into_iter().map(|i| USER_POOL[i].to_string()).collect())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

fn membership(results_bucket: &[overlap_engine::OverlapSlot], date: &str, block: &str) -> usize {
    results_bucket
        .iter()
        .filter(|s| s.date == date && s.time_block == block)
        .count()
}

// ---------------------------------------------------------------------------
// Property 1: Idempotence -- identical inputs give structurally equal results
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn aggregation_is_idempotent(records in arb_records(), selected in arb_selected()) {
        let first = compute_overlap(&records, &selected);
        let second = compute_overlap(&records, &selected);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Partition -- every observed slot is in exactly one bucket
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn observed_slots_land_in_exactly_one_bucket(
        records in arb_records(),
        selected in arb_selected(),
    ) {
        let results = compute_overlap(&records, &selected);

        let bucket_total =
            results.all_available.len() + results.all_unavailable.len() + results.partial.len();
        prop_assert_eq!(bucket_total, results.by_date_time.len());

        for (_, slot) in &results.by_date_time {
            let hits = membership(&results.all_available, &slot.date, &slot.time_block)
                + membership(&results.all_unavailable, &slot.date, &slot.time_block)
                + membership(&results.partial, &slot.date, &slot.time_block);
            prop_assert_eq!(
                hits,
                1,
                "slot {} {} appears in {} buckets",
                slot.date,
                slot.time_block,
                hits
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Count invariant -- counts never exceed the participant total
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn counts_never_exceed_the_participant_total(
        records in arb_records(),
        selected in arb_selected(),
    ) {
        let results = compute_overlap(&records, &selected);

        for (_, slot) in &results.by_date_time {
            prop_assert!(
                slot.available_count + slot.unavailable_count <= slot.total_participants,
                "slot {} {}: {} + {} > {}",
                slot.date,
                slot.time_block,
                slot.available_count,
                slot.unavailable_count,
                slot.total_participants
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Equivalence -- flexible at unanimity equals strict
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn flexible_at_unanimity_matches_strict(
        records in arb_records(),
        selected in arb_selected(),
    ) {
        let strict = compute_overlap(&records, &selected);

        let options = FlexibleOverlapOptions {
            min_required: Some(selected.len()),
            ..Default::default()
        };
        let flexible = compute_flexible_overlap(&records, &selected, &options);

        prop_assert_eq!(strict, flexible);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Monotonic threshold -- raising min_required never admits a slot
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn raising_the_threshold_never_admits_new_slots(
        records in arb_records(),
        selected in arb_selected(),
        a in 0usize..8,
        b in 0usize..8,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let at = |min: usize| {
            compute_flexible_overlap(
                &records,
                &selected,
                &FlexibleOverlapOptions {
                    min_required: Some(min),
                    ..Default::default()
                },
            )
        };

        let low_results = at(low);
        let high_results = at(high);

        for slot in &high_results.all_available {
            prop_assert!(
                membership(&low_results.all_available, &slot.date, &slot.time_block) == 1,
                "slot {} {} admitted at min={} but not at min={}",
                slot.date,
                slot.time_block,
                high,
                low
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Ratio definition -- count over roster size, 0 for an empty roster
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ratios_follow_the_roster_denominator(
        records in arb_records(),
        selected in arb_selected(),
    ) {
        let results = compute_overlap(&records, &selected);

        for (_, slot) in &results.by_date_time {
            let expected = if slot.total_participants == 0 {
                0.0
            } else {
                slot.available_count as f64 / slot.total_participants as f64
            };
            prop_assert_eq!(slot.availability_ratio, expected);
            prop_assert_eq!(slot.total_participants, selected.len());
        }
    }
}
