//! Property-based tests for the numeric core.
//!
//! # Invariants tested
//!
//! - **Score range:** scores stay within `[0, 10]` when rates sum to at most 1.
//! - **Similarity:** symmetric, within `[0, 100]`, and 100 for identical profiles.
//! - **Normalization:** idempotent and free of combining marks.
//! - **Collision bounds:** de-collided positions stay on the plot.
//! - **Ticks:** at most eight Y ticks, ascending.

use brevet_prenoms::chart::{CollisionConfig, PlotSize, Position, resolve_collisions, y_ticks};
use brevet_prenoms::{NameRecord, normalize, score, similarity};
use proptest::prelude::*;

/// Rates that partition the candidate pool, with a share left without outcome.
fn record_strategy() -> impl Strategy<Value = NameRecord> {
    (1_u64..100_000, prop::array::uniform6(0.0..1.0_f64)).prop_map(|(count, shares)| {
        let total: f64 = shares.iter().sum::<f64>().max(f64::EPSILON);
        let [sm, ab, b, tb, fel, _] = shares.map(|share| share / total);
        NameRecord {
            firstname: "prop".to_string(),
            count,
            sm,
            ab,
            b,
            tb,
            fel,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn score_stays_in_range(record in record_strategy()) {
        let value = score(&record);
        prop_assert!((0.0..=10.0 + 1e-9).contains(&value), "score {} out of range", value);
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in record_strategy(), b in record_strategy()) {
        let ab = similarity(&a, &b);
        let ba = similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-9);
        prop_assert!((0.0..=100.0).contains(&ab));
        prop_assert!((similarity(&a, &a) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn normalize_is_idempotent(
        text in "[a-zA-ZàâäéèêëîïôöùûüÿçœÀÂÄÉÈÊËÎÏÔÖÙÛÜŸÇ' -]{0,20}",
    ) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(
            once.chars().all(|c| !('\u{0300}'..='\u{036f}').contains(&c)),
            "combining mark left in {:?}",
            once
        );
    }

    #[test]
    fn collision_positions_stay_on_plot(
        points in prop::collection::vec((-100.0..1100.0_f64, -100.0..900.0_f64), 10..40),
        min_distance in 5.0..40.0_f64,
    ) {
        let plot = PlotSize { width: 1000.0, height: 800.0 };
        let initial: Vec<Position> = points.iter().map(|&(x, y)| Position::new(x, y)).collect();
        let config = CollisionConfig { min_distance, max_iterations: 50, repulsion_force: 0.6 };
        let outcome = resolve_collisions(&initial, plot, &config);

        prop_assert_eq!(outcome.positions.len(), initial.len());
        for p in &outcome.positions {
            prop_assert!((20.0..=980.0).contains(&p.x), "x {} escaped", p.x);
            prop_assert!((10.0..=790.0).contains(&p.y), "y {} escaped", p.y);
        }
    }

    #[test]
    fn y_ticks_are_bounded_and_ascending(y_min in 1.0..5_000.0_f64, span in 1.0..50.0_f64) {
        let ticks = y_ticks(y_min, y_min * span);
        prop_assert!(ticks.len() <= 8);
        prop_assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }
}
