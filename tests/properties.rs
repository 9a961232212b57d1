//! Property tests for streak detection, ranking and gap statistics.

use proptest::prelude::*;
use streak_analyzer::{
    detect, gaps_by_length, select_top, GapStats, Streak, StreakDetector,
};

const THRESHOLD: f64 = 2.0;

/// Outcomes rounded to two decimals, with plenty of values on both sides of
/// the threshold and some exactly on it.
fn outcomes() -> impl Strategy<Value = Vec<f64>> {
    let value = prop_oneof![
        (99u32..200).prop_map(|c| c as f64 / 100.0),
        Just(THRESHOLD),
        (200u32..2000).prop_map(|c| c as f64 / 100.0),
    ];
    prop::collection::vec(value, 0..300)
}

fn streak_list() -> impl Strategy<Value = Vec<Streak>> {
    outcomes().prop_map(|seq| detect(&seq, THRESHOLD))
}

proptest! {
    #[test]
    fn streaks_are_maximal_disjoint_and_ordered(seq in outcomes()) {
        let streaks = detect(&seq, THRESHOLD);

        for pair in streaks.windows(2) {
            prop_assert!(pair[0].end_index() < pair[1].start_index());
        }
        for streak in &streaks {
            prop_assert!(streak.length() >= 1);
            prop_assert_eq!(streak.values(), &seq[streak.start_index()..streak.end_index()]);
            prop_assert!(streak.values().iter().all(|&v| v < THRESHOLD));
            if streak.start_index() > 0 {
                prop_assert!(seq[streak.start_index() - 1] >= THRESHOLD);
            }
            if streak.end_index() < seq.len() {
                prop_assert!(seq[streak.end_index()] >= THRESHOLD);
            }
        }
    }

    #[test]
    fn streak_lengths_cover_exactly_the_below_values(seq in outcomes()) {
        let streaks = detect(&seq, THRESHOLD);
        let covered: usize = streaks.iter().map(Streak::length).sum();
        let below = seq.iter().filter(|&&v| v < THRESHOLD).count();

        prop_assert!(covered <= seq.len());
        prop_assert_eq!(covered, below);
        prop_assert_eq!(covered == seq.len(), seq.iter().all(|&v| v < THRESHOLD));
    }

    #[test]
    fn redetecting_a_streak_yields_itself(seq in outcomes()) {
        for streak in detect(&seq, THRESHOLD) {
            let again = detect(streak.values(), THRESHOLD);
            prop_assert_eq!(again, vec![Streak::new(0, streak.values().to_vec())]);
        }
    }

    #[test]
    fn incremental_detection_matches_batch(seq in outcomes()) {
        let mut detector = StreakDetector::new(THRESHOLD);
        let mut streaks: Vec<Streak> = seq.iter().filter_map(|&v| detector.push(v)).collect();
        streaks.extend(detector.finish());

        prop_assert_eq!(streaks, detect(&seq, THRESHOLD));
    }

    #[test]
    fn select_all_returns_every_streak_in_order(streaks in streak_list(), extra in 0usize..5) {
        let top = select_top(&streaks, streaks.len() + extra);
        let selected: Vec<Streak> = top.iter().map(|r| r.streak.clone()).collect();

        prop_assert_eq!(selected, streaks);
    }

    #[test]
    fn select_top_keeps_longest_and_earliest(streaks in streak_list(), n in 0usize..20) {
        let top = select_top(&streaks, n);
        prop_assert_eq!(top.len(), n.min(streaks.len()));

        for pair in top.windows(2) {
            prop_assert!(pair[0].streak.start_index() < pair[1].streak.start_index());
        }

        // Every streak left out is shorter than, or ties with and starts
        // after, every selected streak.
        for left_out in streaks.iter().filter(|s| !top.iter().any(|r| &r.streak == *s)) {
            for kept in &top {
                prop_assert!(
                    left_out.length() < kept.streak.length()
                        || (left_out.length() == kept.streak.length()
                            && left_out.start_index() > kept.streak.start_index())
                );
            }
        }
    }

    #[test]
    fn gap_statistics_are_consistent(streaks in streak_list()) {
        let stats = GapStats::compute(&streaks);

        if streaks.len() < 2 {
            prop_assert_eq!(stats, GapStats::default());
        } else {
            prop_assert_eq!(stats.count, streaks.len() - 1);
            prop_assert!(stats.min as f64 <= stats.mean + 1e-9);
            prop_assert!(stats.mean <= stats.max as f64 + 1e-9);
            prop_assert_eq!(stats.min_pair.map(|p| p.gap), Some(stats.min));
            prop_assert_eq!(stats.max_pair.map(|p| p.gap), Some(stats.max));
        }

        for (length, entry) in gaps_by_length(&streaks) {
            let occurrences = streaks.iter().filter(|s| s.length() == length).count();
            prop_assert!(occurrences >= 2);
            prop_assert_eq!(entry.count, occurrences);
            prop_assert!(entry.min_gap <= entry.max_gap);
        }
    }
}
