//! Property-based tests for the counters.

use proptest::prelude::*;

use crate::{bank, count, naive};

// Small alphabet so ties and repeats are common
fn text() -> impl Strategy<Value = String> {
    "[ab c\t\u{e9}]{0,40}"
}

fn ascii_text() -> impl Strategy<Value = String> {
    "[ -~]{0,60}"
}

fn stripped(s: &str, ignore: bool) -> String {
    if ignore {
        s.replace(' ', "")
    } else {
        s.to_string()
    }
}

proptest! {
    #[test]
    fn total_is_length(s in text(), ignore in any::<bool>()) {
        let tally = count(&s, ignore);
        prop_assert_eq!(tally.table.total(), stripped(&s, ignore).chars().count());
    }

    #[test]
    fn counts_are_occurrences(s in text(), ignore in any::<bool>()) {
        let tally = count(&s, ignore);
        let input = stripped(&s, ignore);
        for (c, n) in tally.table.iter() {
            prop_assert_eq!(n, input.chars().filter(|&x| x == c).count());
        }
        for c in input.chars() {
            prop_assert!(tally.table.contains(c));
        }
    }

    #[test]
    fn deterministic(s in text(), ignore in any::<bool>()) {
        prop_assert_eq!(count(&s, ignore), count(&s, ignore));
    }

    #[test]
    fn ignoring_spaces_is_stripping(s in text()) {
        prop_assert_eq!(count(&s, true), count(&s.replace(' ', ""), false));
    }

    #[test]
    fn dominant_is_first_to_reach_max(s in text(), ignore in any::<bool>()) {
        let input = stripped(&s, ignore);
        let tally = count(&s, ignore);
        match tally.dominant {
            None => prop_assert!(input.is_empty()),
            Some(d) => {
                let max = tally.table.iter().map(|(_, n)| n).max().unwrap_or(0);
                prop_assert_eq!(d.count, max);
                // no character reaches max before the winner does
                let mut seen = std::collections::HashMap::new();
                for c in input.chars() {
                    let n = seen.entry(c).or_insert(0usize);
                    *n += 1;
                    if *n == max {
                        prop_assert_eq!(c, d.ch);
                        break;
                    }
                }
            }
        }
    }

    #[test]
    fn naive_agrees(s in text(), ignore in any::<bool>()) {
        let tally = count(&s, ignore);
        let (table, dominant) = naive::count(&s, ignore);
        prop_assert!(tally.table == table);
        prop_assert_eq!(tally.dominant, dominant);
    }

    #[test]
    fn bank_agrees(s in ascii_text(), ignore in any::<bool>()) {
        let tally = bank::count(&s, ignore);
        prop_assert_eq!(tally.as_ref().map(|t| t.table.iter().collect::<Vec<_>>()),
            Some(count(&s, ignore).table.iter().collect::<Vec<_>>()));
        prop_assert_eq!(tally, Some(count(&s, ignore)));
    }
}
