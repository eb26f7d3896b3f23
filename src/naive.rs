use std::collections::HashMap;

use crate::{is_skipped, Dominant};

pub type Table = HashMap<char, usize>;

pub fn count(input: &str, ignore_spaces: bool) -> (Table, Option<Dominant>) {
    let mut bank: Table = HashMap::new();
    let mut max = 0;
    let mut best = None;

    for c in input.chars() {
        if is_skipped(c, ignore_spaces) {
            continue;
        }
        let n = bank.entry(c).or_default();
        *n += 1;
        if *n > max {
            max = *n;
            best = Some(c);
        }
    }

    (bank, best.map(|ch| Dominant { ch, count: max }))
}
