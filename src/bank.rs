//! Dense counting for ASCII input.

use crate::{Dominant, FrequencyTable, Tally};

const N_ASCII: usize = 128;

/// Count `input` with a fixed array of counters indexed by byte.
///
/// Returns `None` if `input` is not all ASCII. The table is built in a second
/// pass over the input so that it keeps first-appearance order.
pub fn count(input: &str, ignore_spaces: bool) -> Option<Tally> {
    if !input.is_ascii() {
        return None;
    }

    let mut bank = [0usize; N_ASCII];
    let mut max = 0;
    let mut best = None;
    for b in input.bytes() {
        if ignore_spaces && b == b' ' {
            continue;
        }
        let n = &mut bank[usize::from(b)];
        *n += 1;
        if *n > max {
            max = *n;
            best = Some(b);
        }
    }

    let mut table = FrequencyTable::new();
    for b in input.bytes() {
        let n = &mut bank[usize::from(b)];
        // each slot is drained into the table on its first appearance
        for _ in 0..std::mem::take(n) {
            table.bump(char::from(b));
        }
    }

    Some(Tally {
        table,
        dominant: best.map(|b| Dominant {
            ch: char::from(b),
            count: max,
        }),
    })
}
