use std::collections::HashMap;

use crate::grid::Position;

/// Count the cheats available along a single racetrack path, keyed by steps saved.
///
/// A cheat jumps from `path[i]` to a later `path[j]` through walls in `d` steps, where `d` is
/// their Manhattan distance. It's allowed when `d <= max_cheat_len` and saves `j - i - d`.
pub fn cheat_savings(path: &[Position], max_cheat_len: usize) -> HashMap<usize, usize> {
    let mut savings = HashMap::new();
    for (i, from_pos) in path.iter().enumerate() {
        for (j, to_pos) in path.iter().enumerate().skip(i + 1) {
            let cheat_len = from_pos.manhattan_distance(to_pos);
            let track_len = j - i;
            if cheat_len <= max_cheat_len && cheat_len < track_len {
                *savings.entry(track_len - cheat_len).or_insert(0) += 1;
            }
        }
    }

    savings
}

pub fn cheats_saving_at_least(savings: &HashMap<usize, usize>, threshold: usize) -> usize {
    savings
        .iter()
        .filter(|(saving, _)| **saving >= threshold)
        .map(|(_, count)| *count)
        .sum()
}
