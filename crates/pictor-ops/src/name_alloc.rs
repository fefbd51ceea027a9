//! Album name allocation.

use compact_str::{CompactString, format_compact};
use itertools::Itertools;

/// Pick a unique `prefix<N>` display name given the sibling names.
///
/// Only siblings shaped exactly like the prefix followed by a positive
/// integer with no leading zero contribute a number. The lowest unused
/// number wins, so deleted albums leave gaps that are refilled before
/// the sequence grows.
pub fn allocate_album_name<I, S>(prefix: &str, siblings: I) -> CompactString
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut numbers: Vec<u64> = siblings
        .into_iter()
        .filter_map(|name| numeric_suffix(prefix, name.as_ref()))
        .collect();
    numbers.sort_unstable();

    let next = match numbers.first() {
        None => 1,
        Some(first) if *first > 1 => 1,
        _ => numbers
            .iter()
            .copied()
            .tuple_windows()
            .find(|&(low, high)| low + 1 < high)
            .map(|(low, _)| low + 1)
            .unwrap_or_else(|| numbers.last().copied().unwrap_or(0) + 1),
    };
    format_compact!("{prefix}{next}")
}

/// Extract `N` from a name shaped exactly like `prefix<N>`.
fn numeric_suffix(prefix: &str, name: &str) -> Option<u64> {
    let digits = name.strip_prefix(prefix)?;
    if digits.is_empty() || digits.starts_with('0') {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
