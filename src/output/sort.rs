//! Optional mtime ordering of listings

use crate::tree::Entry;

use super::config::SortOrder;

/// Sort `entries` by mtime. The sort is stable, so ties keep visit order.
///
/// With `keep_first`, the first entry stays in place; the directory
/// listing uses this to keep the scan root on top.
pub fn sort_entries(entries: &mut [Entry], order: SortOrder, keep_first: bool) {
    let rest = if keep_first {
        match entries.split_first_mut() {
            Some((_, rest)) => rest,
            None => return,
        }
    } else {
        entries
    };

    match order {
        SortOrder::None => {}
        SortOrder::Newest => rest.sort_by(|a, b| b.modified.cmp(&a.modified)),
        SortOrder::Oldest => rest.sort_by_key(|e| e.modified),
    }
}
