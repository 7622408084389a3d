//! Consolidation: collapse duplicate grouping keys into summed totals.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::record::{GroupKey, Record};

/// Collapse records sharing a grouping key into one record with the summed
/// quantity.
///
/// Single forward pass over the input, tracking each key's slot in the
/// output, so every group sits at the position of its first occurrence and
/// the whole pass is O(n) expected time. Empty input yields empty output.
/// The input is consumed, never mutated in place.
pub fn consolidate(records: impl IntoIterator<Item = Record>) -> Vec<Record> {
    let mut slots: HashMap<GroupKey, usize> = HashMap::new();
    let mut consolidated: Vec<Record> = Vec::new();

    for record in records {
        match slots.entry(record.group_key()) {
            Entry::Occupied(slot) => {
                let seen = &mut consolidated[*slot.get()];
                *seen = seen.merge(&record);
            }
            Entry::Vacant(slot) => {
                slot.insert(consolidated.len());
                consolidated.push(record);
            }
        }
    }

    consolidated
}
