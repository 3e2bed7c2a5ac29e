//! Left joins between current entities and their historical snapshots.

use crate::entities::Entity;
use std::collections::HashMap;

/// Historical snapshots indexed by identifier.
///
/// A lookup that finds nothing yields `None`; every metric computed from a
/// missing snapshot is then absent instead of zero.
#[derive(Debug)]
pub struct SnapshotIndex<'a, T> {
    by_id: HashMap<&'a str, &'a T>,
}

impl<'a, T: Entity> SnapshotIndex<'a, T> {
    /// Indexes the snapshots. If an id repeats, the first occurrence wins.
    #[must_use]
    pub fn new(snapshots: &'a [T]) -> Self {
        let mut by_id = HashMap::with_capacity(snapshots.len());
        for snapshot in snapshots {
            by_id.entry(snapshot.id()).or_insert(snapshot);
        }
        Self { by_id }
    }

    /// Returns the snapshot with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a T> {
        self.by_id.get(id).copied()
    }

    /// Number of indexed snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no snapshot was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Collects distinct identifiers in ascending order, the order time-travel
/// filters use.
pub fn sorted_ids<'a, I>(ids: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ids: Vec<String> = ids.into_iter().map(str::to_string).collect();
    ids.sort();
    ids.dedup();
    ids
}
