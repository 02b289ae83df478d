//! Keyed map of rendered entries shared by both reconcilers.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// Rendered entries indexed by identifier.
///
/// Entries are created lazily on first sight and destroyed as soon as a
/// snapshot no longer mentions their identifier.
#[derive(Debug)]
pub struct RenderedEntries<K, E> {
    entries: BTreeMap<K, E>,
}

impl<K, E> Default for RenderedEntries<K, E> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy, E> RenderedEntries<K, E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entry for `key`, creating it with `create` when absent.
    ///
    /// Returns `None` only when the entry is absent and `create` fails; the
    /// next call will try again.
    pub fn get_or_create(
        &mut self,
        key: K,
        create: impl FnOnce() -> Option<E>,
    ) -> Option<&mut E> {
        match self.entries.entry(key) {
            std::collections::btree_map::Entry::Occupied(slot) => Some(slot.into_mut()),
            std::collections::btree_map::Entry::Vacant(slot) => create().map(|e| slot.insert(e)),
        }
    }

    /// Like [`get_or_create`](Self::get_or_create), but `create` also gets
    /// the entry with the next higher key so it can be placed before it.
    pub fn get_or_create_ordered(
        &mut self,
        key: K,
        create: impl FnOnce(Option<&E>) -> Option<E>,
    ) -> Option<&mut E> {
        if !self.entries.contains_key(&key) {
            let next = self
                .entries
                .range((Bound::Excluded(key), Bound::Unbounded))
                .next()
                .map(|(_, entry)| entry);
            let entry = create(next)?;
            self.entries.insert(key, entry);
        }
        self.entries.get_mut(&key)
    }

    /// Remove every entry whose key is not in `seen`, passing it to `remove`.
    pub fn prune(&mut self, seen: &BTreeSet<K>, mut remove: impl FnMut(K, E)) {
        let (kept, stale): (BTreeMap<K, E>, BTreeMap<K, E>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|(key, _)| seen.contains(key));
        self.entries = kept;
        for (key, entry) in stale {
            remove(key, entry);
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&E> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Identifiers in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
