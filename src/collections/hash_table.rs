//! [Hash Table] implementation with open-addressing and linear probing.
//!
//! The table has a fixed capacity chosen at construction and never resizes
//! or rehashes. Deleted slots are tombstoned so probe chains stay intact.
//!
//! Just use [`HashMap`].
//!
//! [Hash Table]: https://en.wikipedia.org/wiki/Hash_table
//! [`HashMap`]: std::collections::HashMap

use std::fmt;
use std::io;

use core::mem;

use thiserror::Error;

/// Error returned by [`HashTable::insert`] when no insertable slot remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hash table is full (capacity {0})")]
pub struct CapacityError(
    /// The table's fixed capacity.
    pub usize,
);

/// A single bucket of the table.
///
/// Tombstones distinguish "never used" from "was used, now deleted": probes
/// continue past them during lookup, but they count as insertable space.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<V> {
    /// Never held an entry.
    Empty,
    /// Holds a live entry.
    Occupied {
        /// Entry key.
        key: String,
        /// Entry value.
        value: V,
    },
    /// Previously occupied, now deleted, still blocking the probe chain.
    Tombstone,
}

/// [Hash Table] implementation with open-addressing and linear probing.
///
/// Keys are strings, hashed with a polynomial rolling hash reduced modulo
/// the table capacity. Collisions are resolved by scanning sequential slots,
/// wrapping at capacity. The capacity is fixed at construction; when a probe
/// finds no slot to place into, [`insert`] fails with [`CapacityError`]
/// rather than probing forever.
///
/// Just use [`HashMap`].
///
/// [`insert`]: HashTable::insert
/// [Hash Table]: https://en.wikipedia.org/wiki/Hash_table
/// [`HashMap`]: std::collections::HashMap
#[derive(Clone, PartialEq, Eq)]
pub struct HashTable<V> {
    /// Fixed bucket array.
    slots: Box<[Slot<V>]>,
    /// Number of occupied slots. Tombstones are not counted.
    len: usize,
}

/// An iterator over a `HashTable`'s occupied slots in index order.
#[derive(Debug)]
pub struct Iter<'a, V> {
    slots: &'a [Slot<V>],
    idx: usize,
}

impl<V> HashTable<V> {
    /// Default number of slots.
    pub const DEFAULT_CAPACITY: usize = 20;

    /// Creates an empty `HashTable` with the default capacity of 20 slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let table: HashTable<i32> = HashTable::new();
    /// assert_eq!(table.capacity(), 20);
    /// assert!(table.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty `HashTable` with exactly `capacity` slots.
    ///
    /// Unlike a growable table, `capacity` is a hard limit on the number of
    /// live entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; the hash is reduced modulo the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let table: HashTable<i32> = HashTable::with_capacity(4);
    /// assert_eq!(table.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be non-zero");

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);

        Self {
            slots: slots.into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the slot index for `key`.
    ///
    /// The hash is a polynomial rolling hash: starting from 0, each
    /// character folds in as `acc = (acc * 31 + char) % capacity`. The
    /// formula is part of the table's contract; with the default capacity of
    /// 20, `"key1"` lands on slot 18 and `"key2"` on slot 19.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let table: HashTable<i32> = HashTable::new();
    /// assert_eq!(table.hash("key1"), 18);
    /// assert_eq!(table.hash("key2"), 19);
    /// ```
    pub fn hash(&self, key: &str) -> usize {
        key.chars().fold(0, |acc, c| {
            (acc.wrapping_mul(31).wrapping_add(c as usize)) % self.capacity()
        })
    }

    /// Inserts a key-value pair into the table.
    ///
    /// Probes linearly from `hash(key)` to the first slot that is empty,
    /// tombstoned, or already holds `key`. Placing into an empty or
    /// tombstoned slot grows the length; overwriting an existing key does
    /// not, and returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the probe visits every slot without
    /// finding one to place into.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time, worst case *O*(*capacity*) when the probe
    /// chain is long.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut table = HashTable::new();
    /// assert_eq!(table.insert("a", 1), Ok(None));
    /// assert_eq!(table.insert("a", 2), Ok(Some(1)));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>, CapacityError> {
        let key = key.into();
        let start = self.hash(&key);
        let capacity = self.capacity();

        for i in 0..capacity {
            let idx = (start + i) % capacity;

            match &mut self.slots[idx] {
                slot @ (Slot::Empty | Slot::Tombstone) => {
                    *slot = Slot::Occupied { key, value };
                    self.len += 1;
                    return Ok(None);
                }
                Slot::Occupied {
                    key: existing,
                    value: stored,
                } if *existing == key => {
                    return Ok(Some(mem::replace(stored, value)));
                }
                Slot::Occupied { .. } => continue,
            }
        }

        Err(CapacityError(capacity))
    }

    /// Returns a reference to the value corresponding to the key, or
    /// [`None`] if it is absent.
    ///
    /// Probes linearly from `hash(key)`, skipping over tombstones. The probe
    /// stops at a truly empty slot, or after visiting `capacity + 1` slots,
    /// which guards against cycling forever on a table with no empty slots.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time, worst case *O*(*capacity*).
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("a", 1).unwrap();
    ///
    /// assert_eq!(table.get("a"), Some(&1));
    /// assert_eq!(table.get("b"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&V> {
        let start = self.hash(key);
        let capacity = self.capacity();

        for i in 0..=capacity {
            let idx = (start + i) % capacity;

            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Tombstone => continue,
                Slot::Occupied {
                    key: existing,
                    value,
                } => {
                    if existing == key {
                        return Some(value);
                    }
                }
            }
        }

        None
    }

    /// Removes a key from the table, returning the value if the key was
    /// present.
    ///
    /// The slot is replaced with a tombstone rather than emptied, so probe
    /// chains running through it keep working for other keys. The probe is
    /// bounded at `capacity` visits.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time, worst case *O*(*capacity*).
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("a", 1).unwrap();
    ///
    /// assert_eq!(table.remove("a"), Some(1));
    /// assert_eq!(table.remove("a"), None);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let start = self.hash(key);
        let capacity = self.capacity();

        for i in 0..capacity {
            let idx = (start + i) % capacity;

            let matched = match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Tombstone => false,
                Slot::Occupied { key: existing, .. } => existing == key,
            };

            if matched {
                let slot = mem::replace(&mut self.slots[idx], Slot::Tombstone);
                self.len -= 1;

                match slot {
                    Slot::Occupied { value, .. } => return Some(value),
                    // The slot was just matched as occupied.
                    Slot::Empty | Slot::Tombstone => unreachable!(),
                }
            }
        }

        None
    }

    /// Returns `true` if the table contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("a", 1).unwrap();
    ///
    /// assert!(table.contains_key("a"));
    /// assert!(!table.contains_key("b"));
    /// ```
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns an iterator over the occupied slots in index order, yielding
    /// `(index, key, value)` triples.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let table: HashTable<i32> = HashTable::new();
    /// assert_eq!(table.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: &self.slots,
            idx: 0,
        }
    }

    /// Returns the number of live entries in the table. Tombstones are not
    /// counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no live entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed number of slots in the table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<V: fmt::Display> HashTable<V> {
    /// Writes every occupied slot to `out` in index order, one
    /// `index = i, key = k, value = v` line per entry. Diagnostic output
    /// only; tombstoned and empty slots are skipped.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from the underlying writer.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::prelude::*;
    ///
    /// let mut table = HashTable::new();
    /// table.insert("key1", 100).unwrap();
    ///
    /// let mut out = Vec::new();
    /// table.display(&mut out).unwrap();
    ///
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "index = 18, key = key1, value = 100\n",
    /// );
    /// ```
    pub fn display<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for (idx, key, value) in self.iter() {
            writeln!(out, "index = {idx}, key = {key}, value = {value}")?;
        }

        Ok(())
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(_, key, value)| (key, value)))
            .finish()
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (usize, &'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < self.slots.len() {
            let i = self.idx;
            self.idx += 1;

            if let Slot::Occupied { key, value } = &self.slots[i] {
                return Some((i, key, value));
            }
        }

        None
    }
}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type IntoIter = Iter<'a, V>;
    type Item = (usize, &'a str, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hash_fixtures() {
        let table: HashTable<i32> = HashTable::new();

        assert_eq!(table.hash("key1"), 18);
        assert_eq!(table.hash("key2"), 19);
        assert_eq!(table.hash("key3"), 0);
        assert_eq!(table.hash(""), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let mut table = HashTable::new();
        table.insert("key1", 100).unwrap();
        table.insert("key2", 200).unwrap();
        table.insert("key3", 300).unwrap();

        assert_eq!(table.get("key1"), Some(&100));
        assert_eq!(table.get("key2"), Some(&200));
        assert_eq!(table.get("key3"), Some(&300));
    }

    #[test]
    fn test_get_missing_key() {
        let table: HashTable<i32> = HashTable::new();
        assert_eq!(table.get("nonExistingKey"), None);
    }

    #[test]
    fn test_insert_overwrite_keeps_len() {
        let mut table = HashTable::new();

        assert_eq!(table.insert("k", 1), Ok(None));
        assert_eq!(table.insert("k", 2), Ok(Some(1)));

        assert_eq!(table.get("k"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_linear_probing_on_collision() {
        // Every key collides in a single-digit table; linear probing must
        // keep them all reachable.
        let mut table = HashTable::with_capacity(4);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        table.insert("c", 3).unwrap();
        table.insert("d", 4).unwrap();

        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.get("b"), Some(&2));
        assert_eq!(table.get("c"), Some(&3));
        assert_eq!(table.get("d"), Some(&4));
    }

    #[test]
    fn test_insert_full_table() {
        let mut table = HashTable::with_capacity(2);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();

        assert_eq!(table.insert("c", 3), Err(CapacityError(2)));
        // Overwriting an existing key still works at capacity.
        assert_eq!(table.insert("a", 9), Ok(Some(1)));
    }

    #[test]
    fn test_remove_returns_value() {
        let mut table = HashTable::new();
        table.insert("key1", 100).unwrap();
        table.insert("key2", 200).unwrap();

        assert_eq!(table.remove("key1"), Some(100));
        assert_eq!(table.get("key1"), None);
        assert_eq!(table.get("key2"), Some(&200));
    }

    #[test]
    fn test_remove_missing_key() {
        let mut table: HashTable<i32> = HashTable::new();
        assert_eq!(table.remove("ghost"), None);
    }

    #[test]
    fn test_len_tracks_live_entries() {
        let mut table = HashTable::new();
        assert_eq!(table.len(), 0);

        table.insert("key1", 100).unwrap();
        table.insert("key2", 200).unwrap();
        assert_eq!(table.len(), 2);

        table.remove("key1");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_is_empty() {
        let mut table = HashTable::new();
        assert!(table.is_empty());

        table.insert("key1", 100).unwrap();
        assert!(!table.is_empty());

        table.remove("key1");
        assert!(table.is_empty());
    }

    #[test]
    fn test_probe_continues_past_tombstone() {
        // "key1" hashes to 18 and "key2" to 19, a contiguous probe chain.
        let mut table = HashTable::new();
        table.insert("key1", 1).unwrap();
        table.insert("key2", 2).unwrap();

        // A tombstone at 18 must not hide the entry at 19.
        table.remove("key1");
        assert_eq!(table.get("key2"), Some(&2));
    }

    #[test]
    fn test_tombstone_is_insertable() {
        let mut table = HashTable::with_capacity(2);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();

        table.remove("a");
        assert_eq!(table.len(), 1);

        // The tombstoned slot is reusable even though the table was full.
        assert_eq!(table.insert("c", 3), Ok(None));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("c"), Some(&3));
        assert_eq!(table.get("b"), Some(&2));
    }

    #[test]
    fn test_get_bounded_on_tombstone_only_table() {
        let mut table = HashTable::with_capacity(3);
        table.insert("a", 1).unwrap();
        table.insert("b", 2).unwrap();
        table.insert("c", 3).unwrap();
        table.remove("a");
        table.remove("b");
        table.remove("c");

        // No empty slot remains; the visit guard must terminate the probe.
        assert_eq!(table.get("ghost"), None);
        assert_eq!(table.remove("ghost"), None);
    }

    #[test]
    fn test_display_output() {
        let mut table = HashTable::new();
        table.insert("key1", 100).unwrap();
        table.insert("key2", 200).unwrap();

        let mut out = Vec::new();
        table.display(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "index = 18, key = key1, value = 100\n\
             index = 19, key = key2, value = 200\n",
        );
    }

    #[test]
    fn test_display_skips_tombstones() {
        let mut table = HashTable::new();
        table.insert("key1", 100).unwrap();
        table.insert("key2", 200).unwrap();
        table.remove("key1");

        let mut out = Vec::new();
        table.display(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "index = 19, key = key2, value = 200\n",
        );
    }

    #[test]
    fn test_debug_print() {
        let mut table = HashTable::new();
        table.insert("key1", 1).unwrap();
        table.insert("key2", 2).unwrap();

        // Iteration is in slot order: 18 then 19.
        assert_eq!(format!("{table:?}"), r#"{"key1": 1, "key2": 2}"#);
    }

    #[test]
    fn test_insert_remove_sequences_track_size() {
        let mut table = HashTable::with_capacity(11);
        let keys = ["a", "b", "c", "d", "e", "f"];

        for (i, key) in keys.iter().enumerate() {
            table.insert(*key, i as i32).unwrap();
        }
        assert_eq!(table.len(), keys.len());

        for key in &keys[..3] {
            assert!(table.remove(key).is_some());
        }
        assert_eq!(table.len(), 3);

        for key in &keys[..3] {
            assert_eq!(table.get(key), None);
        }
        for (i, key) in keys.iter().enumerate().skip(3) {
            assert_eq!(table.get(key), Some(&(i as i32)));
        }
    }
}
