use alloc::vec;
use alloc::vec::Vec;
use core::cmp;

use crate::Ptr;
use crate::list::OrderList;

/// Default number of buckets for a freshly constructed map.
pub(crate) const INITIAL_BUCKETS: usize = 16;

// Load factor 3/4, expressed in integer arithmetic.
const LOAD_FACTOR_NUM: usize = 3;
const LOAD_FACTOR_DEN: usize = 4;

#[cold]
#[inline(never)]
fn assert_chained() -> ! {
    panic!("entry missing from its bucket chain");
}

/// The hash-bucket index: an array of singly-linked chains over the order
/// list's live nodes.
///
/// The table never owns an entry; each chain link is the `bucket_next` field
/// stored inside the entry itself, so exactly one chain references every live
/// node. An entry's bucket is always `hash % len` with the table size current
/// at lookup time; nothing but the key hash is ever cached across a resize.
pub(crate) struct BucketTable {
    heads: Vec<Option<Ptr>>,
}

impl BucketTable {
    pub(crate) fn new() -> Self {
        Self::with_buckets(INITIAL_BUCKETS)
    }

    /// A table with at least `buckets` chains, rounded up to a power of two
    /// and never below [`INITIAL_BUCKETS`].
    pub(crate) fn with_buckets(buckets: usize) -> Self {
        let buckets = cmp::max(INITIAL_BUCKETS, buckets.next_power_of_two());
        BucketTable {
            heads: vec![None; buckets],
        }
    }

    /// A table sized so that `capacity` entries fit without growing.
    pub(crate) fn for_capacity(capacity: usize) -> Self {
        Self::with_buckets(capacity * LOAD_FACTOR_DEN / LOAD_FACTOR_NUM + 1)
    }

    #[cfg(test)]
    pub(crate) fn num_buckets(&self) -> usize {
        self.heads.len()
    }

    fn bucket_of(&self, hash: u64) -> usize {
        (hash % self.heads.len() as u64) as usize
    }

    /// True when inserting one more entry would push the load factor past
    /// 3/4. Checked before the insertion, so growth happens first and a new
    /// entry never lands in a chain that is about to be rebuilt.
    pub(crate) fn needs_grow(&self, len: usize) -> bool {
        len * LOAD_FACTOR_DEN >= self.heads.len() * LOAD_FACTOR_NUM
    }

    /// Scans the target bucket's chain for a matching key. Collisions resolve
    /// by chaining; equality of keys, not hashes, confirms a match.
    pub(crate) fn find<K, V>(
        &self,
        list: &OrderList<K, V>,
        hash: u64,
        mut is_match: impl FnMut(&K) -> bool,
    ) -> Option<Ptr> {
        let mut cursor = self.heads[self.bucket_of(hash)];
        while let Some(ptr) = cursor {
            let entry = list.entry(ptr);
            if entry.hash == hash && is_match(&entry.key) {
                return Some(ptr);
            }
            cursor = entry.bucket_next;
        }
        None
    }

    /// Prepends a chain reference for the live entry at `ptr`. Prepending is
    /// an internal choice with no observable effect: only the order list
    /// defines iteration order.
    pub(crate) fn insert_reference<K, V>(&mut self, list: &mut OrderList<K, V>, ptr: Ptr) {
        let bucket = self.bucket_of(list.entry(ptr).hash);
        let old_head = self.heads[bucket].replace(ptr);
        list.entry_mut(ptr).bucket_next = old_head;
    }

    /// Splices the chain reference for `ptr` out of its bucket. The entry
    /// itself is untouched; the caller unlinks it from the order list next.
    pub(crate) fn remove_reference<K, V>(&mut self, list: &mut OrderList<K, V>, ptr: Ptr) {
        let bucket = self.bucket_of(list.entry(ptr).hash);

        if self.heads[bucket] == Some(ptr) {
            self.heads[bucket] = list.entry(ptr).bucket_next;
            return;
        }

        let mut cursor = self.heads[bucket];
        while let Some(link) = cursor {
            let next = list.entry(link).bucket_next;
            if next == Some(ptr) {
                list.entry_mut(link).bucket_next = list.entry(ptr).bucket_next;
                return;
            }
            cursor = next;
        }

        assert_chained();
    }

    /// Doubles the table and re-links a reference for every live node,
    /// traversing the order list rather than the old chains. The order list
    /// itself is untouched, so insertion order survives unchanged.
    ///
    /// The new bucket array is allocated before any chain is rewritten; if
    /// that allocation fails, the old index is still intact.
    pub(crate) fn grow<K, V>(&mut self, list: &mut OrderList<K, V>) {
        let new_len = self.heads.len() * 2;
        let mut heads: Vec<Option<Ptr>> = vec![None; new_len];

        let mut ptr = list.first();
        while ptr != Ptr::TAIL {
            let next = list.next(ptr);
            let entry = list.entry_mut(ptr);
            let bucket = (entry.hash % new_len as u64) as usize;
            entry.bucket_next = heads[bucket].replace(ptr);
            ptr = next;
        }

        self.heads = heads;
    }

    /// Empties every chain without shrinking the table.
    pub(crate) fn clear(&mut self) {
        for head in &mut self.heads {
            *head = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn populate(n: u64) -> (BucketTable, OrderList<u64, u64>, Vec<Ptr>) {
        let mut table = BucketTable::new();
        let mut list = OrderList::new();
        let mut ptrs = Vec::new();
        for k in 0..n {
            // Deliberately colliding hashes: everything lands in few chains.
            let hash = k % 3;
            let ptr = list.insert_before_tail(hash, k, k * 10);
            table.insert_reference(&mut list, ptr);
            ptrs.push(ptr);
        }
        (table, list, ptrs)
    }

    #[test]
    fn with_buckets_rounds_up() {
        assert_eq!(BucketTable::new().num_buckets(), 16);
        assert_eq!(BucketTable::with_buckets(3).num_buckets(), 16);
        assert_eq!(BucketTable::with_buckets(17).num_buckets(), 32);
    }

    #[test]
    fn needs_grow_at_three_quarters() {
        let table = BucketTable::new();
        assert!(!table.needs_grow(11));
        assert!(table.needs_grow(12));
    }

    #[test]
    fn find_uses_key_equality_not_hash_equality() {
        let (table, list, ptrs) = populate(9);
        // Keys 0, 3, and 6 share hash 0 but must resolve individually.
        for k in [0u64, 3, 6] {
            let found = table.find(&list, 0, |key| *key == k);
            assert_eq!(found, Some(ptrs[k as usize]));
        }
        assert_eq!(table.find(&list, 0, |key| *key == 9), None);
    }

    #[test]
    fn remove_reference_from_head_and_middle_of_chain() {
        let (mut table, mut list, ptrs) = populate(9);

        // Chain for hash 0 is 6 -> 3 -> 0 (prepend order). Remove the head.
        table.remove_reference(&mut list, ptrs[6]);
        assert_eq!(table.find(&list, 0, |k| *k == 6), None);
        assert_eq!(table.find(&list, 0, |k| *k == 3), Some(ptrs[3]));

        // And an interior link.
        table.remove_reference(&mut list, ptrs[0]);
        assert_eq!(table.find(&list, 0, |k| *k == 0), None);
        assert_eq!(table.find(&list, 0, |k| *k == 3), Some(ptrs[3]));
    }

    #[test]
    fn grow_preserves_every_reference() {
        let (mut table, mut list, ptrs) = populate(9);
        table.grow(&mut list);
        assert_eq!(table.num_buckets(), 32);
        for (k, ptr) in ptrs.iter().enumerate() {
            let hash = (k % 3) as u64;
            assert_eq!(table.find(&list, hash, |key| *key == k as u64), Some(*ptr));
        }
    }

    #[test]
    fn grow_leaves_order_list_untouched() {
        let (mut table, mut list, _) = populate(9);
        let before: Vec<u64> = {
            let mut keys = Vec::new();
            let mut ptr = list.first();
            while ptr != Ptr::TAIL {
                keys.push(list.entry(ptr).key);
                ptr = list.next(ptr);
            }
            keys
        };
        table.grow(&mut list);
        let mut after = Vec::new();
        let mut ptr = list.first();
        while ptr != Ptr::TAIL {
            after.push(list.entry(ptr).key);
            ptr = list.next(ptr);
        }
        assert_eq!(before, after);
    }

    #[test]
    fn clear_empties_chains_but_keeps_size() {
        let (mut table, mut list, _) = populate(9);
        table.clear();
        assert_eq!(table.num_buckets(), 16);
        assert_eq!(table.find(&list, 0, |k| *k == 0), None);

        // The table is reusable after a clear.
        list.clear();
        let ptr = list.insert_before_tail(1, 42, 420);
        table.insert_reference(&mut list, ptr);
        assert_eq!(table.find(&list, 1, |k| *k == 42), Some(ptr));
    }
}
