use alloc::vec::Vec;
use core::mem;

use crate::Ptr;

#[cold]
#[inline(never)]
fn assert_entry() -> ! {
    panic!("position does not refer to a live entry");
}

#[cold]
#[inline(never)]
fn assert_free_list() -> ! {
    panic!("free-list head does not refer to a free slot");
}

/// Payload of a live entry node.
///
/// `hash` caches the full key hash so that growth never has to re-hash keys;
/// the bucket an entry lands in is always recomputed from `hash` and the
/// current table size. `bucket_next` is the entry's non-owning link in its
/// bucket chain.
#[derive(Debug)]
pub(crate) struct EntryData<K, V> {
    pub(crate) hash: u64,
    pub(crate) bucket_next: Option<Ptr>,
    pub(crate) key: K,
    pub(crate) value: V,
}

#[derive(Debug)]
enum Slot<K, V> {
    Sentinel,
    Free { next_free: Option<Ptr> },
    Entry(EntryData<K, V>),
}

/// One arena slot: order-list links plus payload.
///
/// Sentinels participate in the `prev`/`next` chain but never hold data. Free
/// slots keep their links pointing at themselves; only the free list
/// references them.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) prev: Ptr,
    pub(crate) next: Ptr,
    slot: Slot<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn entry_mut(&mut self) -> &mut EntryData<K, V> {
        match &mut self.slot {
            Slot::Entry(data) => data,
            _ => assert_entry(),
        }
    }
}

/// The doubly-linked order list, backed by an arena of slots.
///
/// The list is the sole owner of every entry's lifetime: entries are created
/// by [`insert_before_tail`](OrderList::insert_before_tail) and destroyed by
/// [`unlink_remove`](OrderList::unlink_remove) or [`clear`](OrderList::clear).
/// Slots 0 and 1 are the permanent head and tail sentinels; when the list is
/// empty, `head.next == tail` and `tail.prev == head`.
pub(crate) struct OrderList<K, V> {
    nodes: Vec<Node<K, V>>,
    free_head: Option<Ptr>,
}

impl<K, V> OrderList<K, V> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(2));
        nodes.push(Node {
            prev: Ptr::HEAD,
            next: Ptr::TAIL,
            slot: Slot::Sentinel,
        });
        nodes.push(Node {
            prev: Ptr::HEAD,
            next: Ptr::TAIL,
            slot: Slot::Sentinel,
        });
        OrderList {
            nodes,
            free_head: None,
        }
    }

    pub(crate) fn next(&self, ptr: Ptr) -> Ptr {
        self.nodes[ptr.index()].next
    }

    pub(crate) fn prev(&self, ptr: Ptr) -> Ptr {
        self.nodes[ptr.index()].prev
    }

    /// First live node in insertion order, or the tail sentinel when empty.
    pub(crate) fn first(&self) -> Ptr {
        self.next(Ptr::HEAD)
    }

    /// Last live node in insertion order, or the head sentinel when empty.
    pub(crate) fn last(&self) -> Ptr {
        self.prev(Ptr::TAIL)
    }

    /// Panics if `ptr` is not a live entry. Internal callers use this only on
    /// pointers that the structural invariants guarantee are live.
    pub(crate) fn entry(&self, ptr: Ptr) -> &EntryData<K, V> {
        match &self.nodes[ptr.index()].slot {
            Slot::Entry(data) => data,
            _ => assert_entry(),
        }
    }

    pub(crate) fn entry_mut(&mut self, ptr: Ptr) -> &mut EntryData<K, V> {
        self.nodes[ptr.index()].entry_mut()
    }

    /// Bounds-checked probe that tolerates foreign, freed, and sentinel
    /// handles. This is the validation surface behind the map's
    /// "invalid position" errors.
    pub(crate) fn get_entry(&self, ptr: Ptr) -> Option<&EntryData<K, V>> {
        match self.nodes.get(ptr.index())? {
            Node {
                slot: Slot::Entry(data),
                ..
            } => Some(data),
            _ => None,
        }
    }

    pub(crate) fn is_entry(&self, ptr: Ptr) -> bool {
        self.get_entry(ptr).is_some()
    }

    /// Splices a freshly allocated entry immediately before the tail
    /// sentinel. Only the two neighboring links change.
    pub(crate) fn insert_before_tail(&mut self, hash: u64, key: K, value: V) -> Ptr {
        let prev = self.prev(Ptr::TAIL);
        let ptr = self.alloc(Node {
            prev,
            next: Ptr::TAIL,
            slot: Slot::Entry(EntryData {
                hash,
                bucket_next: None,
                key,
                value,
            }),
        });
        self.nodes[prev.index()].next = ptr;
        self.nodes[Ptr::TAIL.index()].prev = ptr;
        ptr
    }

    fn alloc(&mut self, node: Node<K, V>) -> Ptr {
        match self.free_head {
            Some(ptr) => {
                let old = mem::replace(&mut self.nodes[ptr.index()], node);
                self.free_head = match old.slot {
                    Slot::Free { next_free } => next_free,
                    _ => assert_free_list(),
                };
                ptr
            }
            None => {
                let ptr = Ptr::from_index(self.nodes.len());
                self.nodes.push(node);
                ptr
            }
        }
    }

    /// Unlinks a live entry from the chain by relinking its neighbors, frees
    /// its slot, and returns the payload.
    ///
    /// Panics if `ptr` is a sentinel, a freed slot, or out of range; callers
    /// that accept positions from outside the crate validate with
    /// [`is_entry`](OrderList::is_entry) first and report an error instead.
    pub(crate) fn unlink_remove(&mut self, ptr: Ptr) -> EntryData<K, V> {
        if !self.is_entry(ptr) {
            assert_entry();
        }

        let node = mem::replace(
            &mut self.nodes[ptr.index()],
            Node {
                prev: ptr,
                next: ptr,
                slot: Slot::Free {
                    next_free: self.free_head,
                },
            },
        );
        self.free_head = Some(ptr);

        self.nodes[node.prev.index()].next = node.next;
        self.nodes[node.next.index()].prev = node.prev;

        match node.slot {
            Slot::Entry(data) => data,
            _ => assert_entry(),
        }
    }

    /// Drops every live entry and resets the sentinels, keeping the arena
    /// allocation for reuse.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(2);
        self.free_head = None;
        self.nodes[Ptr::HEAD.index()] = Node {
            prev: Ptr::HEAD,
            next: Ptr::TAIL,
            slot: Slot::Sentinel,
        };
        self.nodes[Ptr::TAIL.index()] = Node {
            prev: Ptr::HEAD,
            next: Ptr::TAIL,
            slot: Slot::Sentinel,
        };
    }

    /// Base pointer into the slot array, for the mutable iterator.
    pub(crate) fn base_ptr(&mut self) -> *mut Node<K, V> {
        self.nodes.as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;

    fn collect_keys(list: &OrderList<i32, i32>) -> Vec<i32> {
        let mut keys = Vec::new();
        let mut ptr = list.first();
        while ptr != Ptr::TAIL {
            keys.push(list.entry(ptr).key);
            ptr = list.next(ptr);
        }
        keys
    }

    #[test]
    fn empty_list_links_sentinels() {
        let list: OrderList<i32, i32> = OrderList::new();
        assert_eq!(list.first(), Ptr::TAIL);
        assert_eq!(list.last(), Ptr::HEAD);
        assert!(!list.is_entry(Ptr::HEAD));
        assert!(!list.is_entry(Ptr::TAIL));
    }

    #[test]
    fn insert_links_at_tail() {
        let mut list = OrderList::new();
        let a = list.insert_before_tail(11, 1, 10);
        let b = list.insert_before_tail(22, 2, 20);
        let c = list.insert_before_tail(33, 3, 30);

        assert_eq!(list.first(), a);
        assert_eq!(list.next(a), b);
        assert_eq!(list.next(b), c);
        assert_eq!(list.next(c), Ptr::TAIL);
        assert_eq!(list.prev(c), b);
        assert_eq!(list.prev(a), Ptr::HEAD);
        assert_eq!(collect_keys(&list), [1, 2, 3]);
    }

    #[test]
    fn unlink_relinks_neighbors() {
        let mut list = OrderList::new();
        let a = list.insert_before_tail(11, 1, 10);
        let b = list.insert_before_tail(22, 2, 20);
        let c = list.insert_before_tail(33, 3, 30);

        let data = list.unlink_remove(b);
        assert_eq!(data.key, 2);
        assert_eq!(data.value, 20);
        assert_eq!(list.next(a), c);
        assert_eq!(list.prev(c), a);
        assert!(!list.is_entry(b));
        assert_eq!(collect_keys(&list), [1, 3]);
    }

    #[test]
    fn freed_slot_is_reused() {
        let mut list = OrderList::new();
        let a = list.insert_before_tail(11, 1, 10);
        let _b = list.insert_before_tail(22, 2, 20);
        list.unlink_remove(a);

        let c = list.insert_before_tail(33, 3, 30);
        assert_eq!(c, a);
        assert_eq!(collect_keys(&list), [2, 3]);
    }

    #[test]
    fn unlink_last_entry_resets_to_empty_shape() {
        let mut list = OrderList::new();
        let a = list.insert_before_tail(11, 1, 10);
        list.unlink_remove(a);
        assert_eq!(list.first(), Ptr::TAIL);
        assert_eq!(list.last(), Ptr::HEAD);
    }

    #[test]
    fn clear_resets_sentinels() {
        let mut list = OrderList::new();
        list.insert_before_tail(1, 1, "one".to_string());
        list.insert_before_tail(2, 2, "two".to_string());
        list.clear();
        assert_eq!(list.first(), Ptr::TAIL);
        assert_eq!(list.last(), Ptr::HEAD);

        let a = list.insert_before_tail(3, 3, "three".to_string());
        assert_eq!(list.first(), a);
        assert_eq!(list.entry(a).value, "three");
    }

    #[test]
    fn get_entry_tolerates_foreign_handles() {
        let list: OrderList<i32, i32> = OrderList::new();
        assert!(list.get_entry(Ptr::from_index(99)).is_none());
        assert!(list.get_entry(Ptr::HEAD).is_none());
    }

    #[test]
    #[should_panic]
    fn unlink_sentinel_panics() {
        let mut list: OrderList<i32, i32> = OrderList::new();
        list.unlink_remove(Ptr::TAIL);
    }

    #[test]
    #[should_panic]
    fn unlink_freed_slot_panics() {
        let mut list = OrderList::new();
        let a = list.insert_before_tail(11, 1, 10);
        list.unlink_remove(a);
        list.unlink_remove(a);
    }
}
