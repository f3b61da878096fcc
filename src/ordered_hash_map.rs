//! Insertion-ordered hash map implementation.
//!
//! This module provides the core [`OrderedHashMap`] type and related
//! functionality. The map keeps two structures permanently consistent: a
//! bucket index giving O(1) average lookup by key, and a doubly-linked order
//! list giving stable, bidirectional iteration in first-insertion order.
//!
//! # Examples
//!
//! ```
//! use lanyard_map::ordered_hash_map::OrderedHashMap;
//!
//! let mut map = OrderedHashMap::new();
//! map.insert("first", 1);
//! map.insert("second", 2);
//!
//! let entries: Vec<_> = map.iter().collect();
//! assert_eq!(entries, [(&"first", &1), (&"second", &2)]);
//! ```

mod buckets;
mod cursor;
mod entry;
mod iter;

use core::borrow::Borrow;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::marker::PhantomData;
use core::ops::Index;

pub use cursor::Cursor;
pub use cursor::CursorMut;
pub use entry::Entry;
pub use entry::OccupiedEntry;
pub use entry::VacantEntry;
pub use iter::IntoIter;
pub use iter::Iter;
pub use iter::IterMut;
pub use iter::Keys;
pub use iter::Values;
pub use iter::ValuesMut;

use crate::Error;
use crate::MapId;
use crate::Ptr;
use crate::RandomState;
use crate::list::OrderList;
use buckets::BucketTable;

#[cold]
#[inline(never)]
fn assert_present() -> ! {
    panic!("key not found in OrderedHashMap");
}

/// A hash map that iterates in the order keys were first inserted.
///
/// Two coordinated structures back the map: a bucket index (an array of
/// singly-linked chains) that maps key hashes to entries, and a doubly-linked
/// order list bounded by head/tail sentinels that owns every entry and fixes
/// the iteration order. Every mutation updates both, and no operation leaves
/// them out of sync, even on an error path.
///
/// Two behaviors distinguish this map from `std::collections::HashMap`:
///
/// - **Iteration order is first-insertion order**, and it is stable across
///   growth of the bucket index.
/// - **`insert` never overwrites.** Re-inserting a present key returns the
///   existing entry's [`Position`] with a "not inserted" flag; neither the
///   value nor the entry's place in the order changes.
///
/// The generic parameters are:
/// - `K`: Key type, must implement `Hash + Eq`
/// - `V`: Value type
/// - `S`: Hash builder type, defaults to the standard hasher
///
/// # Examples
///
/// ```
/// use lanyard_map::OrderedHashMap;
///
/// let mut map = OrderedHashMap::new();
/// map.insert("apple", 5);
/// map.insert("banana", 3);
/// map.insert("cherry", 8);
///
/// let keys: Vec<_> = map.keys().collect();
/// assert_eq!(keys, [&"apple", &"banana", &"cherry"]);
/// ```
pub struct OrderedHashMap<K, V, S = RandomState> {
    pub(crate) list: OrderList<K, V>,
    pub(crate) table: BucketTable,
    pub(crate) len: usize,
    pub(crate) hasher: S,
    pub(crate) id: MapId,
}

/// A stable, identity-tagged handle to one entry of one map.
///
/// A `Position` pairs an arena slot with the identity of the map it came
/// from. Positions survive growth of the bucket index and removal of *other*
/// entries; removing the entry a position refers to invalidates only that
/// position. Presenting a stale position, or a position from a different map,
/// to [`OrderedHashMap::remove_at`] or [`OrderedHashMap::cursor_at`] yields
/// [`Error::InvalidPosition`].
///
/// Positions are **non-generational**: after an entry is removed, a later
/// insertion may reuse its slot, at which point an old copy of the position
/// refers to the new entry.
///
/// # Examples
///
/// ```
/// use lanyard_map::OrderedHashMap;
///
/// let mut map = OrderedHashMap::new();
/// let (pos, inserted) = map.insert("key", 42);
/// assert!(inserted);
/// assert_eq!(map.remove_at(pos), Ok(("key", 42)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) ptr: Ptr,
    pub(crate) map: MapId,
}

impl<K, V> OrderedHashMap<K, V> {
    /// Creates a new, empty map with the default bucket capacity of 16.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map: OrderedHashMap<&str, i32> = OrderedHashMap::new();
    /// assert!(map.is_empty());
    /// map.insert("key", 42);
    /// assert!(!map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(RandomState::default())
    }

    /// Creates an empty map that can hold at least `capacity` entries without
    /// growing its bucket index.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<K, V, S> OrderedHashMap<K, V, S> {
    /// Creates an empty map using the given hash builder.
    pub fn with_hasher(hasher: S) -> Self {
        OrderedHashMap {
            list: OrderList::new(),
            table: BucketTable::new(),
            len: 0,
            hasher,
            id: MapId::next(),
        }
    }

    /// Creates an empty map with room for `capacity` entries, using the given
    /// hash builder.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hashbrown::DefaultHashBuilder as RandomState;
    /// use lanyard_map::ordered_hash_map::OrderedHashMap;
    ///
    /// let hasher = RandomState::default();
    /// let mut map: OrderedHashMap<&str, i32, _> =
    ///     OrderedHashMap::with_capacity_and_hasher(10, hasher);
    /// map.insert("key", 42);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        OrderedHashMap {
            list: OrderList::with_capacity(capacity),
            table: BucketTable::for_capacity(capacity),
            len: 0,
            hasher,
            id: MapId::next(),
        }
    }

    /// Returns a reference to the map's hash builder.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut a = OrderedHashMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all entries, keeping the bucket table at its current size and
    /// the arena allocation for reuse.
    ///
    /// All outstanding [`Position`]s are invalidated.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut a = OrderedHashMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.list.clear();
        self.table.clear();
        self.len = 0;
    }

    /// Removes the entry at `position` from both structures and returns its
    /// key-value pair.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the position is past-the-end, refers to
    /// an entry that has already been removed, or belongs to a different map.
    /// The map is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::Error;
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// let (pos, _) = map.insert(1, "one");
    ///
    /// assert_eq!(map.remove_at(pos), Ok((1, "one")));
    /// // The position died with its entry.
    /// assert_eq!(map.remove_at(pos), Err(Error::InvalidPosition));
    /// ```
    pub fn remove_at(&mut self, position: Position) -> Result<(K, V), Error> {
        if position.map != self.id || !self.list.is_entry(position.ptr) {
            return Err(Error::InvalidPosition);
        }
        Ok(self.remove_ptr(position.ptr))
    }

    /// Removes the live entry at `ptr` from the bucket index, then from the
    /// order list. Caller has already validated `ptr`.
    pub(crate) fn remove_ptr(&mut self, ptr: Ptr) -> (K, V) {
        self.table.remove_reference(&mut self.list, ptr);
        let data = self.list.unlink_remove(ptr);
        self.len -= 1;
        (data.key, data.value)
    }

    /// Returns a cursor at the first entry in insertion order.
    ///
    /// On an empty map this equals [`cursor_end`](OrderedHashMap::cursor_end).
    pub fn cursor_front(&self) -> Cursor<'_, K, V, S> {
        Cursor {
            at: self.list.first(),
            map: self,
        }
    }

    /// Returns a cursor at the past-the-end position.
    ///
    /// The past-the-end cursor is not dereferenceable; advancing it fails,
    /// and retreating it yields the last entry (or fails on an empty map).
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::Error;
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let map: OrderedHashMap<i32, i32> = OrderedHashMap::new();
    /// let mut end = map.cursor_end();
    /// assert!(end.get().is_none());
    /// assert_eq!(end.move_prev(), Err(Error::InvalidPosition));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, K, V, S> {
        Cursor {
            at: Ptr::TAIL,
            map: self,
        }
    }

    /// Returns a mutable cursor at the first entry in insertion order.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V, S> {
        CursorMut {
            at: self.list.first(),
            map: self,
        }
    }

    /// Returns a mutable cursor at the past-the-end position.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, K, V, S> {
        CursorMut {
            at: Ptr::TAIL,
            map: self,
        }
    }

    /// Returns a cursor at `position`.
    ///
    /// Both live-entry positions and the past-the-end position (as returned
    /// by [`Cursor::position`] on an end cursor) are accepted.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the position is stale or belongs to a
    /// different map.
    pub fn cursor_at(&self, position: Position) -> Result<Cursor<'_, K, V, S>, Error> {
        if position.map == self.id
            && (position.ptr == Ptr::TAIL || self.list.is_entry(position.ptr))
        {
            Ok(Cursor {
                at: position.ptr,
                map: self,
            })
        } else {
            Err(Error::InvalidPosition)
        }
    }

    /// Returns a mutable cursor at `position`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the position is stale or belongs to a
    /// different map.
    pub fn cursor_at_mut(&mut self, position: Position) -> Result<CursorMut<'_, K, V, S>, Error> {
        if position.map == self.id
            && (position.ptr == Ptr::TAIL || self.list.is_entry(position.ptr))
        {
            Ok(CursorMut {
                at: position.ptr,
                map: self,
            })
        } else {
            Err(Error::InvalidPosition)
        }
    }

    /// Returns an iterator over the key-value pairs in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: &self.list,
            front: self.list.first(),
            back: self.list.last(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over the pairs in insertion order with mutable
    /// references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 2;
    /// }
    /// assert_eq!(map.get(&"a"), Some(&2));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let front = self.list.first();
        let back = self.list.last();
        IterMut {
            base: self.list.base_ptr(),
            front,
            back,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { iter: self.iter() }
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { iter: self.iter() }
    }

    /// Returns an iterator over mutable references to the values, in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// for value in map.values_mut() {
    ///     *value *= 10;
    /// }
    /// let values: Vec<_> = map.values().collect();
    /// assert_eq!(values, [&10, &20]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            iter: self.iter_mut(),
        }
    }
}

impl<K, V, S> OrderedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    pub(crate) fn find_ptr<Q>(&self, key: &Q) -> Option<Ptr>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        self.table.find(&self.list, hash, |k| k.borrow() == key)
    }

    /// Inserts a key-value pair, returning the entry's position and whether a
    /// new entry was created.
    ///
    /// If the key is already present, the existing entry's position is
    /// returned with `false`; the stored value is **not** overwritten, the
    /// entry keeps its place in the insertion order, and the offered value is
    /// dropped. Otherwise the bucket index grows first if the insertion would
    /// push the load factor past 3/4, and the new entry is linked at the tail
    /// of the order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// let (first, inserted) = map.insert(1, 10);
    /// assert!(inserted);
    ///
    /// // Re-insertion: same position, nothing changes.
    /// let (again, inserted) = map.insert(1, 99);
    /// assert!(!inserted);
    /// assert_eq!(first, again);
    /// assert_eq!(map.get(&1), Some(&10));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        match self.entry(key) {
            Entry::Occupied(entry) => (entry.position(), false),
            Entry::Vacant(entry) => (entry.insert_position(value), true),
        }
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// *map.entry("poneyland").or_insert(12) += 10;
    /// assert_eq!(map.get(&"poneyland"), Some(&22));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, S> {
        let hash = self.hasher.hash_one(&key);
        match self.table.find(&self.list, hash, |k| *k == key) {
            Some(ptr) => Entry::Occupied(OccupiedEntry { map: self, ptr }),
            None => Entry::Vacant(VacantEntry {
                map: self,
                hash,
                key,
            }),
        }
    }

    /// Returns a reference to the value for `key`, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key)?;
        Some(&self.list.entry(ptr).value)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key)?;
        Some(&mut self.list.entry_mut(ptr).value)
    }

    /// Checked access: a reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Checked access: a mutable reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::Error;
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert(1, 10);
    /// *map.at_mut(&1)? += 1;
    /// assert_eq!(map.at(&1), Ok(&11));
    /// assert_eq!(map.at_mut(&2), Err(Error::KeyNotFound));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_ptr(key).is_some()
    }

    /// Returns the number of entries with the given key: 0 or 1, since the
    /// map never holds duplicate keys.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.contains_key(key) as usize
    }

    /// Returns the position of the entry for `key`, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert(2, 20);
    /// let pos = map.find(&2).unwrap();
    /// assert_eq!(map.remove_at(pos), Ok((2, 20)));
    /// assert_eq!(map.find(&2), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key)?;
        Some(Position { ptr, map: self.id })
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key`, returning the stored key-value pair.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ptr = self.find_ptr(key)?;
        Some(self.remove_ptr(ptr))
    }
}

impl<K, V, S: Default> Default for OrderedHashMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> core::fmt::Debug for OrderedHashMap<K, V, S>
where
    K: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Clone for OrderedHashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Builds an independent map with the same mapping and the same insertion
    /// order, by replaying `insert` for every entry of the source in order.
    /// The clone has its own identity: positions from the source are not
    /// valid for the clone.
    fn clone(&self) -> Self {
        let mut new_map = Self::with_capacity_and_hasher(self.len, self.hasher.clone());
        for (key, value) in self.iter() {
            new_map.insert(key.clone(), value.clone());
        }
        new_map
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for (key, value) in source.iter() {
            self.insert(key.clone(), value.clone());
        }
    }
}

/// Order-sensitive equality: two maps are equal iff they hold the same
/// key-value pairs in the same insertion order.
impl<K, V, S> PartialEq for OrderedHashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K, V, S> Eq for OrderedHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

/// Shared index access.
///
/// Panics if the key is absent: a read-only view never inserts. The mutable
/// counterpart with insert-on-missing semantics is
/// [`entry`](OrderedHashMap::entry) followed by [`Entry::or_default`].
///
/// # Examples
///
/// ```
/// use lanyard_map::OrderedHashMap;
///
/// let mut map = OrderedHashMap::new();
/// map.insert("a", 1);
/// assert_eq!(map[&"a"], 1);
///
/// // Insert-on-missing, through the mutable view:
/// *map.entry("b").or_default() = 2;
/// assert_eq!(map[&"b"], 2);
/// ```
impl<K, Q, V, S> Index<&Q> for OrderedHashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => assert_present(),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts each pair in order. Matching `insert`, the **first** value
    /// seen for a key wins; later duplicates are dropped. This differs from
    /// `std` maps, where the last value wins.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Collects pairs in iteration order, with first-wins duplicate handling
    /// (see [`Extend`](#impl-Extend<(K,+V)>-for-OrderedHashMap<K,+V,+S>)).
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S> IntoIterator for OrderedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter {
            list: self.list,
            remaining: self.len,
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut OrderedHashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}
