use crate::Ptr;
use crate::ordered_hash_map::OrderedHashMap;
use crate::ordered_hash_map::Position;

/// A view into a single entry in a map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`OrderedHashMap`].
///
/// [`entry`]: OrderedHashMap::entry
///
/// # Examples
///
/// ```
/// use lanyard_map::Entry;
/// use lanyard_map::OrderedHashMap;
///
/// let mut map = OrderedHashMap::new();
///
/// match map.entry("key") {
///     Entry::Vacant(entry) => {
///         entry.insert("value");
///     }
///     Entry::Occupied(entry) => {
///         println!("key already present: {}", entry.get());
///     }
/// }
/// ```
pub enum Entry<'a, K, V, S> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V, S>),

    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V, S>),
}

impl<'a, K, V, S> Entry<'a, K, V, S> {
    /// Ensures a value is in the entry by inserting the provided default if
    /// vacant, and returns a mutable reference to the value.
    ///
    /// A new entry is linked at the tail of the insertion order, matching
    /// `insert`; an existing entry keeps its value and its place.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of `default`
    /// if vacant, and returns a mutable reference to the value.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Ensures a value is in the entry by inserting `V::default()` if vacant,
    /// and returns a mutable reference to the value.
    ///
    /// This is the mutable counterpart to the map's panicking shared index
    /// access: it inserts on a missing key instead of failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut counts: OrderedHashMap<&str, u32> = OrderedHashMap::new();
    /// for word in ["the", "quick", "the"] {
    ///     *counts.entry(word).or_default() += 1;
    /// }
    /// assert_eq!(counts[&"the"], 2);
    /// assert_eq!(counts[&"quick"], 1);
    /// ```
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// If the entry is occupied, applies `f` to the value in place. Returns
    /// the entry for further chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert("a", 1);
    ///
    /// map.entry("a").and_modify(|v| *v += 10).or_insert(0);
    /// map.entry("b").and_modify(|v| *v += 10).or_insert(0);
    /// assert_eq!(map[&"a"], 11);
    /// assert_eq!(map[&"b"], 0);
    /// ```
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

/// A view into an occupied entry in an [`OrderedHashMap`].
///
/// It is part of the [`Entry`] enum.
pub struct OccupiedEntry<'a, K, V, S> {
    pub(crate) map: &'a mut OrderedHashMap<K, V, S>,
    pub(crate) ptr: Ptr,
}

impl<'a, K, V, S> OccupiedEntry<'a, K, V, S> {
    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        &self.map.list.entry(self.ptr).key
    }

    /// Returns a reference to the value.
    pub fn get(&self) -> &V {
        &self.map.list.entry(self.ptr).value
    }

    /// Returns a mutable reference to the value, bounded by this view.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.list.entry_mut(self.ptr).value
    }

    /// Converts the view into a mutable reference to the value, bounded by
    /// the map's borrow.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.map.list.entry_mut(self.ptr).value
    }

    /// Returns the entry's position in its map.
    pub fn position(&self) -> Position {
        Position {
            ptr: self.ptr,
            map: self.map.id,
        }
    }

    /// Removes the entry from both structures, returning the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::Entry;
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert("key", 42);
    ///
    /// if let Entry::Occupied(entry) = map.entry("key") {
    ///     assert_eq!(entry.remove(), 42);
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Removes the entry from both structures, returning the stored
    /// key-value pair.
    pub fn remove_entry(self) -> (K, V) {
        self.map.remove_ptr(self.ptr)
    }
}

/// A view into a vacant entry in an [`OrderedHashMap`].
///
/// It is part of the [`Entry`] enum. The key hash is computed once, when the
/// view is created; the bucket is chosen only at insertion time, from the
/// table size current after any growth.
pub struct VacantEntry<'a, K, V, S> {
    pub(crate) map: &'a mut OrderedHashMap<K, V, S>,
    pub(crate) hash: u64,
    pub(crate) key: K,
}

impl<'a, K, V, S> VacantEntry<'a, K, V, S> {
    /// Returns a reference to the key that would be inserted.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key without inserting.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value, linking the new entry at the tail of the insertion
    /// order, and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        let (map, ptr) = self.insert_parts(value);
        &mut map.list.entry_mut(ptr).value
    }

    pub(crate) fn insert_position(self, value: V) -> Position {
        let (map, ptr) = self.insert_parts(value);
        Position { ptr, map: map.id }
    }

    /// Grow-then-mutate: the bucket index is grown before the new node is
    /// linked anywhere, so a failed allocation cannot strand a half-inserted
    /// entry.
    fn insert_parts(self, value: V) -> (&'a mut OrderedHashMap<K, V, S>, Ptr) {
        let VacantEntry { map, hash, key } = self;
        if map.table.needs_grow(map.len) {
            map.table.grow(&mut map.list);
        }
        let ptr = map.list.insert_before_tail(hash, key, value);
        map.table.insert_reference(&mut map.list, ptr);
        map.len += 1;
        (map, ptr)
    }
}
