use crate::Error;
use crate::Ptr;
use crate::ordered_hash_map::OrderedHashMap;
use crate::ordered_hash_map::Position;

/// A shared cursor over the order list of an [`OrderedHashMap`].
///
/// A cursor always sits either on a live entry or at the past-the-end
/// position. Stepping past either end of the sequence is reported as
/// [`Error::InvalidPosition`] instead of wrapping or going quiet; the cursor
/// stays where it was when a step fails.
///
/// A `Cursor` can be obtained from a [`CursorMut`] via
/// [`CursorMut::as_cursor`]; the reverse conversion does not exist.
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
/// let mut cursor = map.cursor_front();
/// assert_eq!(cursor.get(), Some((&"a", &1)));
/// cursor.move_next().unwrap();
/// assert_eq!(cursor.get(), Some((&"b", &2)));
/// cursor.move_next().unwrap();
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, K, V, S> {
    pub(crate) map: &'a OrderedHashMap<K, V, S>,
    pub(crate) at: Ptr,
}

impl<K, V, S> Clone for Cursor<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for Cursor<'_, K, V, S> {}

impl<K, V, S> core::fmt::Debug for Cursor<'_, K, V, S>
where
    K: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor").field("at", &self.get()).finish()
    }
}

impl<'a, K, V, S> Cursor<'a, K, V, S> {
    /// Advances to the successor entry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor is already past-the-end; the
    /// cursor does not move.
    pub fn move_next(&mut self) -> Result<(), Error> {
        if self.at == Ptr::TAIL {
            return Err(Error::InvalidPosition);
        }
        self.at = self.map.list.next(self.at);
        Ok(())
    }

    /// Retreats to the predecessor entry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor is at the first entry, or
    /// past-the-end of an empty map; the cursor does not move.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::Error;
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert(1, 10);
    ///
    /// let mut cursor = map.cursor_front();
    /// assert_eq!(cursor.move_prev(), Err(Error::InvalidPosition));
    ///
    /// let mut end = map.cursor_end();
    /// end.move_prev().unwrap();
    /// assert_eq!(end.get(), Some((&1, &10)));
    /// ```
    pub fn move_prev(&mut self) -> Result<(), Error> {
        let prev = self.map.list.prev(self.at);
        if prev == Ptr::HEAD {
            return Err(Error::InvalidPosition);
        }
        self.at = prev;
        Ok(())
    }

    /// Returns the pointed-at key-value pair, or `None` past-the-end.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let entry = self.map.list.get_entry(self.at)?;
        Some((&entry.key, &entry.value))
    }

    /// Returns the pointed-at key, or `None` past-the-end.
    pub fn key(&self) -> Option<&'a K> {
        self.get().map(|(key, _)| key)
    }

    /// Returns the pointed-at value, or `None` past-the-end.
    pub fn value(&self) -> Option<&'a V> {
        self.get().map(|(_, value)| value)
    }

    /// Returns `true` if the cursor is at the past-the-end position.
    pub fn is_end(&self) -> bool {
        self.at == Ptr::TAIL
    }

    /// Returns the cursor's position as a detached handle.
    pub fn position(&self) -> Position {
        Position {
            ptr: self.at,
            map: self.map.id,
        }
    }
}

/// Cursors compare equal iff they reference the same node of the same map
/// instance. Cursors from different maps are never equal, even if both maps
/// hold identical contents.
impl<K, V, S> PartialEq for Cursor<'_, K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl<K, V, S> Eq for Cursor<'_, K, V, S> {}

impl<K, V, S> PartialEq<CursorMut<'_, K, V, S>> for Cursor<'_, K, V, S> {
    fn eq(&self, other: &CursorMut<'_, K, V, S>) -> bool {
        self.position() == other.position()
    }
}

/// An exclusive cursor over the order list of an [`OrderedHashMap`].
///
/// In addition to the navigation of [`Cursor`], a `CursorMut` can mutate the
/// pointed-at value and remove the pointed-at entry. Because it holds the
/// map's unique borrow, no other position can be invalidated behind its back
/// while it lives.
///
/// # Examples
///
/// ```
/// use lanyard_map::OrderedHashMap;
///
/// let mut map = OrderedHashMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
/// map.insert("c", 3);
///
/// let mut cursor = map.cursor_front_mut();
/// cursor.move_next().unwrap();
/// // Remove "b"; the cursor steps to its successor.
/// assert_eq!(cursor.remove_current(), Ok(("b", 2)));
/// assert_eq!(cursor.get(), Some((&"c", &3)));
///
/// let keys: Vec<_> = map.keys().collect();
/// assert_eq!(keys, [&"a", &"c"]);
/// ```
pub struct CursorMut<'a, K, V, S> {
    pub(crate) map: &'a mut OrderedHashMap<K, V, S>,
    pub(crate) at: Ptr,
}

impl<K, V, S> core::fmt::Debug for CursorMut<'_, K, V, S>
where
    K: core::fmt::Debug,
    V: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CursorMut").field("at", &self.get()).finish()
    }
}

impl<K, V, S> CursorMut<'_, K, V, S> {
    /// Advances to the successor entry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor is already past-the-end; the
    /// cursor does not move.
    pub fn move_next(&mut self) -> Result<(), Error> {
        if self.at == Ptr::TAIL {
            return Err(Error::InvalidPosition);
        }
        self.at = self.map.list.next(self.at);
        Ok(())
    }

    /// Retreats to the predecessor entry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor is at the first entry, or
    /// past-the-end of an empty map; the cursor does not move.
    pub fn move_prev(&mut self) -> Result<(), Error> {
        let prev = self.map.list.prev(self.at);
        if prev == Ptr::HEAD {
            return Err(Error::InvalidPosition);
        }
        self.at = prev;
        Ok(())
    }

    /// Returns the pointed-at key-value pair, or `None` past-the-end.
    pub fn get(&self) -> Option<(&K, &V)> {
        let entry = self.map.list.get_entry(self.at)?;
        Some((&entry.key, &entry.value))
    }

    /// Returns the pointed-at pair with a mutable value reference, or `None`
    /// past-the-end.
    pub fn current_mut(&mut self) -> Option<(&K, &mut V)> {
        if !self.map.list.is_entry(self.at) {
            return None;
        }
        let entry = self.map.list.entry_mut(self.at);
        Some((&entry.key, &mut entry.value))
    }

    /// Returns a mutable reference to the pointed-at value, or `None`
    /// past-the-end.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanyard_map::OrderedHashMap;
    ///
    /// let mut map = OrderedHashMap::new();
    /// map.insert("a", 1);
    ///
    /// let mut cursor = map.cursor_front_mut();
    /// if let Some(value) = cursor.value_mut() {
    ///     *value = 42;
    /// }
    /// assert_eq!(map.get(&"a"), Some(&42));
    /// ```
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.current_mut().map(|(_, value)| value)
    }

    /// Removes the pointed-at entry from both the bucket index and the order
    /// list, returning its key-value pair. The cursor steps to the removed
    /// entry's successor (possibly past-the-end).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the cursor is past-the-end; the map and
    /// the cursor are unchanged.
    pub fn remove_current(&mut self) -> Result<(K, V), Error> {
        if !self.map.list.is_entry(self.at) {
            return Err(Error::InvalidPosition);
        }
        let next = self.map.list.next(self.at);
        let removed = self.map.remove_ptr(self.at);
        self.at = next;
        Ok(removed)
    }

    /// Returns a read-only cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<'_, K, V, S> {
        Cursor {
            map: self.map,
            at: self.at,
        }
    }

    /// Returns `true` if the cursor is at the past-the-end position.
    pub fn is_end(&self) -> bool {
        self.at == Ptr::TAIL
    }

    /// Returns the cursor's position as a detached handle.
    pub fn position(&self) -> Position {
        Position {
            ptr: self.at,
            map: self.map.id,
        }
    }
}

impl<K, V, S> PartialEq for CursorMut<'_, K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.position() == other.position()
    }
}

impl<K, V, S> Eq for CursorMut<'_, K, V, S> {}

impl<K, V, S> PartialEq<Cursor<'_, K, V, S>> for CursorMut<'_, K, V, S> {
    fn eq(&self, other: &Cursor<'_, K, V, S>) -> bool {
        self.position() == other.position()
    }
}
