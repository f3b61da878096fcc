use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::Ptr;
use crate::list::Node;
use crate::list::OrderList;

/// An iterator over the entries of an [`OrderedHashMap`], in insertion order.
///
/// This struct is created by the [`iter`] method on [`OrderedHashMap`]. See
/// its documentation for more.
///
/// [`iter`]: crate::OrderedHashMap::iter
/// [`OrderedHashMap`]: crate::OrderedHashMap
pub struct Iter<'a, K, V> {
    pub(crate) list: &'a OrderList<K, V>,
    pub(crate) front: Ptr,
    pub(crate) back: Ptr,
    pub(crate) remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Iter<'_, K, V> {}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let ptr = self.front;
        self.front = self.list.next(ptr);

        let entry = self.list.entry(ptr);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let ptr = self.back;
        self.back = self.list.prev(ptr);

        let entry = self.list.entry(ptr);
        Some((&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A mutable iterator over the entries of an [`OrderedHashMap`], in insertion
/// order.
///
/// This struct is created by the [`iter_mut`] method on [`OrderedHashMap`].
/// See its documentation for more.
///
/// [`iter_mut`]: crate::OrderedHashMap::iter_mut
/// [`OrderedHashMap`]: crate::OrderedHashMap
pub struct IterMut<'a, K, V> {
    pub(crate) base: *mut Node<K, V>,
    pub(crate) front: Ptr,
    pub(crate) back: Ptr,
    pub(crate) remaining: usize,
    pub(crate) _marker: PhantomData<&'a mut OrderList<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // SAFETY: `front` stays within the first `remaining` live nodes of
        // the arena this iterator exclusively borrows, and every node is
        // yielded at most once, so the returned references never alias.
        let node: &'a mut Node<K, V> = unsafe { &mut *self.base.add(self.front.index()) };
        self.front = node.next;

        let entry = node.entry_mut();
        Some((&entry.key, &mut entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // SAFETY: See `next`.
        let node: &'a mut Node<K, V> = unsafe { &mut *self.base.add(self.back.index()) };
        self.back = node.prev;

        let entry = node.entry_mut();
        Some((&entry.key, &mut entry.value))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An owning iterator over the entries of an [`OrderedHashMap`], in insertion
/// order.
///
/// This struct is created by the [`into_iter`] method on [`OrderedHashMap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`OrderedHashMap`]: crate::OrderedHashMap
pub struct IntoIter<K, V> {
    pub(crate) list: OrderList<K, V>,
    pub(crate) remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let data = self.list.unlink_remove(self.list.first());
        Some((data.key, data.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let data = self.list.unlink_remove(self.list.last());
        Some((data.key, data.value))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of an [`OrderedHashMap`], in insertion order.
///
/// Created by [`OrderedHashMap::keys`].
///
/// [`OrderedHashMap`]: crate::OrderedHashMap
/// [`OrderedHashMap::keys`]: crate::OrderedHashMap::keys
pub struct Keys<'a, K, V> {
    pub(crate) iter: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys { iter: self.iter }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of an [`OrderedHashMap`], in insertion order.
///
/// Created by [`OrderedHashMap::values`].
///
/// [`OrderedHashMap`]: crate::OrderedHashMap
/// [`OrderedHashMap::values`]: crate::OrderedHashMap::values
pub struct Values<'a, K, V> {
    pub(crate) iter: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values { iter: self.iter }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of an [`OrderedHashMap`], in insertion
/// order.
///
/// Created by [`OrderedHashMap::values_mut`].
///
/// [`OrderedHashMap`]: crate::OrderedHashMap
/// [`OrderedHashMap::values_mut`]: crate::OrderedHashMap::values_mut
pub struct ValuesMut<'a, K, V> {
    pub(crate) iter: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for ValuesMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::OrderedHashMap;

    fn sample() -> OrderedHashMap<i32, i32> {
        let mut map = OrderedHashMap::new();
        for k in 0..5 {
            map.insert(k, k * 10);
        }
        map
    }

    #[test]
    fn iter_is_double_ended_and_exact() {
        let map = sample();
        let mut iter = map.iter();
        assert_eq!(iter.len(), 5);

        assert_eq!(iter.next(), Some((&0, &0)));
        assert_eq!(iter.next_back(), Some((&4, &40)));
        assert_eq!(iter.next(), Some((&1, &10)));
        assert_eq!(iter.next_back(), Some((&3, &30)));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some((&2, &20)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn reverse_iteration_mirrors_forward() {
        let map = sample();
        let forward: Vec<_> = map.iter().collect();
        let mut reverse: Vec<_> = map.iter().rev().collect();
        reverse.reverse();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn iter_mut_doubles_values() {
        let mut map = sample();
        for (_, value) in map.iter_mut() {
            *value *= 2;
        }
        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, [0, 20, 40, 60, 80]);
    }

    #[test]
    fn iter_mut_backwards() {
        let mut map = sample();
        let mut iter = map.iter_mut();
        let (key, value) = iter.next_back().unwrap();
        assert_eq!(key, &4);
        *value = -1;
        drop(iter);
        assert_eq!(map.get(&4), Some(&-1));
    }

    #[test]
    fn into_iter_drains_in_order() {
        let map = sample();
        let drained: Vec<_> = map.into_iter().collect();
        assert_eq!(drained, [(0, 0), (1, 10), (2, 20), (3, 30), (4, 40)]);
    }

    #[test]
    fn into_iter_from_both_ends() {
        let map = sample();
        let mut iter = map.into_iter();
        assert_eq!(iter.next(), Some((0, 0)));
        assert_eq!(iter.next_back(), Some((4, 40)));
        assert_eq!(iter.next_back(), Some((3, 30)));
        assert_eq!(iter.next(), Some((1, 10)));
        assert_eq!(iter.next(), Some((2, 20)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn keys_and_values_follow_order() {
        let map = sample();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, [0, 1, 2, 3, 4]);
        let back_keys: Vec<_> = map.keys().rev().copied().collect();
        assert_eq!(back_keys, [4, 3, 2, 1, 0]);
        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, [0, 10, 20, 30, 40]);
    }

    #[test]
    fn values_mut_in_place() {
        let mut map = sample();
        for value in map.values_mut() {
            *value += 1;
        }
        let values: Vec<_> = map.values().copied().collect();
        assert_eq!(values, [1, 11, 21, 31, 41]);
    }

    #[test]
    fn empty_map_iterators_yield_nothing() {
        let mut map: OrderedHashMap<i32, i32> = OrderedHashMap::new();
        assert_eq!(map.iter().next(), None);
        assert_eq!(map.iter().next_back(), None);
        assert_eq!(map.iter_mut().next(), None);
        assert_eq!(map.keys().next(), None);
        assert_eq!(map.into_iter().next(), None);
    }

    #[test]
    fn borrowed_into_iterator_impls() {
        let mut map = sample();
        let mut count = 0;
        for (_, _) in &map {
            count += 1;
        }
        for (_, value) in &mut map {
            *value += 1;
        }
        assert_eq!(count, 5);
        assert_eq!(map.get(&0), Some(&1));
    }
}
