#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod list;
pub mod ordered_hash_map;

extern crate alloc;

#[cfg(feature = "std")]
type RandomState = std::hash::RandomState;
#[cfg(not(feature = "std"))]
type RandomState = hashbrown::DefaultHashBuilder;

use core::num::NonZeroU32;
use core::sync::atomic::AtomicU64;
use core::sync::atomic::Ordering;

pub use ordered_hash_map::Cursor;
pub use ordered_hash_map::CursorMut;
pub use ordered_hash_map::Entry;
pub use ordered_hash_map::IntoIter;
pub use ordered_hash_map::Iter;
pub use ordered_hash_map::IterMut;
pub use ordered_hash_map::Keys;
pub use ordered_hash_map::OccupiedEntry;
pub use ordered_hash_map::OrderedHashMap;
pub use ordered_hash_map::Position;
pub use ordered_hash_map::VacantEntry;
pub use ordered_hash_map::Values;
pub use ordered_hash_map::ValuesMut;

/// An index into the node arena identifying one slot.
///
/// Slots 0 and 1 are the permanent head and tail sentinels of the order list;
/// all other slots hold live entries or sit on the free list. Handles are
/// **non-generational**: once an entry is removed, its slot (and therefore its
/// `Ptr`) may be reused by a later insertion.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub(crate) struct Ptr(NonZeroU32);

impl core::fmt::Debug for Ptr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ptr({})", self.0.get() - 1)
    }
}

impl Ptr {
    /// The before-first sentinel of every order list.
    pub(crate) const HEAD: Ptr = Ptr(NonZeroU32::MIN);
    /// The past-the-end sentinel of every order list.
    pub(crate) const TAIL: Ptr = Ptr(NonZeroU32::MIN.saturating_add(1));

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(
            index < u32::MAX as usize,
            "index too large to fit in Ptr: {index}"
        );
        Ptr(NonZeroU32::new((index as u32).saturating_add(1)).unwrap())
    }

    pub(crate) fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// An identity token distinguishing map instances.
///
/// Positions and cursors carry the id of the map they came from, so a handle
/// obtained from one map can never be mistaken for a handle into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MapId(u64);

impl MapId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        MapId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// The error type for fallible map and cursor operations.
///
/// All errors are synchronous and recoverable; a returned error never leaves
/// the map in an inconsistent state.
///
/// # Examples
///
/// ```
/// use lanyard_map::Error;
/// use lanyard_map::OrderedHashMap;
///
/// let map: OrderedHashMap<i32, i32> = OrderedHashMap::new();
/// assert_eq!(map.at(&1), Err(Error::KeyNotFound));
/// assert_eq!(map.cursor_end().move_prev(), Err(Error::InvalidPosition));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The position is past-the-end, refers to an entry that has been removed,
    /// or belongs to a different map instance.
    InvalidPosition,
    /// Checked access was attempted for a key that is not present.
    KeyNotFound,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidPosition => f.write_str("invalid position"),
            Error::KeyNotFound => f.write_str("key not found"),
        }
    }
}

impl core::error::Error for Error {}
