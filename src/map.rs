use core::alloc::Layout;
use core::fmt::{self, Debug, Display};
use core::iter::FusedIterator;
use core::mem;
use core::ops::Index;
use core::slice;

use std::vec;

use crate::capacity::{array_size, size_threshold};
use crate::error::{AllocError, OnError};
use crate::index;
use crate::key::IntKey;

/// A key-value pair stored inline in the slot array.
///
/// A slot whose key is [`IntKey::ZERO`] is empty and its value is the default.
#[derive(Clone, Default)]
pub(crate) struct Slot<K, V> {
    key: K,
    value: V,
}

/// An open-addressing hash map for integer keys.
///
/// Entries live directly in one power-of-two array of `(key, value)` slots and collisions are
/// resolved by linear probing. The array doubles once the entry count reaches 70% of its
/// length and never shrinks. Removal repairs the probe chains in place by shifting later
/// entries back, so no tombstones are left behind.
///
/// The all-zero key marks an empty slot, so an entry for key `0` is held beside the array
/// instead of inside it. It behaves like any other key.
///
/// The map is a plain single-owner value. It does no locking and shares nothing; the borrow
/// checker rejects mutation while an iterator or [`for_each`](IntMap::for_each) visitor holds
/// the map.
pub struct IntMap<K, V> {
    slots: Box<[Slot<K, V>]>,
    mask: usize,
    threshold: usize,
    len: usize,
    zero: Option<V>,
}

// Core implementation
impl<K, V> IntMap<K, V>
where
    K: IntKey,
    V: Default,
{
    const DEFAULT_CAPACITY: usize = 16;

    /// Returns a new `IntMap` sized for no entries.
    ///
    /// The smallest slot array is still allocated, so the first insertion doesn't allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let map: IntMap<u32, u32> = IntMap::new();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.capacity(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new `IntMap` able to hold `capacity` entries before it grows.
    ///
    /// The slot array length is the smallest power of two that keeps `capacity` entries within
    /// the load factor.
    ///
    /// # Panics
    ///
    /// This function will panic if capacity overflow occurs, or when allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let map: IntMap<i64, i64> = IntMap::with_capacity(5);
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.capacity(), 8);
    /// ```
    #[must_use]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::allocate(capacity, OnError::NoReturn) {
            Ok(map) => map,
            Err(_) => unreachable!("allocation failure must diverge"),
        }
    }

    /// Tries to create a new `IntMap` able to hold `capacity` entries before it grows.
    ///
    /// This method is semantically equivalent to [`IntMap::with_capacity`], except that it
    /// returns an error instead of panicking when sizing or allocation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::{AllocError, IntMap};
    ///
    /// let map = IntMap::<u64, u64>::try_with_capacity(100).unwrap();
    /// assert_eq!(map.capacity(), 256);
    ///
    /// let result = IntMap::<u64, u64>::try_with_capacity(usize::MAX);
    /// assert!(matches!(result, Err(AllocError::Overflow)));
    /// ```
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::allocate(capacity, OnError::ReturnErr)
    }

    fn allocate(capacity: usize, on_err: OnError) -> Result<Self, AllocError> {
        let cap = array_size(capacity, on_err)?;
        let slots = Self::allocate_slots(cap, on_err)?;
        Ok(IntMap {
            slots,
            mask: cap - 1,
            threshold: size_threshold(cap),
            len: 0,
            zero: None,
        })
    }

    /// Allocates `cap` empty slots.
    fn allocate_slots(cap: usize, on_err: OnError) -> Result<Box<[Slot<K, V>]>, AllocError> {
        let layout = match Layout::array::<Slot<K, V>>(cap) {
            Ok(layout) => layout,
            Err(_) => return Err(on_err.overflow()),
        };

        let mut slots = Vec::new();
        if slots.try_reserve_exact(cap).is_err() {
            return Err(on_err.alloc_err(layout));
        }
        slots.resize_with(cap, Slot::default);
        Ok(slots.into_boxed_slice())
    }

    /// Returns the length of the slot array, always a power of two.
    ///
    /// The map grows once [`len`](IntMap::len) reaches 70% of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::with_capacity(5);
    /// assert_eq!(map.capacity(), 8);
    ///
    /// for key in 1..=6u64 {
    ///     map.insert(key, key);
    /// }
    ///
    /// // The sixth entry crossed the threshold of 5.
    /// assert_eq!(map.capacity(), 16);
    /// ```
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of entries, including the one for key `0` if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    ///
    /// map.insert(0u8, 1u8);
    /// map.insert(7, 2);
    ///
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `IntMap` is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the ratio of entries to slots.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Returns the slot holding `key`, or `None` once the probe reaches an empty slot.
    ///
    /// `key` must not be zero.
    #[inline]
    fn find(&self, key: K) -> Option<usize> {
        let mut idx = index::start(key, self.mask);
        loop {
            let probed = self.slots[idx].key;
            if probed == key {
                return Some(idx);
            }
            if probed.is_zero() {
                return None;
            }
            idx = index::next(idx, self.mask);
        }
    }

    /// Retrieves a value by its `key`.
    ///
    /// # Returns
    ///
    /// - `Some(&value)`: if the key is found.
    ///
    /// - `None`: if the key does not exist.
    ///
    /// # Time Complexity
    ///
    /// _O_(1) on average.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    ///
    /// map.insert(1i64, 10i64);
    /// map.insert(0, 20);
    ///
    /// assert_eq!(map.get(1), Some(&10));
    /// assert_eq!(map.get(0), Some(&20));
    /// assert_eq!(map.get(2), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, key: K) -> Option<&V> {
        if key.is_zero() {
            return self.zero.as_ref();
        }
        self.find(key).map(|idx| &self.slots[idx].value)
    }

    /// Retrieves a mutable reference to a value by its `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    ///
    /// map.insert(3u16, 1u16);
    ///
    /// if let Some(value) = map.get_mut(3) {
    ///     *value += 1;
    /// }
    ///
    /// assert_eq!(map.get(3), Some(&2));
    /// assert_eq!(map.get_mut(4), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        if key.is_zero() {
            return self.zero.as_mut();
        }
        match self.find(key) {
            Some(idx) => Some(&mut self.slots[idx].value),
            None => None,
        }
    }

    /// Returns `true` if the map contains a value for the specified `key`.
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    /// If the map did have this key present, the value is overwritten in place, the length is
    /// unchanged, and the old value is returned.
    ///
    /// # Panics
    ///
    /// This method will panic if the slot array can't be doubled.
    ///
    /// # Time Complexity
    ///
    /// _O_(1) Amortized.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    ///
    /// assert_eq!(map.insert(1u32, 10u32), None);
    /// assert_eq!(map.insert(1, 11), Some(10));
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(1), Some(&11));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if key.is_zero() {
            let old = self.zero.replace(value);
            if old.is_none() {
                self.len += 1;
            }
            return old;
        }
        self.insert_slot(key, value)
    }

    /// Probes for `key` and writes the pair into the first empty slot or over its own.
    ///
    /// A new pair is written before the growth check so a rebuild carries it along.
    fn insert_slot(&mut self, key: K, value: V) -> Option<V> {
        let mask = self.mask;
        let mut idx = index::start(key, mask);
        loop {
            let slot = &mut self.slots[idx];

            if slot.key.is_zero() {
                slot.key = key;
                slot.value = value;
                if self.len >= self.threshold {
                    self.grow();
                } else {
                    self.len += 1;
                }
                return None;
            }

            if slot.key == key {
                return Some(mem::replace(&mut slot.value, value));
            }

            idx = index::next(idx, mask);
        }
    }

    /// Doubles the slot array.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let result = match self.slots.len().checked_mul(2) {
            Some(new_cap) => self.rehash(new_cap, OnError::NoReturn),
            None => Err(OnError::NoReturn.overflow()),
        };
        if result.is_err() {
            unreachable!("allocation failure must diverge");
        }
    }

    /// Moves every entry into a fresh slot array of `new_cap` slots.
    ///
    /// Each entry is re-inserted through the ordinary probe path against the new mask. The
    /// zero-key entry stays where it is. On error, the map's state is not affected.
    fn rehash(&mut self, new_cap: usize, on_err: OnError) -> Result<(), AllocError> {
        debug_assert!(new_cap.is_power_of_two() && new_cap > self.slots.len());

        let new_slots = Self::allocate_slots(new_cap, on_err)?;
        let old_slots = mem::replace(&mut self.slots, new_slots);

        self.mask = new_cap - 1;
        self.threshold = size_threshold(new_cap);
        self.len = usize::from(self.zero.is_some());

        for slot in old_slots.into_vec() {
            if !slot.key.is_zero() {
                self.insert_slot(slot.key, slot.value);
            }
        }

        Ok(())
    }

    /// Grows the slot array so that `len + additional` entries fit without another rehash.
    fn reserve_additional(&mut self, additional: usize, on_err: OnError) -> Result<(), AllocError> {
        if additional == 0 {
            return Ok(());
        }
        let wanted = match self.len.checked_add(additional) {
            Some(wanted) => wanted,
            None => return Err(on_err.overflow()),
        };
        let new_cap = array_size(wanted, on_err)?;
        if new_cap > self.slots.len() {
            self.rehash(new_cap, on_err)?;
        }
        Ok(())
    }

    /// Reserves capacity for `additional` more entries in advance.
    ///
    /// This method is no-op if the current slot array already fits them. It never shrinks.
    ///
    /// # Panics
    ///
    /// This method will panic if capacity overflow occurs, or when allocation fails.
    ///
    /// # Time Complexity
    ///
    /// _O_(n) when it rehashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    /// map.insert(1u64, 1u64);
    ///
    /// map.reserve(10);
    ///
    /// // 11 entries need 16 slots at a 0.7 load factor.
    /// assert_eq!(map.capacity(), 16);
    /// assert_eq!(map.get(1), Some(&1));
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        if self.reserve_additional(additional, OnError::NoReturn).is_err() {
            unreachable!("allocation failure must diverge");
        }
    }

    /// Tries to reserve capacity for `additional` more entries in advance.
    ///
    /// This method is semantically equivalent to [`IntMap::reserve`], except that it returns an
    /// error instead of panicking. On error the map is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::{AllocError, IntMap};
    ///
    /// let mut map = IntMap::new();
    /// map.insert(1u64, 1u64);
    ///
    /// let result = map.try_reserve(usize::MAX);
    /// assert!(matches!(result, Err(AllocError::Overflow)));
    /// assert_eq!(map.capacity(), 2);
    ///
    /// assert!(map.try_reserve(10).is_ok());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.reserve_additional(additional, OnError::ReturnErr)
    }

    /// Removes an entry by its `key` and returns its value.
    ///
    /// The freed slot is refilled by shifting back later entries of the same probe run, so
    /// every remaining key stays reachable without tombstones or a rehash.
    ///
    /// # Returns
    ///
    /// - `Some(value)`: If key's entry is found and removed.
    ///
    /// - `None`: If the key does not have entry.
    ///
    /// # Time Complexity
    ///
    /// _O_(1) on average.
    ///
    /// # Note
    /// This method does not shrink the current capacity of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    ///
    /// map.insert(1i32, 10i32);
    /// map.insert(2, 20);
    ///
    /// assert_eq!(map.remove(1), Some(10));
    /// assert_eq!(map.remove(1), None);
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(2), Some(&20));
    /// ```
    pub fn remove(&mut self, key: K) -> Option<V> {
        if key.is_zero() {
            let removed = self.zero.take();
            if removed.is_some() {
                self.len -= 1;
            }
            return removed;
        }

        let idx = self.find(key)?;
        let removed = mem::take(&mut self.slots[idx].value);
        self.len -= 1;
        self.shift_back(idx);
        Some(removed)
    }

    /// Closes the hole at `gap` left by a removal.
    ///
    /// Walks the run after `gap` up to the next empty slot. An entry at `pos` may fill the hole
    /// only when its home slot is outside the cyclic interval `(gap, pos]`; otherwise moving it
    /// before its home would cut it off from its own probe chain. Every move opens a new hole
    /// at `pos`, and the hole left when the run ends is cleared.
    fn shift_back(&mut self, mut gap: usize) {
        let mask = self.mask;
        let mut pos = index::next(gap, mask);

        loop {
            let key = self.slots[pos].key;
            if key.is_zero() {
                break;
            }

            let home = index::start(key, mask);
            if !index::in_cyclic_range(gap, home, pos) {
                self.slots.swap(gap, pos);
                gap = pos;
            }

            pos = index::next(pos, mask);
        }

        self.slots[gap] = Slot::default();
    }

    /// Clears the map, removing all entries.
    /// The capacity of the map remains unchanged.
    ///
    /// # Time Complexity
    ///
    /// _O_(capacity).
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    /// map.insert(0u64, 1u64);
    /// map.insert(2, 3);
    ///
    /// map.clear();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.get(0), None);
    /// assert_eq!(map.get(2), None);
    /// ```
    pub fn clear(&mut self) {
        self.slots.fill_with(Slot::default);
        self.zero = None;
        self.len = 0;
    }

    /// Calls `visitor` with every entry.
    ///
    /// The order is unspecified. This implementation visits key `0` first and then the slots
    /// in array order. The visitor borrows the map, so it can't insert or remove while running.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    /// map.insert(0u32, 1u32);
    /// map.insert(5, 2);
    /// map.insert(9, 3);
    ///
    /// let mut sum = 0;
    /// map.for_each(|key, value| sum += key * value);
    ///
    /// assert_eq!(sum, 5 * 2 + 9 * 3);
    /// ```
    #[inline]
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(K, &V),
    {
        for (key, value) in self.iter() {
            visitor(key, value);
        }
    }

    /// Returns an iterator over the entries in the `IntMap`.
    ///
    /// The order is unspecified; see [`IntMap::for_each`].
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    /// map.insert(0u8, 'a');
    /// map.insert(1, 'b');
    ///
    /// let mut entries: Vec<(u8, char)> = map.iter().map(|(k, v)| (k, *v)).collect();
    /// entries.sort();
    ///
    /// assert_eq!(entries, vec![(0, 'a'), (1, 'b')]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            zero: self.zero.as_ref(),
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over the entries with mutable access to the values.
    ///
    /// The keys are immutable, only the values can be modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    /// map.insert(1i64, 1i64);
    /// map.insert(2, 2);
    ///
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 10;
    /// }
    ///
    /// assert_eq!(map.get(1), Some(&10));
    /// assert_eq!(map.get(2), Some(&20));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            zero: self.zero.as_mut(),
            slots: self.slots.iter_mut(),
            remaining: self.len,
        }
    }

    /// Returns an iterator over the keys in the `IntMap`.
    #[inline]
    pub fn iter_keys(&self) -> impl Iterator<Item = K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in the `IntMap`.
    #[inline]
    pub fn iter_values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<K, V> Default for IntMap<K, V>
where
    K: IntKey,
    V: Default,
{
    /// Creates a new `IntMap` sized for `16` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let map: IntMap<u32, u32> = IntMap::default();
    ///
    /// assert_eq!(map.capacity(), 32);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl<K, V> Clone for IntMap<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Creates an identical clone, slot layout and capacity included.
    fn clone(&self) -> Self {
        IntMap {
            slots: self.slots.clone(),
            mask: self.mask,
            threshold: self.threshold,
            len: self.len,
            zero: self.zero.clone(),
        }
    }
}

impl<K, V> Index<K> for IntMap<K, V>
where
    K: IntKey,
    V: Default,
{
    type Output = V;

    /// Returns immutable reference to the value of `key`.
    ///
    /// # Panics
    ///
    /// If the key is not present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    /// map.insert(4u32, 40u32);
    ///
    /// assert_eq!(map[4], 40);
    /// ```
    fn index(&self, key: K) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key {key:?} not found"),
        }
    }
}

impl<K, V> PartialEq for IntMap<K, V>
where
    K: IntKey,
    V: Default + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|v| *value == *v))
    }
}

impl<K, V> Eq for IntMap<K, V>
where
    K: IntKey,
    V: Default + Eq,
{
}

impl<K, V> Debug for IntMap<K, V>
where
    K: IntKey,
    V: Default + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Display for IntMap<K, V>
where
    K: IntKey + Display,
    V: Default + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (key, value) in self.iter() {
            writeln!(f, "    {}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for IntMap<K, V>
where
    K: IntKey,
    V: Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for IntMap<K, V>
where
    K: IntKey,
    V: Default,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// An iterator over the entries of an [`IntMap`].
pub struct Iter<'a, K, V> {
    zero: Option<&'a V>,
    slots: slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: IntKey,
{
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.zero.take() {
            self.remaining -= 1;
            return Some((K::ZERO, value));
        }
        for slot in self.slots.by_ref() {
            if !slot.key.is_zero() {
                self.remaining -= 1;
                return Some((slot.key, &slot.value));
            }
        }
        None
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: IntKey, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: IntKey, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the entries of an [`IntMap`] with mutable values.
pub struct IterMut<'a, K, V> {
    zero: Option<&'a mut V>,
    slots: slice::IterMut<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V>
where
    K: IntKey,
{
    type Item = (K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.zero.take() {
            self.remaining -= 1;
            return Some((K::ZERO, value));
        }
        for slot in self.slots.by_ref() {
            if !slot.key.is_zero() {
                self.remaining -= 1;
                return Some((slot.key, &mut slot.value));
            }
        }
        None
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: IntKey, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K: IntKey, V> FusedIterator for IterMut<'_, K, V> {}

/// An owning iterator over the entries of an [`IntMap`].
pub struct IntMapIntoIter<K, V> {
    zero: Option<V>,
    slots: vec::IntoIter<Slot<K, V>>,
    remaining: usize,
}

impl<K, V> Iterator for IntMapIntoIter<K, V>
where
    K: IntKey,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.zero.take() {
            self.remaining -= 1;
            return Some((K::ZERO, value));
        }
        for slot in self.slots.by_ref() {
            if !slot.key.is_zero() {
                self.remaining -= 1;
                return Some((slot.key, slot.value));
            }
        }
        None
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: IntKey, V> ExactSizeIterator for IntMapIntoIter<K, V> {}

impl<K: IntKey, V> FusedIterator for IntMapIntoIter<K, V> {}

impl<K, V> IntoIterator for IntMap<K, V>
where
    K: IntKey,
{
    type Item = (K, V);
    type IntoIter = IntMapIntoIter<K, V>;

    /// Consumes the `IntMap` and returns an iterator over its entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use intintmap::IntMap;
    ///
    /// let mut map = IntMap::new();
    /// map.insert(0u64, 1u64);
    ///
    /// let mut iter = map.into_iter();
    ///
    /// assert_eq!(iter.next(), Some((0, 1)));
    /// assert_eq!(iter.next(), None);
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        let IntMap {
            slots, zero, len, ..
        } = self;
        IntMapIntoIter {
            zero,
            slots: slots.into_vec().into_iter(),
            remaining: len,
        }
    }
}

impl<'a, K, V> IntoIterator for &'a IntMap<K, V>
where
    K: IntKey,
    V: Default,
{
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut IntMap<K, V>
where
    K: IntKey,
    V: Default,
{
    type Item = (K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Development and testing methods that are not available in release builds.
#[cfg(test)]
impl<K, V> IntMap<K, V>
where
    K: IntKey,
    V: Default,
{
    /// Returns the key stored in the slot at `offset`, `ZERO` when the slot is empty.
    pub(crate) fn debug_slot_key(&self, offset: usize) -> K {
        self.slots[offset].key
    }

    /// Returns the home slot of `key` under the current capacity.
    pub(crate) fn debug_home(&self, key: K) -> usize {
        index::start(key, self.mask)
    }

    /// Panics if an occupied slot can't be reached from its home slot without crossing an
    /// empty one, or if the length doesn't match the occupied slots.
    pub(crate) fn debug_check_chains(&self) {
        let mut occupied = 0;
        for (offset, slot) in self.slots.iter().enumerate() {
            if slot.key.is_zero() {
                continue;
            }
            occupied += 1;
            let mut idx = index::start(slot.key, self.mask);
            while idx != offset {
                assert!(
                    !self.slots[idx].key.is_zero(),
                    "Logic error: key {:?} at slot {} is cut off by empty slot {}",
                    slot.key,
                    offset,
                    idx
                );
                idx = index::next(idx, self.mask);
            }
        }
        assert_eq!(occupied + usize::from(self.zero.is_some()), self.len);
    }
}
