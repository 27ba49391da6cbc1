
mod raw_iter;
mod drain;
mod into_iter;

use std::{cmp::Ordering, fmt, mem::{self, MaybeUninit}, ops::{Deref, DerefMut, Index, IndexMut}, ptr::{self, NonNull}, slice::{self, SliceIndex}};
use tracing::trace;
use crate::errors::IndexOutOfBounds;
use raw_iter::RawIter;

pub use drain::Drain;
pub use into_iter::IntoIter;

/// Capacity of an array built with [`DynArray::new`], and the number of
/// slots added each time a full array has to grow.
pub const DEFAULT_CAPACITY: usize = 10;

#[inline]
fn allocate<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    Box::new_uninit_slice(capacity)
}

/// A contiguous growable array type with a fixed-increment growth policy.
///
/// Values live in a single heap block of `capacity` slots, of which the
/// first `len` are in use. When an [`add`](Self::add) or
/// [`insert`](Self::insert) finds the block full, a new block
/// [`DEFAULT_CAPACITY`] slots larger is allocated and the values are moved
/// into it.
///
/// # Examples
///
/// ```
/// use dynarray::DynArray;
///
/// let mut arr = DynArray::new();
/// arr.add(3);
/// arr.add(7);
///
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr[0], 3);
/// assert_eq!(arr.get(1), Ok(&7));
///
/// arr.insert(1, 5).unwrap();
/// assert_eq!(arr, [3, 5, 7]);
/// assert_eq!(arr.to_string(), "3, 5, 7");
///
/// assert_eq!(arr.remove_at(0), Ok(3));
/// assert!(arr.remove(&7));
/// assert_eq!(arr, [5]);
/// ```
///
/// # Indexing
///
/// [`get`](Self::get), [`set`](Self::set) and friends return an
/// [`IndexOutOfBounds`] error for any index past the live values, even when
/// the slot exists in the backing block.
///
/// ```
/// use dynarray::{DynArray, IndexOutOfBounds};
///
/// let mut arr = DynArray::with_capacity(8);
/// arr.add(1);
///
/// assert_eq!(arr.capacity(), 8);
/// assert_eq!(arr.get(1), Err(IndexOutOfBounds { index: 1, len: 1 }));
/// ```
///
/// The `Index` operator behaves like a slice and panics instead.
/// ```should_panic
/// use dynarray::DynArray;
///
/// let arr = DynArray::from([1, 2, 3]);
/// println!("{}", arr[3]); // Panics!
/// ```
///
/// # Capacity
///
/// Growth adds exactly [`DEFAULT_CAPACITY`] slots rather than doubling, so
/// every growth event costs *O*(n) and pushing many values into a small
/// array reallocates often. Size the array up front with
/// [`with_capacity`](Self::with_capacity), or reserve explicitly with
/// [`extend_capacity`](Self::extend_capacity), when the final size is known.
///
/// ```
/// use dynarray::DynArray;
///
/// let mut arr = DynArray::with_capacity(1);
/// arr.add(1);
/// arr.add(2);
/// assert_eq!(arr.capacity(), 11);
///
/// arr.clear();
/// assert_eq!(arr.len(), 0);
/// assert_eq!(arr.capacity(), 11);
/// ```
pub struct DynArray<T> {
    data: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl <T> Drop for DynArray<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl <T> Default for DynArray<T> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut arr = Self::with_capacity(self.capacity());
        arr.extend(self.iter());
        arr
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the values separated by `", "`. An empty array renders as an
/// empty string.
impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for v in iter { write!(f, ", {v}")?; }
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len &&
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<&[T; N]> for DynArray<T> {
    fn eq(&self, other: &&[T; N]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for DynArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<&[T]> for DynArray<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DynArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl <T> Deref for DynArray<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target { self.as_slice() }
}

impl <T> DerefMut for DynArray<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target { self.as_mut_slice() }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynArray<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&**self, index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut **self, index)
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Leave `self` empty so its drop releases nothing.
        let len = mem::replace(&mut self.len, 0);
        let data = mem::replace(&mut self.data, allocate(0));
        IntoIter::new(data, len)
    }
}

/// Appends each item with [`add`](DynArray::add), growing by the usual
/// fixed increment whenever the array fills up.
impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        items.into_iter().for_each(|item| self.add(item));
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, items: I) {
        self.extend(items.into_iter().cloned());
    }
}

impl <T, const N: usize> From<[T; N]> for DynArray<T> {

    /// Create a new instance from an array, with capacity for exactly `N`
    /// values.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let arr = DynArray::from([1, 2]);
    /// assert_eq!(arr.capacity(), 2);
    /// ```
    fn from(values: [T; N]) -> Self {
        let mut arr = Self::with_capacity(N);
        arr.extend(values);
        arr
    }
}

impl <T> From<Vec<T>> for DynArray<T> {
    fn from(values: Vec<T>) -> Self {
        let mut arr = Self::with_capacity(values.len());
        arr.extend(values);
        arr
    }
}

impl <T> From<DynArray<T>> for Vec<T> {
    fn from(arr: DynArray<T>) -> Self {
        let mut vec = Vec::with_capacity(arr.len());
        vec.extend(arr);
        vec
    }
}

impl <T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from(items.into_iter().collect::<Vec<T>>())
    }
}

impl <T> DynArray<T> {

    /// Constructs a new, empty `DynArray<T>` with room for
    /// [`DEFAULT_CAPACITY`] values.
    ///
    /// # Examples
    /// ```
    /// use dynarray::{DynArray, DEFAULT_CAPACITY};
    ///
    /// let arr = DynArray::<i32>::new();
    /// assert_eq!(arr.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self { Self::with_capacity(DEFAULT_CAPACITY) }

    /// Constructs a new, empty `DynArray<T>` with exactly `capacity` slots.
    ///
    /// A capacity of zero is allowed; the first [`add`](Self::add) grows it.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let arr = DynArray::<i32>::with_capacity(50);
    /// assert_eq!(arr.capacity(), 50);
    /// assert_eq!(arr.len(), 0);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: allocate(capacity), len: 0 }
    }

    /// Returns the number of values in the array.
    #[inline(always)]
    pub const fn len(&self) -> usize { self.len }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of slots in the backing block.
    #[inline(always)]
    pub fn capacity(&self) -> usize { self.data.len() }

    /// Returns how many values can be added before the array has to grow.
    ///
    /// Simply, `capacity - len`.
    #[inline(always)]
    pub fn remaining_capacity(&self) -> usize { self.capacity() - self.len }

    /// Moves the values into a new block with `extra` more slots than the
    /// current one, releasing the old block.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize` or exceeds `isize::MAX`
    /// bytes.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// arr.extend_capacity(5);
    ///
    /// assert_eq!(arr.capacity(), 8);
    /// assert_eq!(arr, [1, 2, 3]);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`len`) time.
    pub fn extend_capacity(&mut self, extra: usize) {
        let old_capacity = self.capacity();
        let Some(new_capacity) = old_capacity.checked_add(extra) else {
            panic!("capacity overflow")
        };

        let mut data = allocate::<T>(new_capacity);
        unsafe { ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_mut_ptr(), self.len) }

        // The old block only holds `MaybeUninit`s, so dropping it releases
        // memory without touching the moved values.
        self.data = data;
        trace!(old_capacity, new_capacity, len = self.len, "extended backing storage");
    }

    #[inline]
    fn grow_if_full(&mut self) {
        if self.len == self.capacity() { self.extend_capacity(DEFAULT_CAPACITY) }
    }

    /// Returns a reference to the value at `index`.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let arr = DynArray::from([10, 20]);
    /// assert_eq!(arr.get(1), Ok(&20));
    /// assert!(arr.get(2).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.as_slice()
            .get(index)
            .ok_or(IndexOutOfBounds::new(index, self.len))
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(IndexOutOfBounds::new(index, len))
    }

    /// Replaces the value at `index`, returning the previous one.
    ///
    /// On error `value` is dropped and the array is left untouched.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// assert_eq!(arr.set(0, 9), Ok(1));
    /// assert_eq!(arr, [9, 2, 3]);
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.get_mut(index).map(|slot| mem::replace(slot, value))
    }

    /// Appends a value to the back of the array, growing it by
    /// [`DEFAULT_CAPACITY`] slots first if it is full.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::with_capacity(0);
    /// arr.add(1);
    /// assert_eq!(arr, [1]);
    /// assert_eq!(arr.capacity(), 10);
    /// ```
    ///
    /// # Time Complexity
    ///
    /// *O*(1), or *O*(`len`) when the array has to grow.
    #[inline]
    pub fn add(&mut self, element: T) {
        self.grow_if_full();
        unsafe { self.data.get_unchecked_mut(self.len).write(element); }
        self.len += 1;
    }

    /// Inserts a value at position `index`, shifting all values after it to
    /// the right. `index == len` appends.
    ///
    /// Fails without touching the array if `index > len`.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::from([1, 3]);
    /// arr.insert(1, 2).unwrap();
    /// arr.insert(3, 4).unwrap();
    ///
    /// assert_eq!(arr, [1, 2, 3, 4]);
    /// assert!(arr.insert(6, 0).is_err());
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`len - index`) time, plus *O*(`len`) when the array has to
    /// grow.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len { return Err(IndexOutOfBounds::new(index, self.len)) }

        // Growth replaces the block, so it has to happen before taking `ptr`.
        self.grow_if_full();
        unsafe {
            let ptr = self.data.as_mut_ptr().add(index);
            ptr::copy(ptr, ptr.add(1), self.len - index);
            ptr.write(MaybeUninit::new(element));
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the value at `index`, shifting all values after it
    /// to the left.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// assert_eq!(arr.remove_at(1), Ok(2));
    /// assert_eq!(arr, [1, 3]);
    /// assert!(arr.remove_at(2).is_err());
    /// ```
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(`len - index`) time.
    pub fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len { return Err(IndexOutOfBounds::new(index, self.len)) }

        self.len -= 1;
        unsafe {
            let ptr = self.data.as_mut_ptr().add(index);
            let removed = ptr.read().assume_init();
            ptr::copy(ptr.add(1), ptr, self.len - index);
            Ok(removed)
        }
    }

    /// Removes the first value equal to `element`. Returns whether a value was
    /// removed.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::from([5, 1, 5]);
    /// assert!(arr.remove(&5));
    /// assert_eq!(arr, [1, 5]);
    /// assert!(!arr.remove(&7));
    /// ```
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq
    {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes the last value and returns it, or `None` if the array is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        match self.len == 0 {
            true => None,
            false => unsafe {
                self.len -= 1;
                Some(self.data.get_unchecked(self.len).assume_init_read())
            }
        }
    }

    /// Drops every value and swaps in a fresh block of the same capacity.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::<i32>::with_capacity(50);
    /// arr.extend([1, 2, 3]);
    /// arr.clear();
    ///
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.capacity(), 50);
    /// ```
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        let len = mem::replace(&mut self.len, 0);
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), len))
        }
        self.data = allocate(capacity);
        trace!(capacity, dropped = len, "cleared");
    }

    /// Removes all values from the array and returns a double-ended iterator
    /// over them. Capacity is kept.
    ///
    /// If the iterator is dropped before being fully consumed, it drops the
    /// remaining values.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::from([1, 2, 3]);
    /// let drained: Vec<_> = arr.drain().collect();
    ///
    /// assert_eq!(drained, [1, 2, 3]);
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.capacity(), 3);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        let len = mem::replace(&mut self.len, 0);
        let ptr = NonNull::from(&mut *self.data).cast::<T>();
        Drain::new(unsafe { RawIter::new(ptr, len) })
    }

    /// Returns the index of the first value equal to `element`, or `None`.
    ///
    /// This is a linear search.
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let arr = DynArray::from([4, 8, 8]);
    /// assert_eq!(arr.index_of(&8), Some(1));
    /// assert_eq!(arr.index_of(&3), None);
    /// ```
    #[inline]
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq
    {
        self.iter().position(|v| v == element)
    }

    #[inline]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq
    {
        self.index_of(element).is_some()
    }

    /// Sorts the values in their natural order.
    ///
    /// The sort is stable and delegates to [`slice::sort`].
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::from([3, 1, 2]);
    /// arr.sort();
    /// assert_eq!(arr, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord
    {
        self.as_mut_slice().sort();
    }

    /// Sorts the values with a comparator function, which must define a
    /// total order.
    ///
    /// The sort is stable and delegates to [`slice::sort_by`].
    ///
    /// # Examples
    /// ```
    /// use dynarray::DynArray;
    ///
    /// let mut arr = DynArray::from([3, 1, 2]);
    /// arr.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(arr, [3, 2, 1]);
    /// ```
    #[inline]
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering
    {
        self.as_mut_slice().sort_by(compare);
    }

    /// Extracts a slice containing the live values.
    ///
    /// Equivalent to `&arr[..]`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Slots below len are initialized
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast(), self.len) }
    }

    /// Extracts a mutable slice containing the live values.
    ///
    /// Equivalent to `&mut arr[..]`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Slots below len are initialized
        unsafe { slice::from_raw_parts_mut(self.data.as_mut_ptr().cast(), self.len) }
    }
}
