use std::{fmt, iter::FusedIterator, marker::PhantomData};
use super::RawIter;

/// A draining iterator over the values of a [`DynArray`](super::DynArray).
///
/// Created by [`DynArray::drain`](super::DynArray::drain). Values left
/// unconsumed are dropped along with the iterator.
pub struct Drain<'a, T: 'a> {
    _array: PhantomData<&'a mut [T]>,
    iter: RawIter<T>,
}

unsafe impl<'a, T: Send> Send for Drain<'a, T> {}
unsafe impl<'a, T: Sync> Sync for Drain<'a, T> {}

impl <'a, T: 'a> Drain<'a, T> {
    #[inline]
    pub(super) const fn new(iter: RawIter<T>) -> Self {
        Self { _array: PhantomData, iter }
    }
}

#[cfg(not(tarpaulin_include))]
impl <'a, T> fmt::Debug for Drain<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drain").field("remaining", &self.iter.len()).finish()
    }
}

impl <'a, T> Iterator for Drain<'a, T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> { self.iter.next() }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl <'a, T> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.iter.next_back() }
}

impl <'a, T> ExactSizeIterator for Drain<'a, T> {
    #[inline]
    fn len(&self) -> usize { self.iter.len() }
}

impl <'a, T> FusedIterator for Drain<'a, T> {}

impl <'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) { for _ in &mut *self { } }
}
