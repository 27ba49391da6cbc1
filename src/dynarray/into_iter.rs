use std::{fmt, iter::FusedIterator, mem::MaybeUninit, ptr::NonNull};

use super::RawIter;


/// An owning iterator over the values of a [`DynArray`](super::DynArray).
///
/// Created by the [`IntoIterator`] impl on `DynArray`.
pub struct IntoIter<T> {
    buf: NonNull<[MaybeUninit<T>]>,
    iter: RawIter<T>,
}

unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl <T> IntoIter<T> {
    /// Takes over `data` with its first `len` slots initialized.
    #[inline]
    pub(super) fn new(data: Box<[MaybeUninit<T>]>, len: usize) -> Self {
        debug_assert!(len <= data.len());
        let buf = NonNull::from(Box::leak(data));
        let iter = unsafe { RawIter::new(buf.cast(), len) };
        Self { buf, iter }
    }
}

#[cfg(not(tarpaulin_include))]
impl <T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.iter.len()).finish()
    }
}

impl <T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> { self.iter.next() }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl <T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.iter.next_back() }
}

impl <T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize { self.iter.len() }
}

impl <T> FusedIterator for IntoIter<T> {}

impl <T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in &mut *self {}
        // The block was leaked in `new`; slots hold no values by now.
        unsafe { drop(Box::from_raw(self.buf.as_ptr())) }
    }
}
