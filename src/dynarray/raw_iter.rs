use std::ptr::NonNull;


/// By-value cursor over `len` initialized values starting at `ptr`.
///
/// Reading a value moves it out; whoever owns the backing block must not
/// drop the values this cursor covers. Works for zero-sized types since the
/// cursor tracks positions rather than comparing pointers.
pub(super) struct RawIter<T> {
    ptr: NonNull<T>,
    head: usize,
    tail: usize,
}

impl <T> RawIter<T> {

    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` initialized values, and the
    /// caller hands over ownership of those values to the cursor.
    #[inline]
    pub(super) const unsafe fn new(ptr: NonNull<T>, len: usize) -> Self {
        Self { ptr, head: 0, tail: len }
    }

    #[inline]
    pub(super) fn next(&mut self) -> Option<T> {
        match self.head == self.tail {
            true => None,
            false => unsafe {
                let item = self.ptr.add(self.head).read();
                self.head += 1;
                Some(item)
            }
        }
    }

    #[inline]
    pub(super) fn next_back(&mut self) -> Option<T> {
        match self.head == self.tail {
            true => None,
            false => unsafe {
                self.tail -= 1;
                Some(self.ptr.add(self.tail).read())
            }
        }
    }

    #[inline(always)]
    pub(super) const fn len(&self) -> usize { self.tail - self.head }

    #[inline]
    pub(super) const fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }

}


#[cfg(test)]
mod tests {
    use std::mem::ManuallyDrop;
    use super::*;

    fn raw_of<T>(values: &mut ManuallyDrop<Vec<T>>) -> RawIter<T> {
        let ptr = NonNull::new(values.as_mut_ptr()).unwrap();
        unsafe { RawIter::new(ptr, values.len()) }
    }

    #[test]
    fn both_ends() {
        let mut values = ManuallyDrop::new(vec![1, 2, 3, 4]);
        let mut iter = raw_of(&mut values);

        assert_eq!(iter.size_hint(), (4, Some(4)));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        unsafe { ManuallyDrop::drop(&mut values) };
    }

    #[test]
    fn zst() {
        let mut values = ManuallyDrop::new(vec![(); 3]);
        let mut iter = raw_of(&mut values);

        assert_eq!(iter.next(), Some(()));
        assert_eq!(iter.next_back(), Some(()));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(()));
        assert_eq!(iter.next(), None);
    }
}
