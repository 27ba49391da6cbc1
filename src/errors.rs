use std::{error::Error, fmt};


/// Returned when an index falls outside the live elements of an array.
///
/// Carries the offending `index` and the array's length at the time of the
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfBounds {
    #[inline]
    pub(crate) const fn new(index: usize, len: usize) -> Self { Self { index, len } }
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds for length {}", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = IndexOutOfBounds::new(4, 3);

        assert_eq!(err.to_string(), "index 4 out of bounds for length 3");
    }

    #[test]
    fn as_dyn_error() {
        let err: Box<dyn Error> = Box::new(IndexOutOfBounds::new(0, 0));
        assert!(err.source().is_none());
    }
}
