use alloc::vec::Vec;
use core::ops::Deref;
use core::slice;

use delegate::delegate;

/// Owned, ordered sequence of SID sub-authorities.
///
/// Its [`len`](Self::len) is always the real number of entries. It is
/// independent of [`SecurityIdentifier::sub_authority_count`](crate::SecurityIdentifier::sub_authority_count),
/// which is stored separately and never updated from here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubAuthorities {
    inner: Vec<u32>,
}

impl SubAuthorities {
    /// Creates an empty sequence.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    delegate! {
        to self.inner {
            /// Number of sub-authorities actually held.
            #[must_use]
            #[inline]
            pub fn len(&self) -> usize;
            /// `true` when there is no sub-authority.
            #[must_use]
            #[inline]
            pub fn is_empty(&self) -> bool;
            /// Appends a sub-authority at the end.
            #[inline]
            pub fn push(&mut self, value: u32);
            /// Removes and returns the last sub-authority.
            #[inline]
            pub fn pop(&mut self) -> Option<u32>;
            /// Borrows the sub-authorities as a slice.
            #[must_use]
            #[inline]
            pub fn as_slice(&self) -> &[u32];
        }
    }

    /// Consumes the sequence and returns the underlying vector.
    #[must_use]
    #[inline]
    pub fn into_vec(self) -> Vec<u32> {
        self.inner
    }
}

impl Deref for SubAuthorities {
    type Target = [u32];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u32]> for SubAuthorities {
    delegate! {
        to self.inner {
            #[inline]
            fn as_ref(&self) -> &[u32];
        }
    }
}

impl From<Vec<u32>> for SubAuthorities {
    #[inline]
    fn from(inner: Vec<u32>) -> Self {
        Self { inner }
    }
}

impl From<&[u32]> for SubAuthorities {
    #[inline]
    fn from(value: &[u32]) -> Self {
        Self {
            inner: value.to_vec(),
        }
    }
}

impl<const N: usize> From<[u32; N]> for SubAuthorities {
    #[inline]
    fn from(value: [u32; N]) -> Self {
        Self {
            inner: Vec::from(value),
        }
    }
}

impl From<SubAuthorities> for Vec<u32> {
    #[inline]
    fn from(value: SubAuthorities) -> Self {
        value.inner
    }
}

impl FromIterator<u32> for SubAuthorities {
    #[inline]
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for SubAuthorities {
    delegate! {
        to self.inner {
            #[inline]
            fn extend<T: IntoIterator<Item = u32>>(&mut self, iter: T);
        }
    }
}

impl<'a> IntoIterator for &'a SubAuthorities {
    type Item = &'a u32;
    type IntoIter = slice::Iter<'a, u32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl IntoIterator for SubAuthorities {
    type Item = u32;
    type IntoIter = alloc::vec::IntoIter<u32>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl PartialEq<[u32]> for SubAuthorities {
    #[inline]
    fn eq(&self, other: &[u32]) -> bool {
        self.inner.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[u32; N]> for SubAuthorities {
    #[inline]
    fn eq(&self, other: &[u32; N]) -> bool {
        self.inner.as_slice() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_tracks_contents() {
        let mut subs = SubAuthorities::new();
        assert!(subs.is_empty(), "new sequence should be empty");
        subs.push(21);
        subs.extend([1, 2]);
        assert_eq!(subs.len(), 3);
        assert_eq!(subs, [21, 1, 2]);
        assert_eq!(subs.pop(), Some(2));
        assert_eq!(subs.as_slice(), &[21, 1]);
        assert_eq!(subs.iter().sum::<u32>(), 22);
    }

    #[test]
    fn conversions() {
        let from_array = SubAuthorities::from([32, 544]);
        let from_slice = SubAuthorities::from(&[32u32, 544][..]);
        let collected: SubAuthorities = [32u32, 544].into_iter().collect();
        assert_eq!(from_array, from_slice);
        assert_eq!(from_array, collected);
        assert_eq!(from_array.into_vec(), Vec::from([32, 544]));
    }
}
