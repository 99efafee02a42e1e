use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable candidate sequence.
///
/// Cloning is cheap and keeps the identity. Two values are [`same`] only when
/// they share the allocation, so building a new `Candidates` from equal items
/// still counts as a change.
///
/// [`same`]: Candidates::same
pub struct Candidates<T>(Arc<[T]>);

impl<T> Candidates<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self(items.into())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Identity comparison.
    pub fn same(&self, other: &Candidates<T>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> Clone for Candidates<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Candidates<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Candidates<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Candidates<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> From<Arc<[T]>> for Candidates<T> {
    fn from(items: Arc<[T]>) -> Self {
        Self(items)
    }
}

impl<T> FromIterator<T> for Candidates<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Candidates<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
