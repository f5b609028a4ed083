//! Fixed-capacity entity pools
//!
//! Dense storage with swap-remove reclamation. Order is not meaningful and an
//! index only identifies an entity until the next `reclaim`.

/// A dense pool that never grows past its capacity
#[derive(Debug, Clone)]
pub struct FixedPool<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> FixedPool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an item, returning its index, or `None` when the pool is full
    pub fn spawn(&mut self, item: T) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.items.push(item);
        Some(self.items.len() - 1)
    }

    /// Remove the item at `index`, moving the last live item into its slot
    ///
    /// Returns `None` for an index past the live count.
    pub fn reclaim(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.swap_remove(index))
    }

    /// Visit every item, reclaiming those for which `keep` returns false
    ///
    /// After a reclaim the same index is visited again, so the item swapped in
    /// from the end is never skipped.
    pub fn sweep(&mut self, mut keep: impl FnMut(&mut T) -> bool) {
        let mut i = 0;
        while i < self.items.len() {
            if keep(&mut self.items[i]) {
                i += 1;
            } else {
                self.items.swap_remove(i);
            }
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a FixedPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
