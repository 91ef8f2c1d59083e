/// Per-frame bump store of owned values.
///
/// Values are appended during a frame and never freed one by one. [`reset`]
/// drops every live value in place and keeps the backing allocation, so a
/// warmed-up arena stops allocating after the first few frames.
///
/// Performance characteristics:
/// - `alloc()` is amortized O(1)
/// - `reset()` is O(n) in live values (drops), O(1) in allocation
///
/// [`reset`]: FrameArena::reset
#[derive(Debug)]
pub struct FrameArena<T> {
    items: Vec<T>,
    high_water: usize,
}

impl<T> FrameArena<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            high_water: 0,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            high_water: 0,
        }
    }

    /// Moves `value` into the arena and returns a reference valid until the next reset.
    #[inline]
    pub fn alloc(&mut self, value: T) -> &mut T {
        if self.items.len() == self.items.capacity() && self.items.capacity() > 0 {
            log::debug!(
                "FrameArena: growing past capacity {} ({} live values)",
                self.items.capacity(),
                self.items.len()
            );
        }
        self.items.push(value);
        self.high_water = self.high_water.max(self.items.len());
        let last = self.items.len() - 1;
        &mut self.items[last]
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
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Largest number of simultaneously live values seen since creation.
    #[inline]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops all live values in allocation order and keeps capacity for reuse.
    #[inline]
    pub fn reset(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for FrameArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a FrameArena<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::FrameArena;

    #[test]
    fn alloc_returns_stored_value() {
        let mut arena = FrameArena::with_capacity(4);
        *arena.alloc(1u32) += 10;
        arena.alloc(2);
        assert_eq!(arena.as_slice(), &[11, 2]);
    }

    #[test]
    fn reset_keeps_capacity() {
        let mut arena = FrameArena::with_capacity(8);
        for i in 0..8u64 {
            arena.alloc(i);
        }
        let cap = arena.capacity();
        arena.reset();
        assert!(arena.is_empty());
        assert_eq!(arena.capacity(), cap, "reset must not release the backing storage");
        assert_eq!(arena.high_water(), 8);
    }

    #[test]
    fn reset_drops_owned_values() {
        let shared = Rc::new(());
        let mut arena = FrameArena::new();
        arena.alloc(Rc::clone(&shared));
        arena.alloc(Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 3);

        arena.reset();
        assert_eq!(Rc::strong_count(&shared), 1);

        // A second reset has nothing left to drop.
        arena.reset();
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
