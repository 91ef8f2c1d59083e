use core::cmp::Ordering;

use super::Layer;

/// Stable sort key for drawing requests.
///
/// Ordering rules:
/// 1) `layer`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal layers)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub layer: Layer,
    /// Insertion index within the canvas, ensuring stable ordering.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(layer: Layer, order: u32) -> Self {
        Self { layer, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.layer.cmp(&other.layer) {
            Ordering::Equal => self.order.cmp(&other.order),
            o => o,
        }
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_dominates_order() {
        let a = SortKey::new(Layer(5), 9);
        let b = SortKey::new(Layer(10), 0);
        assert!(a < b);
    }

    #[test]
    fn order_breaks_ties() {
        let a = SortKey::new(Layer(10), 1);
        let b = SortKey::new(Layer(10), 2);
        assert!(a < b);
    }
}
