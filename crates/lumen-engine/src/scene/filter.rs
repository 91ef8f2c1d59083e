use super::Layer;

/// Layer-range filter applied by [`Canvas::render`](super::Canvas::render).
///
/// The threshold is [`Layer::LIGHTMAP`]. Both filtered modes are strict, so a
/// request sitting exactly on the threshold is only dispatched by `NoFilter`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Filter {
    #[default]
    NoFilter,
    /// Only layers strictly below the threshold.
    BelowThreshold,
    /// Only layers strictly above the threshold.
    AboveThreshold,
}

impl Filter {
    pub const THRESHOLD: Layer = Layer::LIGHTMAP;

    #[inline]
    pub fn admits(self, layer: Layer) -> bool {
        match self {
            Filter::NoFilter => true,
            Filter::BelowThreshold => layer < Self::THRESHOLD,
            Filter::AboveThreshold => layer > Self::THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_layer_only_passes_no_filter() {
        let t = Filter::THRESHOLD;
        assert!(Filter::NoFilter.admits(t));
        assert!(!Filter::BelowThreshold.admits(t));
        assert!(!Filter::AboveThreshold.admits(t));
    }

    #[test]
    fn neighbours_of_boundary() {
        let below = Filter::THRESHOLD.offset(-1);
        let above = Filter::THRESHOLD.offset(1);
        assert!(Filter::BelowThreshold.admits(below));
        assert!(!Filter::AboveThreshold.admits(below));
        assert!(Filter::AboveThreshold.admits(above));
        assert!(!Filter::BelowThreshold.admits(above));
    }
}
