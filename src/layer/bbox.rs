use geo::Rect;
use rstar::{RTreeObject, AABB};

/// An R-tree entry tying a feature's bounding box back to its position in the
/// collection. Collection order is load order; hit-testing goes bbox-first,
/// exact containment second.
#[derive(Debug, Clone)]
pub(crate) struct FeatureBounds {
    idx: usize, // Index of the corresponding CountyFeature
    bbox: Rect<f64>,
}

impl FeatureBounds {
    pub(crate) fn new(idx: usize, bbox: Rect<f64>) -> Self {
        Self { idx, bbox }
    }

    /// Get the index of the corresponding feature.
    #[inline] pub(crate) fn idx(&self) -> usize { self.idx }
}

impl RTreeObject for FeatureBounds {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}
