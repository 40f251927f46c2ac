use std::sync::Arc;

use geo::{BoundingRect, Contains, Coord, MultiPolygon, Point, Rect};
use rstar::{RTree, AABB};

use super::bbox::FeatureBounds;
use crate::types::Geoid;

/// One county boundary from county.json: the GEOID join key, the display name,
/// and the polygon/multipolygon geometry. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct CountyFeature {
    geoid: Geoid,
    name: Arc<str>,
    geometry: MultiPolygon<f64>,
}

impl CountyFeature {
    pub fn new(geoid: Geoid, name: &str, geometry: MultiPolygon<f64>) -> Self {
        Self { geoid, name: Arc::from(name), geometry }
    }

    /// Get the GEOID used to join against the metrics table.
    #[inline] pub fn geoid(&self) -> &Geoid { &self.geoid }

    /// Get the county's display name (properties.NAME).
    #[inline] pub fn name(&self) -> &str { &self.name }

    /// Get a reference to the geometry.
    #[inline] pub fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }

    /// Compute the bounding rectangle of the geometry (lon/lat).
    #[inline]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.geometry.bounding_rect()
    }
}

/// The loaded feature collection, in source order, with an R-tree of bounding
/// boxes for point hit-testing. Owned by the viewer for the session lifetime.
#[derive(Debug)]
pub struct CountyLayer {
    features: Vec<CountyFeature>,
    rtree: RTree<FeatureBounds>,
}

impl CountyLayer {
    /// Construct a layer from features in collection order.
    pub fn new(features: Vec<CountyFeature>) -> Self {
        let rtree = RTree::bulk_load(
            features.iter().enumerate()
                .filter_map(|(i, feature)| feature.bounds().map(|bbox| FeatureBounds::new(i, bbox)))
                .collect()
        );
        Self { features, rtree }
    }

    /// Get the number of features.
    #[inline] pub fn len(&self) -> usize { self.features.len() }

    /// Check if the layer holds no features.
    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// Get the feature at the given collection index.
    #[inline] pub fn get(&self, idx: usize) -> Option<&CountyFeature> { self.features.get(idx) }

    /// Iterate features in collection order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &CountyFeature> {
        self.features.iter()
    }

    /// Compute the bounding rectangle of the whole collection.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.features.iter()
            .filter_map(|feature| feature.bounds())
            .reduce(|a, b| Rect::new(
                Coord {
                    x: a.min().x.min(b.min().x),
                    y: a.min().y.min(b.min().y),
                },
                Coord {
                    x: a.max().x.max(b.max().x),
                    y: a.max().y.max(b.max().y),
                },
            ))
    }

    /// Find the county containing the given lon/lat point. Bounding boxes are
    /// checked via the R-tree first, exact containment second; if bboxes overlap,
    /// the feature earliest in collection order wins.
    pub fn locate(&self, point: Point<f64>) -> Option<&CountyFeature> {
        let envelope = AABB::from_point([point.x(), point.y()]);
        self.rtree.locate_in_envelope_intersecting(&envelope)
            .filter(|entry| self.features[entry.idx()].geometry.contains(&point))
            .map(|entry| entry.idx())
            .min()
            .map(|idx| &self.features[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Point};

    fn square(geoid: &str, name: &str, x0: f64, y0: f64, size: f64) -> CountyFeature {
        let ring = polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ];
        CountyFeature::new(Geoid::new(geoid), name, MultiPolygon(vec![ring]))
    }

    #[test]
    fn bounds_cover_all_features() {
        let layer = CountyLayer::new(vec![
            square("001", "Alpha", 0.0, 0.0, 1.0),
            square("002", "Beta", 3.0, 2.0, 1.0),
        ]);
        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds.min(), Coord { x: 0.0, y: 0.0 });
        assert_eq!(bounds.max(), Coord { x: 4.0, y: 3.0 });
    }

    #[test]
    fn locate_finds_containing_county() {
        let layer = CountyLayer::new(vec![
            square("001", "Alpha", 0.0, 0.0, 1.0),
            square("002", "Beta", 3.0, 2.0, 1.0),
        ]);
        let hit = layer.locate(Point::new(3.5, 2.5)).unwrap();
        assert_eq!(hit.geoid().as_str(), "002");
        assert!(layer.locate(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn empty_layer_has_no_bounds() {
        let layer = CountyLayer::new(Vec::new());
        assert!(layer.is_empty());
        assert!(layer.bounds().is_none());
        assert!(layer.locate(Point::new(0.0, 0.0)).is_none());
    }
}
