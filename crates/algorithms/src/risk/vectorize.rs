//! Region → GeoJSON polygon conversion

use super::regions::Region;
use terrarisk_core::vector::{Feature, FeatureCollection, Geometry, RiskProperties};
use terrarisk_core::GeoProjector;

/// Convert extracted regions into a GeoJSON feature collection.
///
/// Each region becomes one rectangular polygon feature covering its
/// bounding box, carrying the band name, mean score, ground area and
/// centroid as properties. Region order is preserved.
///
/// # Arguments
/// * `regions` - Regions in band-severity order
/// * `projector` - Pixel → degree conversion anchored at the scene center
pub fn vectorize_regions(regions: &[Region], projector: &GeoProjector) -> FeatureCollection {
    let features = regions
        .iter()
        .map(|region| {
            let geo = projector.project_bounds(&region.bounds);
            let (center_lat, center_lon) = geo.centroid();
            let area_km2 = region.area_px as f64 * projector.km2_per_pixel();

            Feature::new(
                Geometry::polygon(&geo.ring()),
                RiskProperties {
                    risk_level: region.band.name().to_string(),
                    risk_score: region.mean_score,
                    area_km2,
                    color: region.band.color().to_string(),
                    center_lat,
                    center_lon,
                },
            )
        })
        .collect();

    FeatureCollection::new(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::band::RiskBand;
    use approx::assert_relative_eq;
    use terrarisk_core::PixelBounds;

    fn sample_region() -> Region {
        Region {
            band: RiskBand::High,
            bounds: PixelBounds::new(0, 0, 10, 10),
            area_px: 64,
            mean_score: 86.5,
        }
    }

    #[test]
    fn test_feature_properties() {
        let projector = GeoProjector::new(26.0, 92.0, 1.0);
        let fc = vectorize_regions(&[sample_region()], &projector);

        assert_eq!(fc.len(), 1);
        let props = &fc.features[0].properties;
        assert_eq!(props.risk_level, "HIGH");
        assert_eq!(props.color, "#ef4444");
        assert_relative_eq!(props.risk_score, 86.5);
        assert_relative_eq!(props.area_km2, 64.0);
        assert_relative_eq!(props.center_lat, 26.0 - 5.0 / 111.0, epsilon = 1e-12);
        assert_relative_eq!(props.center_lon, 92.0 + 5.0 / 111.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ring_matches_projection() {
        let projector = GeoProjector::new(26.0, 92.0, 1.0);
        let fc = vectorize_regions(&[sample_region()], &projector);

        let ring = fc.features[0].geometry.exterior();
        assert_eq!(ring.len(), 5);

        let lat_min = 26.0 - 10.0 / 111.0;
        let lon_max = 92.0 + 10.0 / 111.0;
        assert_relative_eq!(ring[0][0], 92.0, epsilon = 1e-12);
        assert_relative_eq!(ring[0][1], lat_min, epsilon = 1e-12);
        assert_relative_eq!(ring[2][0], lon_max, epsilon = 1e-12);
        assert_relative_eq!(ring[2][1], 26.0, epsilon = 1e-12);
        assert_eq!(ring[0], ring[4]);
    }

    #[test]
    fn test_pixel_scale_changes_area() {
        let projector = GeoProjector::new(0.0, 0.0, 2.0);
        let fc = vectorize_regions(&[sample_region()], &projector);
        assert_relative_eq!(fc.features[0].properties.area_km2, 256.0);
    }

    #[test]
    fn test_empty_regions() {
        let projector = GeoProjector::default();
        let fc = vectorize_regions(&[], &projector);
        assert!(fc.is_empty());
    }
}
