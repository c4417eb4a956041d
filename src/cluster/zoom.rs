/// Lowest zoom level at which points are merged; below it every point is a singleton
pub const MIN_CLUSTER_ZOOM: i32 = 5;

/// Radius used for zoom levels missing from the table (the level-5 radius)
pub const DEFAULT_RADIUS_KM: f64 = 0.25;

/// Clustering radius in kilometers for zoom levels 1..=14
///
/// Lower levels are more zoomed in.
const RADIUS_KM: [f64; 14] = [
    0.05, 0.08, 0.12, 0.18, 0.25, 0.4, 0.6, 0.9, 1.3, 2.0, 3.0, 4.5, 6.0, 8.0,
];

/// Returns clustering radius in kilometers for the given zoom level
///
/// Zoom levels outside the table fall back to [`DEFAULT_RADIUS_KM`].
pub fn cluster_radius_km(zoom: i32) -> f64 {
    zoom.checked_sub(1)
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| RADIUS_KM.get(i))
        .copied()
        .unwrap_or(DEFAULT_RADIUS_KM)
}
