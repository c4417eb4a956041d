use super::distance::distance_km;
use super::grid::GridIndex;
use super::point::{Cluster, LatLng, Point};
use super::zoom::{MIN_CLUSTER_ZOOM, cluster_radius_km};
use bitvec::prelude::*;
use tracing::debug;

// Greedy single pass over the input:
//
// cluster(P, zoom)
//    if zoom < MIN_CLUSTER_ZOOM
//       return every point as a singleton
//    r = radius(zoom)
//    for each unprocessed point p in P
//       C = [p], centroid = p
//       for each unprocessed q != p in the 3x3 cells around p
//          if dist(q, centroid) <= r
//             add q to C, move centroid to mean(C)
//       emit C
//
// Distance is measured against the moving centroid, not against p, so a
// cluster can reach points further than r from its seed. Membership depends
// on input order.

/// Clusters incoming points for a map shown at the given zoom level
///
/// # Arguments
///
/// * `points` - Places to cluster; points without coordinates are dropped
/// * `zoom` - Map zoom level, lower is more zoomed in
///
/// # Returns
///
/// Clusters in the order their seed points appear in `points`. Every point
/// with coordinates belongs to exactly one of them.
pub fn marker_cluster(points: &[Point], zoom: i32) -> Vec<Cluster> {
    if zoom < MIN_CLUSTER_ZOOM {
        return singletons(points);
    }

    let radius = cluster_radius_km(zoom);
    let grid = GridIndex::build(points, radius);
    debug!(
        zoom,
        radius_km = radius,
        cell_size_deg = grid.cell_size(),
        cells = grid.len(),
        "built grid index"
    );

    let mut processed = bitvec![0; points.len()];
    let mut clusters = Vec::new();
    let mut candidates = Vec::new();

    for (i, point) in points.iter().enumerate() {
        if processed[i] {
            continue;
        }
        let Some(seed) = point.coordinates else {
            continue;
        };
        processed.set(i, true);

        let mut members = vec![i];
        let mut sum_lat = seed.lat;
        let mut sum_lng = seed.lng;

        candidates.clear();
        grid.neighbourhood(grid.cell_of(&seed), &mut candidates);
        // Absorb in input order regardless of cell layout
        candidates.sort_unstable();

        for &j in &candidates {
            if processed[j] {
                continue;
            }
            let Some(q) = points[j].coordinates else {
                continue;
            };

            let n = members.len() as f64;
            let centroid = LatLng::new(sum_lat / n, sum_lng / n);
            if distance_km(&q, &centroid) <= radius {
                members.push(j);
                processed.set(j, true);
                sum_lat += q.lat;
                sum_lng += q.lng;
            }
        }

        clusters.push(Cluster::assemble(points, members));
    }

    debug!(
        points = points.len(),
        clusters = clusters.len(),
        "clustered points"
    );

    clusters
}

/// Every point with coordinates as its own cluster, in input order
fn singletons(points: &[Point]) -> Vec<Cluster> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.coordinates.is_some())
        .map(|(i, _)| Cluster::assemble(points, vec![i]))
        .collect()
}
