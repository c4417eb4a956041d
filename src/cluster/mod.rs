//! Package cluster implements zoom-dependent marker clustering on (lat, lng) using a grid index
pub mod distance;
pub mod grid;
pub mod markercluster;
pub mod point;
pub mod style;
pub mod zoom;

#[cfg(test)]
mod point_test;

pub use markercluster::marker_cluster;
pub use point::{Cluster, PlaceId, Point};
// Public API exports - allow unused imports as these are part of the public API
#[allow(unused_imports)]
pub use point::LatLng;
#[allow(unused_imports)]
pub use distance::{DEGREE_RAD, EARTH_R, distance_km};
#[allow(unused_imports)]
pub use grid::{GridIndex, cell_size_deg};
#[allow(unused_imports)]
pub use style::{ClusterStyle, ColorTier, style_for};
#[allow(unused_imports)]
pub use zoom::{MIN_CLUSTER_ZOOM, cluster_radius_km};
