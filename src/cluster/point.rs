//! Input places and output clusters

use serde::Serialize;
use std::fmt;

/// PlaceId is an externally supplied point identifier
///
/// Numeric ids stay numbers when serialized, everything else is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PlaceId {
    Num(i64),
    Text(String),
}

impl PlaceId {
    /// Parses an id from a raw field
    ///
    /// Only canonical integers become numbers, so `007` and `+5` keep their
    /// text and never collide with `7` or `5`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => PlaceId::Num(n),
            _ => PlaceId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceId::Num(n) => write!(f, "{}", n),
            PlaceId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PlaceId {
    fn from(n: i64) -> Self {
        PlaceId::Num(n)
    }
}

impl From<i32> for PlaceId {
    fn from(n: i32) -> Self {
        PlaceId::Num(n.into())
    }
}

impl From<usize> for PlaceId {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => PlaceId::Num(n),
            Err(_) => PlaceId::Text(n.to_string()),
        }
    }
}

impl From<&str> for PlaceId {
    fn from(s: &str) -> Self {
        PlaceId::Text(s.to_string())
    }
}

/// LatLng is a geographic coordinate in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Point is a single place to be put on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: PlaceId,
    /// `None` when latitude or longitude is missing, not a number or out of range
    pub coordinates: Option<LatLng>,
    /// Opaque, only used by renderers
    pub category: Option<String>,
}

impl Point {
    /// Creates a point, dropping the coordinates unless latitude is within
    /// [-90, 90] and longitude within [-180, 180]
    pub fn new(id: impl Into<PlaceId>, lat: f64, lng: f64) -> Self {
        // NaN fails both range checks
        let in_range = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng);
        let coordinates = if in_range {
            Some(LatLng::new(lat, lng))
        } else {
            None
        };
        Point {
            id: id.into(),
            coordinates,
            category: None,
        }
    }

    /// Creates a point whose coordinates could not be read
    pub fn without_coordinates(id: impl Into<PlaceId>) -> Self {
        Point {
            id: id.into(),
            coordinates: None,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Cluster is a group of one or more points drawn as a single marker
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Stable key: the point id for singletons, derived from count and centroid otherwise
    pub id: String,
    /// True iff the cluster has more than one member
    pub is_cluster: bool,
    /// Arithmetic mean of member coordinates
    pub centroid: LatLng,
    /// Indices into the input points, in absorption order (seed first)
    pub members: Vec<usize>,
}

impl Cluster {
    /// Builds the final cluster record from absorbed member indices
    ///
    /// The centroid is recomputed exactly from the members rather than taken
    /// from the running sums used while absorbing.
    ///
    /// Every member must have coordinates and `members` must not be empty.
    pub(crate) fn assemble(points: &[Point], members: Vec<usize>) -> Cluster {
        let mut sum_lat = 0.0;
        let mut sum_lng = 0.0;
        for c in members.iter().filter_map(|&i| points[i].coordinates) {
            sum_lat += c.lat;
            sum_lng += c.lng;
        }
        let n = members.len() as f64;
        let centroid = LatLng::new(sum_lat / n, sum_lng / n);

        if members.len() > 1 {
            Cluster {
                id: cluster_key(members.len(), &centroid),
                is_cluster: true,
                centroid,
                members,
            }
        } else {
            Cluster {
                id: points[members[0]].id.to_string(),
                is_cluster: false,
                centroid,
                members,
            }
        }
    }

    /// Number of points in the cluster
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Ids of the member points, in absorption order
    pub fn member_ids<'a>(&self, points: &'a [Point]) -> Vec<&'a PlaceId> {
        self.members.iter().map(|&i| &points[i].id).collect()
    }

    /// Calculates cluster bounds
    ///
    /// Returns `(min, max)` where `min` is the south-west corner and `max`
    /// the north-east corner, or `None` if no member has coordinates.
    pub fn bounds(&self, points: &[Point]) -> Option<(LatLng, LatLng)> {
        let mut coords = self.members.iter().filter_map(|&i| points[i].coordinates);
        let first = coords.next()?;
        let mut min = first;
        let mut max = first;

        for c in coords {
            min.lat = min.lat.min(c.lat);
            min.lng = min.lng.min(c.lng);
            max.lat = max.lat.max(c.lat);
            max.lng = max.lng.max(c.lng);
        }

        Some((min, max))
    }

    /// Presentation tier for this cluster's size
    pub fn style(&self) -> super::style::ClusterStyle {
        super::style::style_for(self.count())
    }
}

/// Deterministic key so identical inputs produce identical render keys
fn cluster_key(count: usize, centroid: &LatLng) -> String {
    format!("cluster-{}-{:.5}-{:.5}", count, centroid.lat, centroid.lng)
}
