//! Coarse lat/lng grid used to limit neighbour search
//!
//! Cells are sized at twice the clustering radius, so every point within the
//! radius of a seed lies in the 3x3 block of cells around the seed's cell.
//! The km-per-degree factor ignores longitude shrinking toward the poles.

use std::collections::HashMap;

use super::point::{LatLng, Point};

/// Approximate kilometers per degree of latitude
pub const KM_PER_DEGREE: f64 = 111.0;

/// Smallest cell edge in degrees
pub const MIN_CELL_SIZE_DEG: f64 = 0.0001;

/// Grid cell coordinates `(lat_cell, lng_cell)`
pub type CellKey = (i64, i64);

/// Returns cell edge in degrees for the given clustering radius in km
pub fn cell_size_deg(radius_km: f64) -> f64 {
    (radius_km / KM_PER_DEGREE * 2.0).max(MIN_CELL_SIZE_DEG)
}

/// Spatial index from grid cell to indices of the points inside it
pub struct GridIndex {
    cell_size: f64,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl GridIndex {
    /// Buckets every point that has coordinates
    ///
    /// Points without coordinates are skipped and never show up as neighbours.
    /// Indices inside a cell keep input order.
    pub fn build(points: &[Point], radius_km: f64) -> GridIndex {
        let mut grid = GridIndex {
            cell_size: cell_size_deg(radius_km),
            cells: HashMap::new(),
        };

        for (i, point) in points.iter().enumerate() {
            let Some(c) = point.coordinates else {
                continue;
            };
            let key = grid.cell_of(&c);
            grid.cells.entry(key).or_default().push(i);
        }

        grid
    }

    /// Cell edge in degrees
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of non-empty cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cell_of(&self, c: &LatLng) -> CellKey {
        (
            (c.lat / self.cell_size).floor() as i64,
            (c.lng / self.cell_size).floor() as i64,
        )
    }

    /// Appends indices of all points in the 3x3 block around `key` to `out`
    ///
    /// To avoid allocation, `out` can be re-used across calls.
    pub fn neighbourhood(&self, key: CellKey, out: &mut Vec<usize>) {
        for d_lat in -1..=1 {
            for d_lng in -1..=1 {
                let (Some(lat), Some(lng)) = (key.0.checked_add(d_lat), key.1.checked_add(d_lng))
                else {
                    continue;
                };
                if let Some(ids) = self.cells.get(&(lat, lng)) {
                    out.extend_from_slice(ids);
                }
            }
        }
    }
}
