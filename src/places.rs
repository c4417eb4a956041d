//! Loads places from CSV files
//!
//! Input files come from several exporters and name their columns differently.
//! Headers are matched against a list of known aliases and every row is turned
//! into a strict [`Point`]; anything else is logged and ignored.

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cluster::{PlaceId, Point};

const ID_ALIASES: &[&str] = &["id", "place_id", "placeid", "store_id", "storeid", "uuid"];
const LAT_ALIASES: &[&str] = &["lat", "latitude", "y", "mapy"];
const LNG_ALIASES: &[&str] = &["lng", "lon", "long", "longitude", "x", "mapx"];
const CATEGORY_ALIASES: &[&str] = &["category", "type", "kind"];

/// Errors raised while loading places
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("header has no {0} column")]
    MissingColumn(&'static str),
}

/// Positions of the known columns within a record
#[derive(Debug, Clone, Copy, PartialEq)]
struct Columns {
    id: Option<usize>,
    lat: usize,
    lng: usize,
    category: Option<usize>,
}

impl Columns {
    /// Layout of header-less files: `latitude,longitude[,id[,category]]`
    const POSITIONAL: Columns = Columns {
        id: Some(2),
        lat: 0,
        lng: 1,
        category: Some(3),
    };

    /// Resolves column positions from a header row
    fn from_header(header: &StringRecord) -> Result<Columns, PlacesError> {
        let mut id = None;
        let mut lat = None;
        let mut lng = None;
        let mut category = None;

        for (i, name) in header.iter().enumerate() {
            let name = name.trim().to_ascii_lowercase();
            let slot = if ID_ALIASES.contains(&name.as_str()) {
                &mut id
            } else if LAT_ALIASES.contains(&name.as_str()) {
                &mut lat
            } else if LNG_ALIASES.contains(&name.as_str()) {
                &mut lng
            } else if CATEGORY_ALIASES.contains(&name.as_str()) {
                &mut category
            } else {
                warn!(column = %name, "ignoring unknown column");
                continue;
            };
            // First matching column wins
            if slot.is_none() {
                *slot = Some(i);
            }
        }

        Ok(Columns {
            id,
            lat: lat.ok_or(PlacesError::MissingColumn("latitude"))?,
            lng: lng.ok_or(PlacesError::MissingColumn("longitude"))?,
            category,
        })
    }

    /// Converts one data row; `row` is the 0-based data row number used as a fallback id
    fn point(&self, record: &StringRecord, row: usize) -> Point {
        let field = |i: Option<usize>| {
            i.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let id = field(self.id).map_or_else(|| PlaceId::from(row), PlaceId::parse);
        let lat = field(Some(self.lat)).and_then(|s| s.parse::<f64>().ok());
        let lng = field(Some(self.lng)).and_then(|s| s.parse::<f64>().ok());

        let mut point = match (lat, lng) {
            (Some(lat), Some(lng)) => Point::new(id, lat, lng),
            _ => Point::without_coordinates(id),
        };
        if point.coordinates.is_none() {
            debug!(row, id = %point.id, "row has no usable coordinates");
        }
        if let Some(category) = field(self.category) {
            point = point.with_category(category);
        }
        point
    }
}

/// A row is a header when it names a known column, or when none of its cells
/// is a number
///
/// A data row with a blank or garbled latitude still has a numeric longitude,
/// so it is read as data.
fn is_header(record: &StringRecord) -> bool {
    let names_known_column = record.iter().any(|cell| {
        let name = cell.trim().to_ascii_lowercase();
        [ID_ALIASES, LAT_ALIASES, LNG_ALIASES, CATEGORY_ALIASES]
            .iter()
            .any(|aliases| aliases.contains(&name.as_str()))
    });
    let has_number = record.iter().any(|cell| cell.trim().parse::<f64>().is_ok());

    names_known_column || !has_number
}

/// Reads places from a CSV file
///
/// The first row is a header when it names a known column or holds no
/// numbers. Without a header the columns are
/// `latitude,longitude[,id[,category]]`.
///
/// Rows whose coordinates cannot be read are kept as points without
/// coordinates; clustering leaves them out.
pub fn load_places(path: &Path) -> Result<Vec<Point>, PlacesError> {
    let file = File::open(path).map_err(|source| PlacesError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_places(file)
}

/// Reads places from any CSV source, see [`load_places`]
pub fn read_places<R: std::io::Read>(source: R) -> Result<Vec<Point>, PlacesError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut records = reader.records();
    let Some(first) = records.next().transpose()? else {
        return Ok(Vec::new());
    };

    let has_header = is_header(&first);

    let mut points = Vec::new();
    let columns = if has_header {
        Columns::from_header(&first)?
    } else {
        points.push(Columns::POSITIONAL.point(&first, 0));
        Columns::POSITIONAL
    };

    for record in records {
        let record = record?;
        let row = points.len();
        points.push(columns.point(&record, row));
    }

    debug!(
        points = points.len(),
        header = has_header,
        "read places"
    );
    Ok(points)
}
