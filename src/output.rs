//! Writes clustering results for a map renderer

use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

use crate::cluster::{Cluster, ColorTier, PlaceId, Point};

/// Area covered by a cluster's members
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// One marker or badge, as handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterRecord<'a> {
    pub id: &'a str,
    pub is_cluster: bool,
    pub count: usize,
    pub centroid_lat: f64,
    pub centroid_lng: f64,
    pub members: Vec<&'a PlaceId>,
    pub size_px: u32,
    pub color: ColorTier,
    pub color_hex: &'static str,
    pub bounds: Option<Bounds>,
}

impl<'a> ClusterRecord<'a> {
    pub fn new(cluster: &'a Cluster, points: &'a [Point]) -> Self {
        let style = cluster.style();
        let bounds = cluster.bounds(points).map(|(min, max)| Bounds {
            south: min.lat,
            west: min.lng,
            north: max.lat,
            east: max.lng,
        });

        ClusterRecord {
            id: &cluster.id,
            is_cluster: cluster.is_cluster,
            count: cluster.count(),
            centroid_lat: cluster.centroid.lat,
            centroid_lng: cluster.centroid.lng,
            members: cluster.member_ids(points),
            size_px: style.size_px,
            color: style.color_tier,
            color_hex: style.color_tier.hex(),
            bounds,
        }
    }
}

/// Builds renderer records for all clusters
pub fn records<'a>(clusters: &'a [Cluster], points: &'a [Point]) -> Vec<ClusterRecord<'a>> {
    clusters
        .iter()
        .map(|c| ClusterRecord::new(c, points))
        .collect()
}

/// Joins member ids with `;`
///
/// A `;` inside an id is written as `\;` and a backslash as `\\`, so the
/// list can be split back unambiguously.
pub fn join_members(members: &[&PlaceId]) -> String {
    let mut joined = String::new();
    for (i, id) in members.iter().enumerate() {
        if i > 0 {
            joined.push(';');
        }
        for ch in id.to_string().chars() {
            if ch == ';' || ch == '\\' {
                joined.push('\\');
            }
            joined.push(ch);
        }
    }
    joined
}

/// Writes clusters as CSV
///
/// Format: `id,is_cluster,count,centroid_lat,centroid_lng,size_px,color,color_hex,members`
/// with member ids joined by `;`, see [`join_members`].
pub fn write_csv<W: Write>(
    out: W,
    clusters: &[Cluster],
    points: &[Point],
) -> anyhow::Result<()> {
    let mut writer = WriterBuilder::new().from_writer(out);
    writer.write_record([
        "id",
        "is_cluster",
        "count",
        "centroid_lat",
        "centroid_lng",
        "size_px",
        "color",
        "color_hex",
        "members",
    ])?;

    for record in records(clusters, points) {
        writer.write_record([
            record.id.to_string(),
            record.is_cluster.to_string(),
            record.count.to_string(),
            record.centroid_lat.to_string(),
            record.centroid_lng.to_string(),
            record.size_px.to_string(),
            record.color.name().to_string(),
            record.color_hex.to_string(),
            join_members(&record.members),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes clusters as a pretty-printed JSON array
pub fn write_json<W: Write>(
    mut out: W,
    clusters: &[Cluster],
    points: &[Point],
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, &records(clusters, points))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
