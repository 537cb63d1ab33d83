//! GPX reader.
//!
//! Every `trkpt` under `trk/trkseg` must carry `lat`/`lon`, `ele`, `time` and an
//! `extensions` block with `speed`, `course`, `hAcc` and `vAcc`. Any missing or
//! non-numeric field aborts the whole load.

use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use quick_xml::de::from_str;
use serde::Deserialize;

use super::error::GpxError;
use super::model::{Track, TrackPoint};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Read the GPX file at `path` and build a `Track` with its aggregates.
pub fn load_track(path: &Path, offset: FixedOffset) -> Result<Track, GpxError> {
    let content = std::fs::read_to_string(path).map_err(|source| GpxError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read GPX file");

    let points = parse_gpx_str(&content, offset)?;
    let track = Track::new(points);
    tracing::info!(
        path = %path.display(),
        points = track.len(),
        distance_m = track.stats.total_distance,
        net_elevation_m = track.stats.net_elevation,
        duration = %track.stats.duration,
        "loaded track"
    );
    Ok(track)
}

/// Parse GPX content into points, in document order. Timestamps are converted
/// from UTC into `offset`.
pub fn parse_gpx_str(content: &str, offset: FixedOffset) -> Result<Vec<TrackPoint>, GpxError> {
    let gpx: Gpx = from_str(content)?;

    let mut points = Vec::new();
    for trk in gpx.trk {
        for seg in trk.trkseg {
            for pt in seg.trkpt {
                points.push(TrackPoint {
                    lat: pt.lat,
                    lon: pt.lon,
                    ele: pt.ele,
                    time: parse_timestamp(&pt.time, offset)?,
                    speed: pt.extensions.speed,
                    course: pt.extensions.course,
                    h_acc: pt.extensions.h_acc,
                    v_acc: pt.extensions.v_acc,
                    heart_rate: None,
                });
            }
        }
    }

    Ok(points)
}

fn parse_timestamp(raw: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>, GpxError> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| GpxError::InvalidTimestamp(raw.to_string()))?;
    Ok(Utc.from_utc_datetime(&naive).with_timezone(&offset))
}

// GPX XML structures

#[derive(Debug, Deserialize)]
#[serde(rename = "gpx")]
struct Gpx {
    #[serde(rename = "trk", default)]
    trk: Vec<Trk>,
}

#[derive(Debug, Deserialize)]
struct Trk {
    #[serde(rename = "trkseg", default)]
    trkseg: Vec<TrkSeg>,
}

#[derive(Debug, Deserialize)]
struct TrkSeg {
    #[serde(rename = "trkpt", default)]
    trkpt: Vec<TrkPt>,
}

#[derive(Debug, Deserialize)]
struct TrkPt {
    #[serde(rename = "@lat")]
    lat: f64,
    #[serde(rename = "@lon")]
    lon: f64,
    ele: f64,
    time: String,
    extensions: Extensions,
}

#[derive(Debug, Deserialize)]
struct Extensions {
    speed: f64,
    course: f64,
    #[serde(rename = "hAcc")]
    h_acc: f64,
    #[serde(rename = "vAcc")]
    v_acc: f64,
}
