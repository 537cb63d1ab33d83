//! Point and track model types.

use chrono::{DateTime, FixedOffset};

use crate::geo;

use super::stats::TrackStats;

/// One recorded GPS sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Elevation in meters.
    pub ele: f64,
    /// Sample instant, expressed in the configured fixed offset.
    pub time: DateTime<FixedOffset>,
    /// Instantaneous speed in m/s, as reported by the recorder.
    pub speed: f64,
    /// Heading in degrees.
    pub course: f64,
    /// Horizontal accuracy in meters.
    pub h_acc: f64,
    /// Vertical accuracy in meters.
    pub v_acc: f64,
    /// Heart rate in bpm. Current recordings never carry it, so the parser
    /// always leaves this `None`.
    pub heart_rate: Option<u16>,
}

impl TrackPoint {
    /// Distance in meters to `other`, counting both horizontal travel and the
    /// elevation change.
    pub fn distance_to(&self, other: &TrackPoint) -> f64 {
        geo::distance_3d(self.lat, self.lon, self.ele, other.lat, other.lon, other.ele)
    }
}

/// A single recorded session: points in recording order plus aggregates.
#[derive(Debug, Clone)]
pub struct Track {
    pub points: Vec<TrackPoint>,
    pub stats: TrackStats,
}

impl Track {
    /// Build a track and compute its aggregates once.
    pub fn new(points: Vec<TrackPoint>) -> Self {
        let stats = TrackStats::compute(&points);
        Self { points, stats }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
