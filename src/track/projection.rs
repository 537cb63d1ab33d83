//! Linear lat/lon to pixel projection.
//!
//! Not a map projection: longitude maps straight to x and latitude to y, with a
//! single scale factor so the track keeps its aspect ratio.

use super::model::TrackPoint;

/// Widens each coordinate range so constant-coordinate tracks don't divide by zero.
const RANGE_EPSILON: f64 = 1e-9;

/// A point in canvas pixel space; `y` grows downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

/// Project every point into a `width` x `height` canvas, leaving `margin` pixels
/// on each side. Output is index-aligned with `points`.
pub fn plot_points(points: &[TrackPoint], width: f64, height: f64, margin: f64) -> Vec<PlotPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_lat = min_lat.min(p.lat);
        max_lat = max_lat.max(p.lat);
        min_lon = min_lon.min(p.lon);
        max_lon = max_lon.max(p.lon);
    }

    let lat_range = max_lat - min_lat + RANGE_EPSILON;
    let lon_range = max_lon - min_lon + RANGE_EPSILON;

    let x_scale = (width - margin * 2.0) / lon_range;
    let y_scale = (height - margin * 2.0) / lat_range;
    let scale = x_scale.min(y_scale);

    points
        .iter()
        .map(|p| PlotPoint {
            x: margin + (p.lon - min_lon) * scale,
            y: height - (margin + (p.lat - min_lat) * scale),
        })
        .collect()
}
