//! Whole-session aggregates computed in a single pass.

use std::fmt;

use super::model::TrackPoint;

/// Elapsed session time in whole seconds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionDuration(pub u64);

impl SessionDuration {
    pub fn as_secs(self) -> u64 {
        self.0
    }
}

/// `H:M:S` with no zero padding, e.g. `1:2:3`.
impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0;
        write!(f, "{}:{}:{}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

/// Aggregates over the whole track. All fields stay at zero for tracks with
/// fewer than two points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackStats {
    /// Sum of 3D point-to-point distances, meters.
    pub total_distance: f64,
    /// Sum of signed elevation deltas, meters.
    pub net_elevation: f64,
    /// Wall-clock time between the first and last sample.
    pub duration: SessionDuration,
    /// `total_distance / duration`, m/s; zero when the duration is zero.
    pub avg_speed: f64,
}

impl TrackStats {
    pub fn compute(points: &[TrackPoint]) -> Self {
        let mut stats = Self::default();
        if points.len() < 2 {
            return stats;
        }

        for pair in points.windows(2) {
            let (p1, p2) = (&pair[0], &pair[1]);
            stats.total_distance += p1.distance_to(p2);
            stats.net_elevation += p2.ele - p1.ele;
        }

        let first = &points[0];
        let last = &points[points.len() - 1];
        stats.duration = session_duration(first, last);

        let secs = stats.duration.as_secs();
        stats.avg_speed = if secs > 0 {
            stats.total_distance / secs as f64
        } else {
            0.0
        };

        stats
    }
}

/// Real instant subtraction; out-of-order endpoints clamp to zero.
fn session_duration(start: &TrackPoint, end: &TrackPoint) -> SessionDuration {
    let secs = end.time.signed_duration_since(start.time).num_seconds();
    SessionDuration(u64::try_from(secs).unwrap_or(0))
}
