//! Application model types: `App` and `PixelRect`.
//!
//! `App` is owned by the event loop. Input handlers mutate it and the
//! renderer only reads it.

use std::path::PathBuf;

use crate::config::CanvasSettings;
use crate::track::{ColorMode, PlotPoint, SegmentColor, Track, TrackPoint, classify, plot_points};

/// Meters per mile, as shown in the summary panel.
pub const METERS_PER_MILE: f64 = 1609.0;
/// Feet per meter, for speed and elevation readouts.
pub const FEET_PER_METER: f64 = 3.28084;

/// An axis-aligned rectangle in canvas pixel space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The main application model.
pub struct App {
    pub track: Track,
    pub source: PathBuf,
    pub plot: Vec<PlotPoint>,
    pub mode: ColorMode,
    /// Index of the hovered point, if any.
    pub selected: Option<usize>,
    pub canvas: CanvasSettings,
}

impl App {
    /// Create a new `App` and project `track` into the configured canvas.
    pub fn new(track: Track, source: PathBuf, canvas: CanvasSettings) -> Self {
        let plot = plot_points(&track.points, canvas.width, canvas.height, canvas.margin);
        Self {
            track,
            source,
            plot,
            mode: ColorMode::Speed,
            selected: None,
            canvas,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        tracing::info!(mode = self.mode.label(), "color mode toggled");
    }

    /// Summary panel area, anchored to the top-right corner.
    pub fn summary_rect(&self) -> PixelRect {
        PixelRect {
            x: self.canvas.width - 150.0,
            y: 20.0,
            width: 130.0,
            height: 90.0,
        }
    }

    /// Mode toggle button, just below the summary panel.
    pub fn button_rect(&self) -> PixelRect {
        PixelRect {
            x: self.canvas.width - 150.0,
            y: 120.0,
            width: 130.0,
            height: 30.0,
        }
    }

    /// Update the hovered point from a cursor position in canvas pixels.
    ///
    /// `reach` is how far the real pointer may be from `(x, y)`, e.g. half a
    /// terminal cell. Points within the larger of `reach` and `hover_radius`
    /// are candidates.
    pub fn hover(&mut self, x: f64, y: f64, reach: f64) {
        self.selected = self.nearest_point(x, y, self.canvas.hover_radius.max(reach));
    }

    pub fn clear_hover(&mut self) {
        self.selected = None;
    }

    /// Closest projected point strictly within `radius` of `(x, y)`.
    pub fn nearest_point(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
        self.plot
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance_to(x, y)))
            .filter(|&(_, d)| d < radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// The hovered point together with its projected position.
    pub fn selected_point(&self) -> Option<(PlotPoint, &TrackPoint)> {
        let i = self.selected?;
        Some((*self.plot.get(i)?, self.track.points.get(i)?))
    }

    /// Segments `i -> i + 1`, each colored by point `i`.
    pub fn segments(&self) -> impl Iterator<Item = (PlotPoint, PlotPoint, SegmentColor)> + '_ {
        self.plot
            .windows(2)
            .zip(&self.track.points)
            .map(|(pair, point)| (pair[0], pair[1], classify(point.speed, self.mode)))
    }

    /// Summary lines: distance in miles, duration, average speed in ft/s and
    /// net elevation change in feet.
    pub fn summary_lines(&self) -> [String; 4] {
        let stats = &self.track.stats;
        [
            format!("Distance: {:.2} miles", stats.total_distance / METERS_PER_MILE),
            format!("Duration: {}", stats.duration),
            format!("Avg Speed: {:.2} ft/s", stats.avg_speed * FEET_PER_METER),
            format!("Net Elev: {:+.1} ft", stats.net_elevation * FEET_PER_METER),
        ]
    }

    /// Tooltip lines for the hovered point: speed and elevation first, then the
    /// raw sample details.
    pub fn tooltip_lines(&self) -> Option<Vec<String>> {
        let (_, point) = self.selected_point()?;
        let mut lines = vec![
            format!("Speed: {:.2} ft/s", point.speed * FEET_PER_METER),
            format!("Elev: {:.2} ft", point.ele * FEET_PER_METER),
        ];
        if let Some(hr) = point.heart_rate {
            lines.push(format!("HR: {hr} bpm"));
        }
        lines.push(format!("Course: {:.0}°", point.course));
        lines.push(format!("Acc: ±{:.1} m / ±{:.1} m", point.h_acc, point.v_acc));
        lines.push(format!("Time: {}", point.time.format("%H:%M:%S")));
        Some(lines)
    }
}
