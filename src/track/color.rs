//! Segment coloring by speed band.

/// Which metric drives segment colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Speed,
    /// Heart-rate coloring. No recording carries heart rate yet, so every
    /// segment gets the neutral placeholder.
    HeartRate,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Speed => Self::HeartRate,
            Self::HeartRate => Self::Speed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Speed => "Speed Mode",
            Self::HeartRate => "Heart Rate Mode",
        }
    }
}

/// Segment colors, slowest band first. `Gray` is the heart-rate placeholder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SegmentColor {
    Blue,
    Cyan,
    LightGreen,
    Orange,
    Red,
    Gray,
}

/// Upper bounds (exclusive, m/s) of the first four speed bands; anything at or
/// above the last bound is `Red`.
pub const SPEED_BANDS: [(f64, SegmentColor); 4] = [
    (1.5, SegmentColor::Blue),
    (3.0, SegmentColor::Cyan),
    (5.5, SegmentColor::LightGreen),
    (7.0, SegmentColor::Orange),
];

pub fn classify(speed: f64, mode: ColorMode) -> SegmentColor {
    match mode {
        ColorMode::Speed => SPEED_BANDS
            .iter()
            .find(|(limit, _)| speed < *limit)
            .map(|(_, color)| *color)
            .unwrap_or(SegmentColor::Red),
        // TODO: band by heart-rate zones once recordings include hr and the user's age is known.
        ColorMode::HeartRate => SegmentColor::Gray,
    }
}
