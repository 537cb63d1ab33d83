use ratatui::layout::Rect;

use crate::app::PixelRect;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Maps between terminal cells in `area` and the virtual pixel canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(area: Rect, width: f64, height: f64) -> Self {
        Self {
            area,
            width,
            height,
        }
    }

    /// Largest cell rectangle inside `area` whose on-screen shape matches the
    /// `width` x `height` canvas, centered in `area`.
    pub fn fit(area: Rect, width: f64, height: f64) -> Self {
        Self::new(letterbox(area, width, height), width, height)
    }

    fn px_per_col(&self) -> f64 {
        self.width / f64::from(self.area.width)
    }

    fn px_per_row(&self) -> f64 {
        self.height / f64::from(self.area.height)
    }

    /// Pixel position of the center of a terminal cell, or `None` outside the area.
    pub fn to_pixel(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return None;
        }
        if column < a.x || column >= a.right() || row < a.y || row >= a.bottom() {
            return None;
        }
        let x = (f64::from(column - a.x) + 0.5) * self.px_per_col();
        let y = (f64::from(row - a.y) + 0.5) * self.px_per_row();
        Some((x, y))
    }

    /// Distance from a cell center to its corners, in pixels. Any pixel is at
    /// most this far from the center of the cell that contains it.
    pub fn cell_reach(&self) -> f64 {
        if self.area.width == 0 || self.area.height == 0 {
            return 0.0;
        }
        0.5 * self.px_per_col().hypot(self.px_per_row())
    }

    /// Smallest cell rectangle covering `rect`, clipped to the area.
    pub fn to_cells(&self, rect: PixelRect) -> Rect {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return Rect::new(a.x, a.y, 0, 0);
        }
        // `as u16` saturates, so negative pixels land on the first cell.
        let c0 = (rect.x / self.px_per_col()).floor() as u16;
        let c1 = ((rect.x + rect.width) / self.px_per_col()).ceil() as u16;
        let r0 = (rect.y / self.px_per_row()).floor() as u16;
        let r1 = ((rect.y + rect.height) / self.px_per_row()).ceil() as u16;

        let c0 = c0.min(a.width);
        let r0 = r0.min(a.height);
        let c1 = c1.clamp(c0, a.width);
        let r1 = r1.clamp(r0, a.height);
        Rect::new(a.x + c0, a.y + r0, c1 - c0, r1 - r0)
    }

    /// Cell rectangle for a panel drawn over `rect`, grown leftward and downward
    /// to at least `min_cols` x `min_rows` so its text fits, then kept inside the area.
    pub fn overlay(&self, rect: PixelRect, min_cols: u16, min_rows: u16) -> Rect {
        let cells = self.to_cells(rect);
        let width = cells.width.max(min_cols);
        let height = cells.height.max(min_rows);
        let x = cells.right().saturating_sub(width);
        Rect::new(x, cells.y, width, height).clamp(self.area)
    }

    /// Cell rectangle of `cols` x `rows` whose top-left cell holds pixel `(x, y)`,
    /// kept inside the area.
    pub fn anchored(&self, x: f64, y: f64, cols: u16, rows: u16) -> Rect {
        let origin = self.to_cells(PixelRect {
            x: x.max(0.0),
            y: y.max(0.0),
            width: 0.0,
            height: 0.0,
        });
        Rect::new(origin.x, origin.y, cols, rows).clamp(self.area)
    }
}

fn letterbox(area: Rect, width: f64, height: f64) -> Rect {
    if area.width == 0 || area.height == 0 || width <= 0.0 || height <= 0.0 {
        return area;
    }
    let cols_per_row = width / height * CELL_ASPECT;
    let full_height_cols = f64::from(area.height) * cols_per_row;
    let (cols, rows) = if full_height_cols <= f64::from(area.width) {
        (full_height_cols.round() as u16, area.height)
    } else {
        (area.width, (f64::from(area.width) / cols_per_row).round() as u16)
    };
    let cols = cols.clamp(1, area.width);
    let rows = rows.clamp(1, area.height);
    Rect::new(
        area.x + (area.width - cols) / 2,
        area.y + (area.height - rows) / 2,
        cols,
        rows,
    )
}
