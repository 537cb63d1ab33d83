//! UI rendering helpers for the terminal user interface.
//!
//! The track is drawn on a ratatui `Canvas` whose bounds are the virtual pixel
//! canvas; panels are overlaid on the cells that cover their pixel rectangles.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, Borders, Clear, Padding, Paragraph, Wrap,
        canvas::{Canvas, Circle, Line as CanvasLine},
    },
};

use crate::app::App;
use crate::track::{ColorMode, SegmentColor};

mod viewport;

pub use viewport::Viewport;


const CONTROLS: [(&str, &str); 3] = [
    ("mouse", "hover a point"),
    ("click button/m", "toggle speed/heart rate"),
    ("q/esc", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Terminal color for a segment band.
pub fn segment_color(color: SegmentColor) -> Color {
    match color {
        SegmentColor::Blue => Color::Blue,
        SegmentColor::Cyan => Color::Cyan,
        SegmentColor::LightGreen => Color::LightGreen,
        SegmentColor::Orange => Color::Rgb(255, 165, 0),
        SegmentColor::Red => Color::Red,
        SegmentColor::Gray => Color::Gray,
    }
}

/// Where the last frame put the parts of the screen that take mouse input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenLayout {
    pub viewport: Viewport,
    /// Cells the mode button was drawn on.
    pub mode_button: Rect,
}

fn widest(lines: &[String]) -> u16 {
    lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .try_into()
        .unwrap_or(u16::MAX)
}

/// Render the whole screen and return where the canvas and the mode button
/// landed, so mouse positions can be mapped back onto them.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" trackview: {} ", app.source.display()))
        .title_alignment(Alignment::Center);
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let (width, height) = (app.canvas.width, app.canvas.height);
    let viewport = Viewport::fit(inner, width, height);

    // Canvas y grows upward; plot points grow downward.
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for (a, b, color) in app.segments() {
                ctx.draw(&CanvasLine::new(
                    a.x,
                    height - a.y,
                    b.x,
                    height - b.y,
                    segment_color(color),
                ));
            }
            if let Some((p, _)) = app.selected_point() {
                ctx.draw(&Circle {
                    x: p.x,
                    y: height - p.y,
                    radius: 4.0,
                    color: Color::Gray,
                });
            }
        });
    frame.render_widget(canvas, viewport.area);

    draw_tooltip(frame, app, &viewport);
    let summary = draw_summary(frame, app, &viewport);
    let mode_button = draw_mode_button(frame, app, &viewport, summary);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[1]);

    ScreenLayout {
        viewport,
        mode_button,
    }
}

fn draw_summary(frame: &mut Frame, app: &App, viewport: &Viewport) -> Rect {
    let lines = app.summary_lines();
    // Borders plus one column of padding on each side.
    let area = viewport.overlay(app.summary_rect(), widest(&lines) + 4, lines.len() as u16 + 2);
    frame.render_widget(Clear, area);

    let summary = Paragraph::new(lines.iter().map(|l| Line::from(l.as_str())).collect::<Vec<_>>())
        .block(
            Block::bordered()
                .title(" SUMMARY ")
                .title_alignment(Alignment::Center)
                .padding(Padding {
                    left: 1,
                    right: 1,
                    top: 0,
                    bottom: 0,
                }),
        );
    frame.render_widget(summary, area);
    area
}

fn draw_mode_button(frame: &mut Frame, app: &App, viewport: &Viewport, summary: Rect) -> Rect {
    let label = app.mode.label();
    let mut area = viewport.overlay(app.button_rect(), label.chars().count() as u16 + 2, 1);
    // On short terminals the grown summary can reach down over the button.
    if area.y < summary.bottom() {
        area.y = summary.bottom();
        area = area.clamp(viewport.area);
    }
    frame.render_widget(Clear, area);

    let style = match app.mode {
        ColorMode::Speed => Style::default().bg(Color::DarkGray).fg(Color::White),
        ColorMode::HeartRate => Style::default().bg(Color::Gray).fg(Color::Black),
    };

    // Center the label vertically inside the button.
    let mut text: Vec<Line> = vec![Line::from(""); usize::from(area.height.saturating_sub(1) / 2)];
    text.push(Line::from(label).style(style.add_modifier(Modifier::BOLD)));

    let button = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(button, area);
    area
}

fn draw_tooltip(frame: &mut Frame, app: &App, viewport: &Viewport) {
    let (Some((p, _)), Some(lines)) = (app.selected_point(), app.tooltip_lines()) else {
        return;
    };

    let area = viewport.anchored(p.x + 10.0, p.y - 40.0, widest(&lines) + 4, lines.len() as u16 + 2);
    frame.render_widget(Clear, area);

    let tooltip = Paragraph::new(lines.iter().map(|l| Line::from(l.as_str())).collect::<Vec<_>>())
        .style(Style::default().bg(Color::Gray).fg(Color::Black))
        .block(Block::bordered().padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        }));
    frame.render_widget(tooltip, area);
}
