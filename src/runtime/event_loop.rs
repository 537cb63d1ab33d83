use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position};

use crate::app::App;
use crate::ui::{self, ScreenLayout};

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Where the canvas and the mode button landed on the last draw; mouse
    /// cells are hit-tested against it. `None` until the first frame is drawn.
    pub layout: Option<ScreenLayout>,
}

/// Main terminal event loop: draws the frame, then handles at most one input
/// event. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| state.layout = Some(ui::draw(f, app)))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, app) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, state.layout.as_ref()),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Returns true when the key requests shutdown.
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char('m') => {
            app.toggle_mode();
            false
        }
        _ => false,
    }
}

fn handle_mouse_event(mouse: MouseEvent, app: &mut App, layout: Option<&ScreenLayout>) {
    let Some(layout) = layout else {
        return;
    };

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let viewport = &layout.viewport;
            match viewport.to_pixel(mouse.column, mouse.row) {
                Some((x, y)) => app.hover(x, y, viewport.cell_reach()),
                None => app.clear_hover(),
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.mode_button.contains(Position::new(mouse.column, mouse.row)) {
                app.toggle_mode();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasSettings;
    use crate::track::{ColorMode, Track, TrackPoint, parse_gpx_str};
    use crate::ui::Viewport;
    use chrono::{FixedOffset, TimeZone};
    use ratatui::{backend::TestBackend, layout::Rect};
    use std::path::PathBuf;

    fn app() -> App {
        let time = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 14, 0, 0)
            .unwrap();
        let point = |lat: f64, lon: f64| TrackPoint {
            lat,
            lon,
            ele: 0.0,
            time,
            speed: 2.0,
            course: 0.0,
            h_acc: 0.0,
            v_acc: 0.0,
            heart_rate: None,
        };
        App::new(
            Track::new(vec![point(0.0, 0.0), point(1.0, 1.0)]),
            PathBuf::from("ride.gpx"),
            CanvasSettings::default(),
        )
    }

    // 8 px per column, 15 px per row; button drawn on columns 81..=97, rows 8..=9.
    fn layout() -> ScreenLayout {
        ScreenLayout {
            viewport: Viewport::new(Rect::new(0, 0, 100, 40), 800.0, 600.0),
            mode_button: Rect::new(81, 8, 17, 2),
        }
    }

    /// Lay the screen out the way a real frame of `cols` x `rows` would.
    fn drawn_layout(app: &App, cols: u16, rows: u16) -> ScreenLayout {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        let mut layout = None;
        terminal.draw(|f| layout = Some(ui::draw(f, app))).unwrap();
        layout.unwrap()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn mouse_move_hovers_point_under_cursor() {
        let mut app = app();
        let layout = layout();

        // First point projects to (20, 580): column 2 center is x=20, row 38 center is y=577.5.
        handle_mouse_event(mouse(MouseEventKind::Moved, 2, 38), &mut app, Some(&layout));
        assert_eq!(app.selected, Some(0));

        handle_mouse_event(mouse(MouseEventKind::Moved, 50, 20), &mut app, Some(&layout));
        assert_eq!(app.selected, None);
    }

    #[test]
    fn coarse_cells_still_reach_points_off_center() {
        let mut app = app();
        // 20 px per column, 40 px per row: (20, 580) sits 10 px from the center
        // of its cell, outside the 8 px hover radius.
        let layout = ScreenLayout {
            viewport: Viewport::new(Rect::new(0, 0, 40, 15), 800.0, 600.0),
            mode_button: Rect::default(),
        };

        handle_mouse_event(mouse(MouseEventKind::Moved, 1, 14), &mut app, Some(&layout));
        assert_eq!(app.selected, Some(0));
        handle_mouse_event(mouse(MouseEventKind::Moved, 29, 0), &mut app, Some(&layout));
        assert_eq!(app.selected, Some(1));
        handle_mouse_event(mouse(MouseEventKind::Moved, 20, 7), &mut app, Some(&layout));
        assert_eq!(app.selected, None);
    }

    #[test]
    fn every_sample_point_is_hoverable_on_a_small_terminal() {
        let points = parse_gpx_str(include_str!("../../test.gpx"), FixedOffset::east_opt(0).unwrap()).unwrap();
        let mut app = App::new(Track::new(points), PathBuf::from("test.gpx"), CanvasSettings::default());
        let layout = drawn_layout(&app, 60, 20);
        let vp = layout.viewport;

        for p in app.plot.clone() {
            let cell = vp.to_cells(crate::app::PixelRect {
                x: p.x,
                y: p.y,
                width: 0.0,
                height: 0.0,
            });
            handle_mouse_event(mouse(MouseEventKind::Moved, cell.x, cell.y), &mut app, Some(&layout));
            assert!(app.selected.is_some(), "no point under cell ({}, {})", cell.x, cell.y);
        }
    }

    #[test]
    fn mouse_outside_canvas_clears_hover() {
        let mut app = app();
        let layout = layout();
        app.hover(20.0, 580.0, 0.0);
        assert!(app.selected.is_some());

        handle_mouse_event(mouse(MouseEventKind::Moved, 120, 38), &mut app, Some(&layout));
        assert_eq!(app.selected, None);
    }

    #[test]
    fn left_click_on_button_toggles_mode() {
        let mut app = app();
        let layout = layout();

        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 90, 8), &mut app, Some(&layout));
        assert_eq!(app.mode, ColorMode::HeartRate);

        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 90, 8), &mut app, Some(&layout));
        assert_eq!(app.mode, ColorMode::HeartRate);

        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 30), &mut app, Some(&layout));
        assert_eq!(app.mode, ColorMode::HeartRate);

        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 80, 8), &mut app, Some(&layout));
        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 90, 10), &mut app, Some(&layout));
        assert_eq!(app.mode, ColorMode::HeartRate);
    }

    #[test]
    fn every_drawn_button_cell_toggles_on_a_narrow_terminal() {
        let mut app = app();
        let layout = drawn_layout(&app, 60, 20);
        let button = layout.mode_button;
        assert!(button.width >= "Speed Mode".len() as u16);
        assert!(layout.viewport.area.contains(button.as_position()));

        let mut expected = ColorMode::Speed;
        for pos in button.positions() {
            handle_mouse_event(
                mouse(MouseEventKind::Down(MouseButton::Left), pos.x, pos.y),
                &mut app,
                Some(&layout),
            );
            expected = expected.toggled();
            assert_eq!(app.mode, expected, "cell ({}, {}) did not toggle", pos.x, pos.y);
        }

        let left_of = button.x - 1;
        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), left_of, button.y), &mut app, Some(&layout));
        assert_eq!(app.mode, expected);
    }

    #[test]
    fn mouse_events_before_first_draw_are_ignored() {
        let mut app = app();
        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 90, 8), &mut app, None);
        assert_eq!(app.mode, ColorMode::Speed);
    }

    #[test]
    fn keys_toggle_mode_and_quit() {
        let mut app = app();
        assert!(!handle_key_event(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE), &mut app));
        assert_eq!(app.mode, ColorMode::HeartRate);

        assert!(!handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), &mut app));
        assert!(!handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE), &mut app));
        assert!(handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), &mut app));
        assert!(handle_key_event(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &mut app));
        assert!(handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app));
    }
}
