//! Rendering tests for the Cell Workbench view
//!
//! Drives the full App with key events and checks the state panel, the
//! blueprint drawing, and the status bar against the solved geometry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use trellis_ui::app::App;
use trellis_ui::ui::caps::HostCaps;
use trellis_ui::ui::theme;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

/// Render the app once and return the buffer as one string per row
fn draw(app: &mut App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

#[test]
fn test_initial_panel_reports_solved_frames() {
    let mut app = App::with_caps(HostCaps::full());
    let rows = draw(&mut app);

    assert!(contains(&rows, "Trellis - Cell Workbench"));
    assert!(contains(&rows, " item      flow.canvas"));
    assert!(contains(&rows, " kind      canvas"));
    assert!(contains(&rows, " cell      w=300 h=22"));
    assert!(contains(&rows, " font      13"));
    assert!(contains(&rows, " strategy  right-aligned"));
    assert!(contains(&rows, " sym width 16"));
    // icon centered in the 22-wide column by its 16 alignment width
    assert!(contains(&rows, " icon      x=3 y=4 w=16 h=22"));
    // primary fills the gap up to the secondary, minus the 5 gap
    assert!(contains(&rows, " primary   x=24 y=3 w=222 h=25"));
    // zero stored width; x comes from the unbounded measurement
    assert!(contains(&rows, " secondary x=246 y=3 w=0 h=14"));
    assert!(contains(&rows, " editing   no"));
    assert!(contains(&rows, "Flowcharts (0 renames"));
}

#[test]
fn test_blueprint_draws_icon_glyph_per_charset() {
    let mut app = App::with_caps(HostCaps::full());

    // glyph cell: icon frame (3,4,16,22) centered -> (11,15) in cell
    // coordinates, plus the two nested block borders
    let rows = draw(&mut app);
    assert_eq!(rows[17].chars().nth(13), Some('◇'));

    press(&mut app, KeyCode::Char('c'));
    let rows = draw(&mut app);
    assert_eq!(rows[17].chars().nth(13), Some('*'));
}

#[test]
fn test_width_key_updates_cell_and_frames() {
    let mut app = App::with_caps(HostCaps::full());
    press(&mut app, KeyCode::Char('l'));
    let rows = draw(&mut app);

    assert!(contains(&rows, " cell      w=310 h=22"));
    assert!(contains(&rows, " primary   x=24 y=3 w=232 h=25"));
    assert!(contains(&rows, " secondary x=256 y=3 w=0 h=14"));
}

#[test]
fn test_height_key_changes_font() {
    let mut app = App::with_caps(HostCaps::full());
    press(&mut app, KeyCode::Char('k'));
    let rows = draw(&mut app);

    assert!(contains(&rows, " cell      w=300 h=20"));
    assert!(contains(&rows, " font      11"));
}

#[test]
fn test_alignment_key_switches_strategy() {
    let mut app = App::with_caps(HostCaps::full());
    press(&mut app, KeyCode::Char('a'));
    let rows = draw(&mut app);

    assert!(contains(&rows, " strategy  trailing"));
    // primary at its natural width, secondary filling to the right edge
    assert!(contains(&rows, " primary   x=24 y=2 w=77 h=25"));
    assert!(contains(&rows, " secondary x=103 y=2 w=197 h=25"));
}

#[test]
fn test_missing_icon_keeps_prior_geometry() {
    let mut app = App::with_caps(HostCaps::full());
    press(&mut app, KeyCode::Char('i'));
    press(&mut app, KeyCode::Char('l'));
    let rows = draw(&mut app);

    assert!(contains(&rows, " icon      missing"));
    // the layout pass was skipped: the cell grew, the frames did not
    assert!(contains(&rows, " cell      w=310 h=22"));
    assert!(contains(&rows, " primary   x=24 y=3 w=222 h=25"));
    assert!(contains(&rows, " secondary x=246 y=3 w=0 h=14"));
}

#[test]
fn test_rename_session_hints_and_commit_badge() {
    let mut app = App::with_caps(HostCaps::full());

    press(&mut app, KeyCode::Enter);
    let rows = draw(&mut app);
    assert!(contains(&rows, " editing   yes"));
    assert!(contains(&rows, "[Enter] Commit"));
    assert!(contains(&rows, "[Esc] Cancel"));

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);
    let rows = draw(&mut app);
    assert!(contains(&rows, " editing   no"));
    assert!(contains(&rows, "renamed flow.canvas ->"));
    assert!(contains(&rows, "(1 renames"));
}

#[test]
fn test_edit_session_paints_background_layer() {
    let mut app = App::with_caps(HostCaps::full());
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();

    // (30,10) sits inside the primary box interior in the blueprint
    terminal.draw(|frame| app.render(frame)).unwrap();
    assert_ne!(
        terminal.backend().buffer()[(30, 10)].bg,
        theme::cell::EDIT_BACKGROUND
    );

    press(&mut app, KeyCode::Enter);
    terminal.draw(|frame| app.render(frame)).unwrap();
    assert_eq!(
        terminal.backend().buffer()[(30, 10)].bg,
        theme::cell::EDIT_BACKGROUND
    );
}

#[test]
fn test_detached_workspace_shows_in_panel() {
    let mut app = App::with_caps(HostCaps::full());
    press(&mut app, KeyCode::Char('w'));
    let rows = draw(&mut app);
    assert!(contains(&rows, " doc       detached"));
}
