//! Rendering tests for the Help panel
//!
//! Uses insta + ratatui TestBackend.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use trellis_ui::app::App;
use trellis_ui::ui::caps::HostCaps;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 40;

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
fn test_help_panel_lists_all_sections() {
    let mut app = App::with_caps(HostCaps::full());
    press(&mut app, KeyCode::Char('?'));
    let rows = draw(&mut app);

    assert_snapshot!(
        rows[0],
        @"┌─────────────────────────────── Trellis - Help ───────────────────────────────┐"
    );
    assert!(contains(&rows, "Global:"));
    assert!(contains(&rows, "Cell Workbench:"));
    assert!(contains(&rows, "Rename Session:"));
    assert!(contains(&rows, "Placeholder Gallery:"));
    assert!(contains(&rows, "Toggle unicode/ascii symbols"));
    assert!(contains(&rows, "Cycle row height (20/22/24/26)"));
}

#[test]
fn test_help_panel_fills_the_whole_screen() {
    let mut app = App::with_caps(HostCaps::full());
    press(&mut app, KeyCode::Char('?'));
    let rows = draw(&mut app);

    // no status bar: the bottom row is the panel's own border
    let bottom = rows.last().unwrap();
    assert!(bottom.starts_with('└'));
    assert!(!bottom.contains("Quit"));
}

#[test]
fn test_help_scrolls_with_navigation_keys() {
    let mut app = App::with_caps(HostCaps::full());
    press(&mut app, KeyCode::Char('?'));
    let rows = draw(&mut app);
    assert!(contains(&rows, "Key bindings:"));

    press(&mut app, KeyCode::Char('j'));
    let rows = draw(&mut app);
    assert!(!contains(&rows, "Key bindings:"));
    assert!(contains(&rows, "Global:"));

    // scrolling back up restores the heading
    press(&mut app, KeyCode::Char('k'));
    let rows = draw(&mut app);
    assert!(contains(&rows, "Key bindings:"));
}
