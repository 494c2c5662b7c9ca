//! Rendering tests for the Placeholder Gallery view
//!
//! Checks the centered empty-state composition, the capability-driven
//! action styling, and the action press badge.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Modifier;
use ratatui::{Terminal, backend::TestBackend};

use trellis_ui::app::App;
use trellis_ui::ui::caps::HostCaps;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

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

/// App switched to the gallery view
fn gallery_app(caps: HostCaps) -> App {
    let mut app = App::with_caps(caps);
    press(&mut app, KeyCode::Tab);
    app
}

#[test]
fn test_first_preset_composition_order() {
    let mut app = gallery_app(HostCaps::full());
    let rows = draw(&mut app);

    assert!(contains(&rows, "Placeholder Gallery (empty folder)"));

    let icon = rows.iter().position(|r| r.contains("▣")).unwrap();
    let label = rows.iter().position(|r| r.contains("No Canvases")).unwrap();
    let description = rows
        .iter()
        .position(|r| r.contains("This folder does not contain any canvases yet."))
        .unwrap();
    let actions = rows.iter().position(|r| r.contains("New Canvas")).unwrap();

    assert!(icon < label);
    assert!(label < description);
    assert!(description < actions);
    assert!(contains(&rows, "Import…"));
}

#[test]
fn test_absent_description_reserves_no_space() {
    let mut app = gallery_app(HostCaps::full());

    // preset 1 has a description below the label
    press(&mut app, KeyCode::Char('j'));
    let rows = draw(&mut app);
    assert!(rows[13].contains("No Results"));
    assert!(rows[14].contains("No items match the current filter."));

    // preset 2 is a lone label, centered one row lower
    press(&mut app, KeyCode::Char('j'));
    let rows = draw(&mut app);
    assert!(rows[14].contains("Nothing Selected"));
    assert!(!contains(&rows, "No items match"));
}

#[test]
fn test_action_row_styles_follow_capabilities() {
    let mut app = gallery_app(HostCaps::plain());
    let rows = draw(&mut app);
    assert!(contains(&rows, "[New Canvas]  [Import…]"));
    // plain charset swaps the folder glyph for its ASCII fallback
    assert!(contains(&rows, "+"));
    assert!(!contains(&rows, "▣"));

    let mut app = gallery_app(HostCaps::full());
    let rows = draw(&mut app);
    assert!(!contains(&rows, "[New Canvas]"));
    assert!(contains(&rows, " New Canvas "));
}

#[test]
fn test_accessory_actions_render_reversed() {
    let mut app = gallery_app(HostCaps::full());
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();

    // the centered action row lands on row 16; the first reversed cell
    // is the leading pad of the " New Canvas " pill
    let pill = (0..WIDTH)
        .find(|&x| buffer[(x, 16)].modifier.contains(Modifier::REVERSED))
        .unwrap();
    assert_eq!(buffer[(pill, 16)].symbol(), " ");
    assert_eq!(buffer[(pill + 1, 16)].symbol(), "N");
    assert!(buffer[(pill + 1, 16)].modifier.contains(Modifier::REVERSED));
}

#[test]
fn test_digit_press_surfaces_action_badge() {
    let mut app = gallery_app(HostCaps::full());

    press(&mut app, KeyCode::Char('1'));
    let rows = draw(&mut app);
    assert!(rows[HEIGHT as usize - 1].contains("pressed New Canvas"));

    // a digit past the action row clears the badge and presses nothing
    press(&mut app, KeyCode::Char('9'));
    let rows = draw(&mut app);
    assert!(!contains(&rows, "pressed"));
}

#[test]
fn test_preset_cycle_wraps_through_all_titles() {
    let mut app = gallery_app(HostCaps::full());

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    let rows = draw(&mut app);
    assert!(contains(&rows, "Placeholder Gallery (no stencils)"));
    assert!(contains(&rows, "No Stencils"));
    assert!(contains(&rows, "Browse Library"));
    assert!(contains(&rows, "⬡"));

    press(&mut app, KeyCode::Char('j'));
    let rows = draw(&mut app);
    assert!(contains(&rows, "Placeholder Gallery (empty folder)"));
}
