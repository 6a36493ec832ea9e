use ratatui::backend::TestBackend;
use tally_core::KeyToken;

use super::*;
use crate::domain::models::Event;

fn render_to_string(app_state: &AppState) -> String {
    let backend = TestBackend::new(40, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app_state)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        text.push('\n');
    }
    return text;
}

fn type_keys(app_state: &mut AppState, keys: &str) {
    for c in keys.chars() {
        app_state.handle_event(Event::Key(KeyToken::Char(c)));
    }
}

#[test]
fn it_renders_the_grouped_display() {
    let mut app_state = AppState::new(AppStateProps::default());
    type_keys(&mut app_state, "1234567");

    let text = render_to_string(&app_state);
    assert!(text.contains("1,234,567"));
    assert!(!text.contains("1234567"));
}

#[test]
fn it_renders_every_button_label() {
    let app_state = AppState::new(AppStateProps::default());
    let text = render_to_string(&app_state);

    assert!(text.contains("Terminal Calculator"));
    for row in app_state.router.grid().rows() {
        for button in row {
            assert!(text.contains(&button.label), "missing {}", button.label);
        }
    }
}

#[test]
fn it_renders_the_pending_operation() {
    let mut app_state = AppState::new(AppStateProps::default());
    type_keys(&mut app_state, "12*");

    let text = render_to_string(&app_state);
    assert!(text.contains("12 ×"));
}

#[test]
fn it_renders_errors_in_place_of_the_help_line() {
    let mut app_state = AppState::new(AppStateProps::default());
    assert!(render_to_string(&app_state).contains("q quit"));

    type_keys(&mut app_state, "1/0=");
    let text = render_to_string(&app_state);
    assert!(text.contains("Cannot divide by zero"));
    assert!(!text.contains("q quit"));
}

#[test]
fn it_highlights_the_selected_button() {
    let mut app_state = AppState::new(AppStateProps { track_focus: true });
    type_keys(&mut app_state, "7");

    let backend = TestBackend::new(40, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, &app_state)).unwrap();
    let buf = terminal.backend().buffer().clone();

    let mut highlighted = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            let cell = &buf[(x, y)];
            if cell.modifier.contains(Modifier::REVERSED) {
                highlighted.push_str(cell.symbol());
            }
        }
    }
    assert_eq!(highlighted.trim(), "7");
}

#[test]
fn it_fits_small_terminals_without_panicking() {
    let app_state = AppState::new(AppStateProps::default());
    let backend = TestBackend::new(10, 5);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, &app_state)).unwrap();
}
