use super::*;

fn type_keys(router: &mut Router, keys: &str) {
    for c in keys.chars() {
        router.handle(KeyToken::Char(c)).unwrap();
    }
}

#[test]
fn test_parses_key_names() {
    assert_eq!(KeyToken::parse("up"), Some(KeyToken::Up));
    assert_eq!(KeyToken::parse("ENTER"), Some(KeyToken::Enter));
    assert_eq!(KeyToken::parse("ctrl+c"), Some(KeyToken::CtrlC));
    assert_eq!(KeyToken::parse("del"), Some(KeyToken::Delete));
    assert_eq!(KeyToken::parse("7"), Some(KeyToken::Char('7')));
    assert_eq!(KeyToken::parse("+"), Some(KeyToken::Char('+')));
    assert_eq!(KeyToken::parse("C"), Some(KeyToken::Char('C')));
    assert_eq!(KeyToken::parse("pageup"), None);
    assert_eq!(KeyToken::parse(""), None);
}

#[test]
fn test_moves_the_cursor_without_touching_the_calculator() {
    let mut router = Router::new();
    assert_eq!(router.handle(KeyToken::Down), Ok(Dispatch::Moved));
    assert_eq!(router.handle(KeyToken::Right), Ok(Dispatch::Moved));
    assert_eq!(router.grid().selected(), (1, 1));
    assert_eq!(router.calculator().display(), "0");
}

#[test]
fn test_presses_the_selected_button_on_enter() {
    let mut router = Router::new();
    router.handle(KeyToken::Down).unwrap();
    router.handle(KeyToken::Right).unwrap();

    assert_eq!(
        router.handle(KeyToken::Enter),
        Ok(Dispatch::Pressed(ButtonKey::Digit('8')))
    );
    assert_eq!(router.calculator().display(), "8");
}

#[test]
fn test_computes_through_grid_navigation() {
    let mut router = Router::new();
    router.grid_mut().select_button(3, 1).unwrap();
    router.handle(KeyToken::Enter).unwrap();
    router.handle(KeyToken::Right).unwrap();
    router.handle(KeyToken::Right).unwrap();
    router.handle(KeyToken::Enter).unwrap();
    router.handle(KeyToken::Left).unwrap();
    router.handle(KeyToken::Enter).unwrap();
    router.handle(KeyToken::Down).unwrap();
    assert_eq!(router.grid().selected_button().key, ButtonKey::Equals);
    router.handle(KeyToken::Enter).unwrap();

    assert_eq!(router.calculator().display(), "5");
}

#[test]
fn test_dispatches_typed_shortcuts() {
    let mut router = Router::new();
    type_keys(&mut router, "3+4*5=");
    assert_eq!(router.calculator().display(), "35");

    type_keys(&mut router, "c");
    assert_eq!(router.calculator().display(), "0");

    type_keys(&mut router, "6x7=");
    assert_eq!(router.calculator().display(), "42");
}

#[test]
fn test_moves_focus_to_typed_buttons_when_tracking() {
    let mut router = Router::new().with_focus_tracking(true);
    type_keys(&mut router, "5");
    assert_eq!(router.grid().selected(), (2, 1));

    router.handle(KeyToken::Backspace).unwrap();
    assert_eq!(router.grid().selected(), (0, 2));
}

#[test]
fn test_leaves_focus_alone_by_default() {
    let mut router = Router::new();
    type_keys(&mut router, "1+2");
    assert_eq!(router.grid().selected(), (0, 0));
    assert_eq!(router.calculator().display(), "2");

    // Enter presses the focused button (C), not the last typed key.
    assert_eq!(
        router.handle(KeyToken::Enter),
        Ok(Dispatch::Pressed(ButtonKey::Clear))
    );
    assert_eq!(router.calculator().display(), "0");
    assert_eq!(router.calculator().operation(), None);
}

#[test]
fn test_clears_the_entry_on_delete() {
    let mut router = Router::new();
    type_keys(&mut router, "5+3");
    assert_eq!(
        router.handle(KeyToken::Delete),
        Ok(Dispatch::Pressed(ButtonKey::ClearEntry))
    );
    type_keys(&mut router, "4=");
    assert_eq!(router.calculator().display(), "9");
}

#[test]
fn test_surfaces_division_by_zero_without_losing_the_session() {
    let mut router = Router::new();
    type_keys(&mut router, "8/0");
    assert_eq!(
        router.handle(KeyToken::Char('=')),
        Err(CalcError::DivisionByZero)
    );
    assert_eq!(router.calculator().display(), "0");

    type_keys(&mut router, "2=");
    assert_eq!(router.calculator().display(), "4");
}

#[test]
fn test_signals_quit() {
    let mut router = Router::new();
    assert_eq!(router.handle(KeyToken::Char('q')), Ok(Dispatch::Quit));
    assert_eq!(router.handle(KeyToken::Esc), Ok(Dispatch::Quit));
    assert_eq!(router.handle(KeyToken::CtrlC), Ok(Dispatch::Quit));
}

#[test]
fn test_ignores_unknown_keys() {
    let mut router = Router::new();
    type_keys(&mut router, "12");
    assert_eq!(router.handle(KeyToken::Char('%')), Ok(Dispatch::Ignored));
    assert_eq!(router.handle(KeyToken::Char('z')), Ok(Dispatch::Ignored));
    assert_eq!(router.calculator().display(), "12");
    assert_eq!(router.grid().selected(), (0, 0));
}
