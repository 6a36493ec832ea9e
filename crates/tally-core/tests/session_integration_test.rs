use tally_core::{ButtonKey, CalcError, Dispatch, KeyToken, Router};

fn replay(router: &mut Router, script: &str) -> Vec<Result<Dispatch, CalcError>> {
    script
        .split_whitespace()
        .map(|name| {
            let token = KeyToken::parse(name).expect("known key name");
            router.handle(token)
        })
        .collect()
}

#[test]
fn test_adds_then_clears() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut router = Router::new();

    let results = replay(&mut router, "1 2 3 + 4 5 6 =");
    assert!(results.iter().all(|res| res.is_ok()));
    assert_eq!(router.calculator().display(), "579");

    replay(&mut router, "c");
    assert_eq!(router.calculator().display(), "0");
    assert_eq!(router.calculator().operation(), None);
}

#[test]
fn test_chains_operators_left_to_right() {
    let mut router = Router::new();
    replay(&mut router, "3 + 4 * 5 =");
    assert_eq!(router.calculator().display(), "35");
}

#[test]
fn test_mixes_navigation_and_typing() {
    let mut router = Router::new().with_focus_tracking(true);

    // 9 by hand, then × from the grid, then 9 again.
    replay(&mut router, "9 right enter 9");
    assert_eq!(router.calculator().pending_indicator(), Some("9 ×".to_string()));

    let results = replay(&mut router, "down down down");
    assert_eq!(results.last(), Some(&Ok(Dispatch::Moved)));
    assert_eq!(router.grid().selected_button().key, ButtonKey::Equals);

    replay(&mut router, "enter");
    assert_eq!(router.calculator().display(), "81");
}

#[test]
fn test_enter_presses_the_navigated_button_after_typing() {
    let mut router = Router::new();

    // Typing leaves focus on C; walk it to 7 and press it.
    replay(&mut router, "1 + 2 down enter =");
    assert_eq!(router.grid().selected_button().key, ButtonKey::Digit('7'));
    assert_eq!(router.calculator().display(), "28");
}

#[test]
fn test_groups_long_results_for_display() {
    let mut router = Router::new();
    replay(&mut router, "9 9 9 9 * 1 0 0 0 =");
    assert_eq!(router.calculator().display(), "9999000");
    assert_eq!(router.calculator().formatted_display(), "9,999,000");
}

#[test]
fn test_keeps_running_after_division_by_zero() {
    let mut router = Router::new();
    let results = replay(&mut router, "7 / 0 = 2 =");

    assert_eq!(results[3], Err(CalcError::DivisionByZero));
    assert_eq!(router.calculator().display(), "3.5");
    assert_eq!(results.last(), Some(&Ok(Dispatch::Pressed(ButtonKey::Equals))));
}

#[test]
fn test_stops_at_quit() {
    let mut router = Router::new();
    let results = replay(&mut router, "4 q");
    assert_eq!(results[1], Ok(Dispatch::Quit));
    assert_eq!(router.calculator().display(), "4");
}
