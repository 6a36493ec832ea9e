//! Headless key replay
//!
//! Feeds key names through the same router the interactive UI uses, without a
//! terminal. Each argument is either a key name understood by
//! [`KeyToken::parse`] or a run of calculator characters such as `12+30=`.

use anyhow::bail;
use anyhow::Result;
use tally_core::{CalcError, Dispatch, KeyToken, Router};

#[cfg(test)]
#[path = "headless_test.rs"]
mod tests;

const COMPACT_KEYS: &str = "0123456789.+-*/xX=";

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub display: String,
    pub error: Option<CalcError>,
    pub quit: bool,
}

pub fn parse_keys(args: &[String]) -> Result<Vec<KeyToken>> {
    let mut tokens = vec![];
    for word in args.iter().flat_map(|arg| arg.split_whitespace()) {
        if let Some(token) = KeyToken::parse(word) {
            tokens.push(token);
            continue;
        }

        if !word.chars().all(|c| COMPACT_KEYS.contains(c)) {
            bail!("Unknown key '{word}'");
        }
        tokens.extend(word.chars().map(KeyToken::Char));
    }

    Ok(tokens)
}

/// Replays `tokens` and reports the formatted display. As in the interactive
/// UI, an error only survives until the next key.
pub fn replay(tokens: &[KeyToken], track_focus: bool) -> ReplayOutcome {
    let mut router = Router::new().with_focus_tracking(track_focus);
    let mut error = None;
    let mut quit = false;

    for token in tokens {
        match router.handle(*token) {
            Ok(Dispatch::Quit) => {
                quit = true;
                break;
            }
            Ok(_) => error = None,
            Err(err) => {
                log::warn!("{:?} failed: {}", token, err);
                error = Some(err);
            }
        }
    }

    ReplayOutcome {
        display: router.calculator().formatted_display(),
        error,
        quit,
    }
}
