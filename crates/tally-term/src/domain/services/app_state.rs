use tally_core::Dispatch;
use tally_core::Router;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    pub track_focus: bool,
}

impl Default for AppStateProps {
    fn default() -> AppStateProps {
        return AppStateProps { track_focus: false };
    }
}

pub struct AppState {
    pub router: Router,
    pub status: Option<String>,
    pub last_known_height: usize,
    pub last_known_width: usize,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            router: Router::new().with_focus_tracking(props.track_focus),
            status: None,
            last_known_height: 0,
            last_known_width: 0,
        };
    }

    /// Applies one event. Returns true when the session should end.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(token) => {
                self.status = None;
                match self.router.handle(token) {
                    Ok(Dispatch::Quit) => return true,
                    Ok(dispatch) => {
                        tracing::trace!(?token, ?dispatch, "key handled");
                    }
                    Err(err) => {
                        tracing::debug!(?token, error = %err, "key rejected");
                        self.status = Some(err.to_string());
                    }
                }
            }
            Event::UIResize(width, height) => {
                self.last_known_width = width.into();
                self.last_known_height = height.into();
            }
            Event::UITick => {}
        }

        return false;
    }
}
