use std::io;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tally_core::KeyToken;
use tokio::time;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

pub struct EventsService {
    crossterm_events: EventStream,
    tick_rate: Duration,
}

impl EventsService {
    pub fn new(tick_rate: Duration) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            tick_rate,
        };
    }

    pub fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Resize(width, height) => {
                return Some(Event::UIResize(width, height));
            }
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
                let token = match keyevent.code {
                    KeyCode::Char('c') if ctrl => KeyToken::CtrlC,
                    KeyCode::Char(_) if ctrl => return None,
                    KeyCode::Char(c) => KeyToken::Char(c),
                    KeyCode::Enter => KeyToken::Enter,
                    KeyCode::Left => KeyToken::Left,
                    KeyCode::Right => KeyToken::Right,
                    KeyCode::Up => KeyToken::Up,
                    KeyCode::Down => KeyToken::Down,
                    KeyCode::Backspace => KeyToken::Backspace,
                    KeyCode::Delete => KeyToken::Delete,
                    KeyCode::Esc => KeyToken::Esc,
                    _ => return None,
                };

                return Some(Event::Key(token));
            }
            _ => return None,
        }
    }

    /// Translates one item of the terminal event stream. The stream only ends
    /// when the terminal is gone, which is reported as an error.
    pub fn handle_stream_item(item: Option<io::Result<CrosstermEvent>>) -> Result<Option<Event>> {
        match item {
            Some(Ok(input)) => return Ok(EventsService::handle_crossterm(input)),
            Some(Err(err)) => {
                tracing::warn!(error = %err, "failed to read terminal event");
                return Ok(None);
            }
            None => bail!("terminal event stream closed"),
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                item = self.crossterm_events.next() => EventsService::handle_stream_item(item)?,
                _ = time::sleep(self.tick_rate) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
