//! Deadline-bounded polling of the terminal event queue.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{map_key_event, InputEvent};

/// Wait up to `timeout` for the next meaningful input event.
///
/// Returns `Ok(None)` when the deadline passes, or when the event that
/// arrived carries nothing for the game (key releases, repeats, unmapped
/// keys, mouse and focus events).
pub fn poll_input(timeout: Duration) -> Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let input = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key_event(key),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None,
    };
    Ok(input)
}
