//! Non-blocking command polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameCommand;

/// Wait up to `timeout` for one key press and map it to a command.
///
/// Returns `Ok(None)` when the timeout passes, or when the event was not a
/// bound key press. Key releases and terminal auto-repeat are ignored.
pub fn poll_command(timeout: Duration) -> Result<Option<GameCommand>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(command_for_event(event::read()?))
}

/// Map a raw terminal event to a command.
pub fn command_for_event(ev: Event) -> Option<GameCommand> {
    match ev {
        Event::Key(key) => command_for_key(key),
        _ => None,
    }
}

fn command_for_key(key: KeyEvent) -> Option<GameCommand> {
    match key.kind {
        KeyEventKind::Press => handle_key_event(key),
        KeyEventKind::Repeat | KeyEventKind::Release => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn press_maps_to_command() {
        assert_eq!(
            command_for_event(key(KeyCode::Left, KeyEventKind::Press)),
            Some(GameCommand::MoveLeft)
        );
    }

    #[test]
    fn release_and_repeat_are_ignored() {
        assert_eq!(command_for_event(key(KeyCode::Left, KeyEventKind::Release)), None);
        assert_eq!(command_for_event(key(KeyCode::Left, KeyEventKind::Repeat)), None);
    }

    #[test]
    fn non_key_events_are_ignored() {
        assert_eq!(command_for_event(Event::Resize(80, 24)), None);
        assert_eq!(command_for_event(Event::FocusGained), None);
    }
}
