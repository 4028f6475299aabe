//! Event handler for the TUI
//!
//! Routes events from the event thread into application state. Key events
//! go through the form, which answers with an action; everything the form
//! cannot see (submissions finishing, notification expiry) is applied here.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;
use super::form::FormAction;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::SubmissionFinished(result) => {
            app.finish_submission(result);
            Ok(())
        }
        Event::Mouse(_) => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits, whatever the form is doing
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.form.handle_key(key) {
        FormAction::Submit => app.begin_submission(),
        FormAction::Reset => app.form.reset(),
        FormAction::Quit => app.quit(),
        FormAction::None => {}
    }

    Ok(())
}
