//! Application state for the TUI
//!
//! The App struct owns the form, the toast queue and the in-flight
//! submission flag. Submissions run on a tokio runtime handle and report
//! back through the event channel, so the draw loop never blocks on the
//! network.

use std::sync::mpsc;

use log::debug;

use crate::config::Settings;
use crate::submit::Submitter;

use super::event::Event;
use super::form::EntryFormState;
use super::widgets::notification::{Notification, NotificationQueue};

/// Application state
pub struct App {
    /// The entry form
    pub form: EntryFormState,

    /// Toast notifications
    pub notifications: NotificationQueue,

    /// A submission is in flight; the form stays editable but further
    /// submits are ignored until it completes
    pub submitting: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Sends the encoded entry to the configured endpoint
    submitter: Submitter,

    /// Handle for spawning submission tasks
    runtime: tokio::runtime::Handle,

    /// Channel back into the event loop
    events_tx: mpsc::Sender<Event>,
}

impl App {
    /// Create the application state
    pub fn new(
        settings: &Settings,
        runtime: tokio::runtime::Handle,
        events_tx: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            form: EntryFormState::new(),
            notifications: NotificationQueue::new(),
            submitting: false,
            should_quit: false,
            submitter: Submitter::new(settings),
            runtime,
            events_tx,
        }
    }

    /// Signal the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Validate the draft and, when clean, send it off in the background.
    ///
    /// Does nothing while a submission is already in flight. Validation
    /// failures stay on the form; nothing is sent.
    pub fn begin_submission(&mut self) {
        if self.submitting {
            debug!("submission already in flight, ignoring submit");
            return;
        }
        if !self.form.validate() {
            return;
        }

        self.submitting = true;

        let submitter = self.submitter.clone();
        let draft = self.form.draft.clone();
        let events_tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = submitter.submit(&draft).await.map_err(|e| e.to_string());
            // The receiver only drops on shutdown
            let _ = events_tx.send(Event::SubmissionFinished(result));
        });
    }

    /// Apply the outcome of a finished submission.
    ///
    /// Success resets the form and shows a toast; failure keeps the draft
    /// exactly as typed so nothing is lost.
    pub fn finish_submission(&mut self, result: Result<(), String>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form.reset();
                self.notifications.push(Notification::success("Entry recorded"));
            }
            Err(message) => {
                self.notifications
                    .push(Notification::error(format!("Submission failed: {}", message)));
            }
        }
    }
}
