// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::CommandResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub running: bool,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    StatusUpdated(String),
    HelpRequested,
    ExitRequested,
}

impl AppState {
    /// Folds a command result into the state and returns what the front end
    /// has to act on, in order.
    pub fn apply(&mut self, result: &CommandResult) -> Vec<AppEvent> {
        let mut events = vec![self.set_status(&result.feedback)];
        if result.show_help {
            events.push(AppEvent::HelpRequested);
        }
        if result.exit {
            self.running = false;
            events.push(AppEvent::ExitRequested);
        }
        events
    }

    /// Records a failed command; the state otherwise stays as it was.
    pub fn apply_error(&mut self, message: &str) -> Vec<AppEvent> {
        vec![self.set_status(message)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
