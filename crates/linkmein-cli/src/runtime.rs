// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use linkmein_app::{AppEvent, AppState, Command, HELP_TEXT, Model, ModelManager, parse_command};
use std::io::{BufRead, Write};
use tracing::debug;
use url::Url;

use crate::help::{HelpDisplay, show_help};

/// Line-oriented front end over a [`ModelManager`].
pub struct Shell<H> {
    model: ModelManager,
    state: AppState,
    help: H,
    guide_url: Url,
    prompt: String,
}

impl<H: HelpDisplay> Shell<H> {
    pub fn new(model: ModelManager, help: H, guide_url: Url, prompt: &str) -> Self {
        Self {
            model,
            state: AppState::default(),
            help,
            guide_url,
            prompt: prompt.to_owned(),
        }
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reads commands until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        self.print_displayed(output)?;
        let mut line = String::new();
        while self.state.running {
            write!(output, "{}", self.prompt).context("write prompt")?;
            output.flush().context("flush prompt")?;

            line.clear();
            let read = input.read_line(&mut line).context("read command")?;
            if read == 0 {
                debug!("end of input");
                writeln!(output).context("write newline")?;
                break;
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.handle_line(trimmed, output)?;
        }
        Ok(())
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<()> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(error) => {
                debug!(%error, "rejected input");
                let events = self.state.apply_error(&error.to_string());
                return self.emit(events, output);
            }
        };

        let displayed_before = self.model.filtered_companies().to_vec();
        match command.execute(&mut self.model) {
            Ok(result) => {
                let events = self.state.apply(&result);
                self.emit(events, output)?;
                // Indices typed next resolve against whatever is displayed now.
                if matches!(command, Command::List | Command::Find(_))
                    || self.model.filtered_companies() != displayed_before.as_slice()
                {
                    self.print_displayed(output)?;
                }
                Ok(())
            }
            Err(error) => {
                debug!(command = command.word(), %error, "command failed");
                let events = self.state.apply_error(&error.to_string());
                self.emit(events, output)
            }
        }
    }

    fn emit<W: Write>(&mut self, events: Vec<AppEvent>, output: &mut W) -> Result<()> {
        for event in events {
            match event {
                AppEvent::StatusUpdated(message) => {
                    writeln!(output, "{message}").context("write feedback")?;
                }
                AppEvent::HelpRequested => {
                    writeln!(output, "{HELP_TEXT}").context("write help")?;
                    if let Some(message) = show_help(&mut self.help, &self.guide_url) {
                        writeln!(output, "{message}").context("write help fallback")?;
                    }
                }
                AppEvent::ExitRequested => {
                    debug!("exit requested");
                }
            }
        }
        Ok(())
    }

    fn print_displayed<W: Write>(&self, output: &mut W) -> Result<()> {
        for (position, company) in self.model.filtered_companies().iter().enumerate() {
            writeln!(output, "{}. {company}", position + 1).context("write company list")?;
        }
        Ok(())
    }
}
