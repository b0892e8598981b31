// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, bail};
use std::process::{Command, Stdio};
use tracing::{info, warn};
use url::Url;

pub const MESSAGE_FAILURE: &str =
    "Failed to open help page. Please open LinkMeIn's user guide in your browser at";

pub trait HelpDisplay {
    fn open(&mut self, url: &Url) -> Result<()>;
}

/// Opens the user guide with an external program.
#[derive(Debug, Clone, Default)]
pub struct BrowserHelp {
    opener: Option<String>,
}

impl BrowserHelp {
    pub fn new(opener: Option<&str>) -> Self {
        Self {
            opener: opener.map(str::to_owned),
        }
    }

    fn command(&self, url: &Url) -> Command {
        match &self.opener {
            Some(program) => {
                let mut command = Command::new(program);
                command.arg(url.as_str());
                command
            }
            None => platform_command(url),
        }
    }
}

impl HelpDisplay for BrowserHelp {
    fn open(&mut self, url: &Url) -> Result<()> {
        let mut command = self.command(url);
        let program = command.get_program().to_string_lossy().into_owned();
        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .with_context(|| format!("launch {program}"))?;
        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}

#[cfg(target_os = "macos")]
fn platform_command(url: &Url) -> Command {
    let mut command = Command::new("open");
    command.arg(url.as_str());
    command
}

#[cfg(windows)]
fn platform_command(url: &Url) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(url.as_str());
    command
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_command(url: &Url) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url.as_str());
    command
}

pub fn fallback_message(url: &Url) -> String {
    format!("{MESSAGE_FAILURE} {url}")
}

/// Opens the guide, returning the text to show instead when that fails.
pub fn show_help(display: &mut impl HelpDisplay, url: &Url) -> Option<String> {
    match display.open(url) {
        Ok(()) => {
            info!(%url, "opened user guide");
            None
        }
        Err(error) => {
            warn!(%url, error = %format!("{error:#}"), "could not open user guide");
            Some(fallback_message(url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BrowserHelp, HelpDisplay, MESSAGE_FAILURE, fallback_message, show_help};
    use anyhow::{Result, bail};
    use url::Url;

    fn guide() -> Url {
        Url::parse("https://example.com/UserGuide.html").expect("valid URL")
    }

    struct Failing;

    impl HelpDisplay for Failing {
        fn open(&mut self, _url: &Url) -> Result<()> {
            bail!("no display")
        }
    }

    #[test]
    fn fallback_message_names_the_url() {
        assert_eq!(
            fallback_message(&guide()),
            format!("{MESSAGE_FAILURE} https://example.com/UserGuide.html")
        );
    }

    #[test]
    fn failing_display_yields_fallback() {
        let message = show_help(&mut Failing, &guide());
        assert_eq!(message, Some(fallback_message(&guide())));
    }

    #[test]
    fn missing_opener_program_yields_fallback() {
        let mut display = BrowserHelp::new(Some("linkmein-no-such-opener"));
        let message = show_help(&mut display, &guide());
        assert_eq!(message, Some(fallback_message(&guide())));
    }

    #[test]
    fn launch_error_names_the_program() {
        let mut display = BrowserHelp::new(Some("linkmein-no-such-opener"));
        let error = display.open(&guide()).expect_err("missing program should fail");
        assert!(error.to_string().contains("linkmein-no-such-opener"));
    }

    #[cfg(unix)]
    #[test]
    fn successful_opener_yields_no_message() {
        let mut display = BrowserHelp::new(Some("true"));
        assert_eq!(show_help(&mut display, &guide()), None);
    }

    #[cfg(unix)]
    #[test]
    fn opener_exit_failure_yields_fallback() {
        let mut display = BrowserHelp::new(Some("false"));
        assert!(show_help(&mut display, &guide()).is_some());
    }
}
