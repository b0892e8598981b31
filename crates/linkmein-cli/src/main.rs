// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod help;
mod runtime;

use anyhow::{Context, Result, anyhow};
use config::Config;
use help::BrowserHelp;
use linkmein_app::{CompanyBook, ModelManager, sample_companies};
use runtime::Shell;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LINKMEIN_LOG";

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    match options.action {
        Action::ShowHelp => {
            print_help();
            return Ok(());
        }
        Action::PrintConfigPath => {
            println!("{}", options.config_path.display());
            return Ok(());
        }
        Action::PrintExampleConfig => {
            print!("{}", Config::example_config(&options.config_path));
            return Ok(());
        }
        Action::PrintUserGuideUrl | Action::Check | Action::Shell => {}
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `linkmein --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;
    let guide_url = config.user_guide_url()?;
    if options.action == Action::PrintUserGuideUrl {
        println!("{guide_url}");
        return Ok(());
    }
    init_logging(config.log_level())?;

    let book = if options.demo {
        let companies = sample_companies().context("build demo companies")?;
        CompanyBook::from_companies(companies).context("seed demo companies")?
    } else {
        CompanyBook::new()
    };
    if options.action == Action::Check {
        info!(companies = book.len(), "config and startup look good");
        return Ok(());
    }

    info!(companies = book.len(), demo = options.demo, "starting shell");
    let prompt = options.prompt.as_deref().unwrap_or(config.prompt());
    let mut shell = Shell::new(
        ModelManager::new(book),
        BrowserHelp::new(config.opener()),
        guide_url,
        prompt,
    );
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;
    debug!(
        companies = shell.model().book().len(),
        exited = !shell.state().running,
        "shell closed"
    );
    Ok(())
}

/// `LINKMEIN_LOG` wins over the configured level.
fn init_logging(config_level: &str) -> Result<()> {
    let filter = match env::var(LOG_ENV) {
        Ok(raw) => EnvFilter::try_new(&raw)
            .with_context(|| format!("{LOG_ENV}={raw:?} is not a valid log filter"))?,
        Err(_) => EnvFilter::try_new(config_level)
            .with_context(|| format!("log level {config_level:?} is not a valid log filter"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))
}

/// What the binary does after argument parsing; at most one per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Shell,
    ShowHelp,
    PrintConfigPath,
    PrintExampleConfig,
    PrintUserGuideUrl,
    Check,
}

impl Action {
    const fn flag(self) -> &'static str {
        match self {
            Self::Shell => "(shell)",
            Self::ShowHelp => "--help",
            Self::PrintConfigPath => "--print-config-path",
            Self::PrintExampleConfig => "--print-example-config",
            Self::PrintUserGuideUrl => "--print-user-guide-url",
            Self::Check => "--check",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    action: Action,
    demo: bool,
    prompt: Option<String>,
}

impl CliOptions {
    /// `--help` beats everything else; any other pair of actions conflicts.
    fn request(&mut self, action: Action) -> Result<()> {
        match (self.action, action) {
            (Action::ShowHelp, _) => {}
            (current, requested) if current == Action::Shell || current == requested => {
                self.action = requested;
            }
            (_, Action::ShowHelp) => self.action = Action::ShowHelp,
            (current, requested) => {
                return Err(anyhow!(
                    "{} cannot be combined with {}; pick one",
                    requested.flag(),
                    current.flag()
                ));
            }
        }
        Ok(())
    }
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        action: Action::Shell,
        demo: false,
        prompt: None,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--prompt" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--prompt requires the prompt text"))?;
                options.prompt = Some(value.as_ref().to_owned());
            }
            "--demo" => options.demo = true,
            "--print-config-path" => options.request(Action::PrintConfigPath)?,
            "--print-example-config" => options.request(Action::PrintExampleConfig)?,
            "--print-user-guide-url" => options.request(Action::PrintUserGuideUrl)?,
            "--check" => options.request(Action::Check)?,
            "--help" | "-h" => options.request(Action::ShowHelp)?,
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("linkmein: track job applications from the terminal");
    println!();
    println!("Options:");
    println!("  --config <path>          Use a specific config path");
    println!("  --demo                   Start with sample companies (in-memory)");
    println!("  --prompt <text>          Override [ui].prompt for this session");
    println!();
    println!("Actions (pick at most one; the default starts the shell):");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --print-user-guide-url   Print the user guide URL the help command opens");
    println!("  --check                  Validate config and startup, then exit");
    println!("  --help                   Show this help");
    println!();
    println!("Set {LOG_ENV} (for example {LOG_ENV}=debug) to override [log].level.");
}

#[cfg(test)]
mod tests {
    use super::{Action, CliOptions, parse_cli_args};
    use anyhow::Result;
    use std::path::PathBuf;

    fn fallback_config() -> PathBuf {
        PathBuf::from("/tmp/linkmein/config.toml")
    }

    #[test]
    fn no_arguments_start_an_empty_shell() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), fallback_config())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: fallback_config(),
                action: Action::Shell,
                demo: false,
                prompt: None,
            }
        );
        Ok(())
    }

    #[test]
    fn config_flag_replaces_resolved_path() -> Result<()> {
        let options = parse_cli_args(vec!["--config", "/srv/linkmein.toml"], fallback_config())?;
        assert_eq!(options.config_path, PathBuf::from("/srv/linkmein.toml"));
        assert_eq!(options.action, Action::Shell);
        Ok(())
    }

    #[test]
    fn value_flags_require_a_value() {
        let error = parse_cli_args(vec!["--config"], fallback_config())
            .expect_err("--config without a path should fail");
        assert!(error.to_string().contains("--config requires a file path"));

        let error = parse_cli_args(vec!["--demo", "--prompt"], fallback_config())
            .expect_err("--prompt without text should fail");
        assert!(error.to_string().contains("--prompt requires the prompt text"));
    }

    #[test]
    fn unrecognised_flag_points_at_help() {
        let error = parse_cli_args(vec!["--print-path"], fallback_config())
            .expect_err("unknown flag should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument \"--print-path\""));
        assert!(message.contains("--help"));
    }

    #[test]
    fn demo_shell_with_custom_prompt() -> Result<()> {
        let options = parse_cli_args(vec!["--demo", "--prompt", "jobs> "], fallback_config())?;
        assert!(options.demo);
        assert_eq!(options.prompt.as_deref(), Some("jobs> "));
        assert_eq!(options.action, Action::Shell);
        Ok(())
    }

    #[test]
    fn each_action_flag_selects_its_action() -> Result<()> {
        let cases = [
            ("--print-config-path", Action::PrintConfigPath),
            ("--print-example-config", Action::PrintExampleConfig),
            ("--print-user-guide-url", Action::PrintUserGuideUrl),
            ("--check", Action::Check),
            ("--help", Action::ShowHelp),
            ("-h", Action::ShowHelp),
        ];
        for (flag, expected) in cases {
            let options = parse_cli_args(vec![flag], fallback_config())?;
            assert_eq!(options.action, expected, "{flag}");
        }
        Ok(())
    }

    #[test]
    fn check_combines_with_demo_and_repeats() -> Result<()> {
        let options = parse_cli_args(vec!["--check", "--demo", "--check"], fallback_config())?;
        assert_eq!(options.action, Action::Check);
        assert!(options.demo);
        Ok(())
    }

    #[test]
    fn conflicting_actions_are_rejected() {
        let error = parse_cli_args(
            vec!["--print-config-path", "--print-user-guide-url"],
            fallback_config(),
        )
        .expect_err("two actions should fail");
        assert_eq!(
            error.to_string(),
            "--print-user-guide-url cannot be combined with --print-config-path; pick one"
        );
    }

    #[test]
    fn help_wins_over_other_actions_in_any_order() -> Result<()> {
        let before = parse_cli_args(vec!["--help", "--check"], fallback_config())?;
        assert_eq!(before.action, Action::ShowHelp);

        let after = parse_cli_args(vec!["--check", "-h"], fallback_config())?;
        assert_eq!(after.action, Action::ShowHelp);
        Ok(())
    }
}
