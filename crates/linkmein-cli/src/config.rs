// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use url::Url;

pub const APP_NAME: &str = "linkmein";
pub const CONFIG_PATH_ENV: &str = "LINKMEIN_CONFIG_PATH";

const CONFIG_VERSION: i64 = 1;
pub const DEFAULT_USER_GUIDE_URL: &str = "https://ay2324s1-cs2103t-t17-2.github.io/tp/UserGuide.html";
const DEFAULT_PROMPT: &str = "> ";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub help: Help,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            help: Help::default(),
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Help {
    pub user_guide_url: Option<String>,
    /// Command used to open the guide; the platform default when unset.
    pub opener: Option<String>,
}

impl Default for Help {
    fn default() -> Self {
        Self {
            user_guide_url: Some(DEFAULT_USER_GUIDE_URL.to_owned()),
            opener: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub prompt: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            prompt: Some(DEFAULT_PROMPT.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;
        Ok(config_root.join(APP_NAME).join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and keep values under [help], [ui], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(raw) = &self.help.user_guide_url {
            parse_guide_url(raw).with_context(|| {
                format!("help.user_guide_url in {} is invalid", path.display())
            })?;
        }

        if let Some(opener) = &self.help.opener
            && opener.trim().is_empty()
        {
            bail!(
                "help.opener in {} must not be blank -- remove it to use the platform default",
                path.display()
            );
        }

        if let Some(level) = &self.log.level {
            EnvFilter::try_new(level).with_context(|| {
                format!(
                    "log.level {level:?} in {} is not a valid filter; use one of error, warn, info, debug, trace",
                    path.display()
                )
            })?;
        }

        Ok(())
    }

    pub fn user_guide_url(&self) -> Result<Url> {
        parse_guide_url(
            self.help
                .user_guide_url
                .as_deref()
                .unwrap_or(DEFAULT_USER_GUIDE_URL),
        )
    }

    pub fn opener(&self) -> Option<&str> {
        self.help.opener.as_deref().map(str::trim)
    }

    pub fn prompt(&self) -> &str {
        self.ui.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# LinkMeIn config\n# Place this file at: {}\n\nversion = 1\n\n[help]\nuser_guide_url = \"{}\"\n# Optional. Defaults to xdg-open, open, or start depending on the platform\n# opener = \"firefox\"\n\n[ui]\nprompt = \"{}\"\n\n[log]\n# Overridden by LINKMEIN_LOG when set\nlevel = \"{}\"\n",
            path.display(),
            DEFAULT_USER_GUIDE_URL,
            DEFAULT_PROMPT,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_guide_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("invalid URL {raw:?}"))?;
    match url.scheme() {
        "http" | "https" | "file" => Ok(url),
        scheme => bail!("unsupported URL scheme {scheme:?} in {raw:?}; use http, https, or file"),
    }
}
