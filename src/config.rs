// config.rs

use crate::catalog::banner_width;
use crate::error::{PortfolioError, Result};
use crate::render::Style;
use rustyline::{CompletionType, Config, EditMode};

/// Presentation and side-effect switches, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub compact_banner: bool,
    pub launch: bool,
    pub style: Style,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        use std::io::IsTerminal;
        let tty = std::io::stdout().is_terminal();
        Self::from_lookup(|key| std::env::var(key).ok(), tty)
    }

    /// `lookup` stands in for the process environment so tests can feed it.
    pub fn from_lookup<F>(lookup: F, stdout_is_tty: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let compact_banner = match lookup("PORTFOLIO_COMPACT") {
            Some(value) => parse_flag("PORTFOLIO_COMPACT", &value)?,
            None => lookup("COLUMNS")
                .and_then(|c| c.trim().parse::<usize>().ok())
                .map(|cols| cols < banner_width())
                .unwrap_or(false),
        };
        let launch = match lookup("PORTFOLIO_NO_LAUNCH") {
            Some(value) => !parse_flag("PORTFOLIO_NO_LAUNCH", &value)?,
            None => true,
        };
        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());
        let style = if no_color || !stdout_is_tty { Style::Plain } else { Style::Ansi };
        Ok(Self {
            compact_banner,
            launch,
            style,
        })
    }

    pub fn editor_config(&self) -> Config {
        Config::builder()
            .edit_mode(EditMode::Emacs)
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .build()
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(PortfolioError::Config(format!("{key}={other} is not a boolean"))),
    }
}
