use std::time::Duration;

use crossterm::style::Stylize;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{default_colors::*, error::Result};

pub const DEFAULT_BASE_URL: &str = "https://libraryjuly.azurewebsites.net";

/// Run tag used when none is configured, drawn once per process so every
/// fixture of one run shares it.
static GENERATED_RUN_TAG: Lazy<String> = Lazy::new(|| {
    uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    bold:   bool,
    italic: bool,
    color:  crossterm::style::Color,
}

impl StyleConfig {
    fn style(&self, s: impl ToString) -> String {
        let mut s = s.to_string().with(self.color);
        if self.bold {
            s = s.bold();
        }
        if self.italic {
            s = s.italic();
        }
        s.to_string()
    }
}

pub trait Styleable {
    fn style(&self, c: &StyleConfig) -> String;
}

impl<T> Styleable for T
where
    T: ToString + std::fmt::Display,
{
    fn style(&self, c: &StyleConfig) -> String {
        c.style(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color:  COLOR_WHITE,
            bold:   false,
            italic: false,
        }
    }
}

/// Styling of the `check` report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub style_scenario: StyleConfig,
    pub style_pass:     StyleConfig,
    pub style_fail:     StyleConfig,
    pub style_setup:    StyleConfig,
    pub style_detail:   StyleConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            style_scenario: StyleConfig {
                color: COLOR_SCENARIO,
                ..StyleConfig::default()
            },
            style_pass:     StyleConfig {
                color: COLOR_PASS,
                bold: true,
                ..StyleConfig::default()
            },
            style_fail:     StyleConfig {
                color: COLOR_FAIL,
                bold: true,
                ..StyleConfig::default()
            },
            style_setup:    StyleConfig {
                color: COLOR_SETUP,
                bold: true,
                ..StyleConfig::default()
            },
            style_detail:   StyleConfig {
                color: COLOR_DIMMED,
                italic: true,
                ..StyleConfig::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Scheme and host of the Library API; every path is rooted at `/api`.
    pub base_url:     String,
    pub timeout_secs: u64,
    /// Namespaces the entities seeded by one run. Generated when unset.
    pub run_tag:      Option<String>,
    pub report:       ReportConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    /// Defaults, then `library.toml`, then `LIBRARY_*` environment variables.
    pub fn read_config() -> Result<Self> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::file("library.toml"))
                .merge(Env::prefixed("LIBRARY_")),
        )
    }

    pub fn extract(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured run tag, or the one generated for this process.
    pub fn run_tag(&self) -> &str {
        self.run_tag.as_deref().unwrap_or(GENERATED_RUN_TAG.as_str())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url:     DEFAULT_BASE_URL.into(),
            timeout_secs: 30,
            run_tag:      None,
            report:       ReportConfig::default(),
        }
    }
}
