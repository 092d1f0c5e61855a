/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Plugin configuration.
//!
//! This module provides configuration options for the fixed-value plugin and
//! parsing of the host compiler's option strings.

use fixval_core::ConfigError;
use std::str::FromStr;

/// Option name that enables the plugin on the host command line.
pub const OPTION_NAME: &str = "Xfixed-value";

/// Default name of the shared calendar factory field.
pub const DEFAULT_FACTORY_FIELD: &str = "DATATYPE_FACTORY";

/// What to do when a fixed value is not lexically valid for its field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseErrorPolicy {
    /// Stop the pass and hand the error to the host.
    #[default]
    Abort,
    /// Leave the field uninitialized, report a warning, and continue.
    SkipField,
}

impl FromStr for ParseErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::SkipField),
            other => Err(ConfigError::InvalidValue {
                option: "on-parse-error".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Configuration for the fixed-value plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// Whether the plugin mutates the outline when run.
    pub enabled: bool,
    /// Handling of malformed numeric fixed values.
    pub parse_error_policy: ParseErrorPolicy,
    /// Name of the static calendar factory field installed per class.
    pub factory_field_name: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            parse_error_policy: ParseErrorPolicy::default(),
            factory_field_name: DEFAULT_FACTORY_FIELD.to_string(),
        }
    }
}

impl PluginConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the plugin is enabled.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the parse error policy.
    #[must_use]
    pub const fn with_parse_error_policy(mut self, policy: ParseErrorPolicy) -> Self {
        self.parse_error_policy = policy;
        self
    }

    /// Sets the name of the static calendar factory field.
    #[must_use]
    pub fn with_factory_field_name(mut self, name: impl Into<String>) -> Self {
        self.factory_field_name = name.into();
        self
    }

    /// Builds a configuration from host compiler arguments.
    ///
    /// The plugin is enabled by `-Xfixed-value`. Sub-options take the form
    /// `-Xfixed-value-<name>=<value>`:
    /// - `on-parse-error=abort|skip`
    /// - `factory-field=<identifier>`
    ///
    /// Arguments that do not start with the plugin's option name belong to the
    /// host or to other plugins and are ignored.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for unknown sub-options or invalid values.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default().with_enabled(false);

        for arg in args {
            let arg = arg.as_ref().trim_start_matches('-');
            let Some(rest) = arg.strip_prefix(OPTION_NAME) else {
                continue;
            };
            if rest.is_empty() {
                config.enabled = true;
                continue;
            }

            let Some(sub_option) = rest.strip_prefix('-') else {
                return Err(ConfigError::UnknownOption(arg.to_string()));
            };
            let (name, value) = sub_option.split_once('=').unwrap_or((sub_option, ""));
            match name {
                "on-parse-error" => config.parse_error_policy = value.parse()?,
                "factory-field" if !value.is_empty() => {
                    config.factory_field_name = value.to_string();
                }
                "factory-field" => {
                    return Err(ConfigError::InvalidValue {
                        option: name.to_string(),
                        value: value.to_string(),
                    });
                }
                _ => return Err(ConfigError::UnknownOption(arg.to_string())),
            }
        }

        Ok(config)
    }
}
