/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the fixval code model extensions.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors raised while attaching fixed-value initializers.

use thiserror::Error;

/// Result type alias using [`FixValError`] as the error type.
pub type Result<T> = std::result::Result<T, FixValError>;

/// Top-level error type for all fixval operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixValError {
    /// A fixed value could not be parsed for the declared field type.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Supporting code could not be installed into a class.
    #[error("install error: {0}")]
    Install(#[from] InstallError),

    /// Invalid plugin configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised when a fixed-value lexical string is not valid for the
/// field's target type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The value is not a base-10 integer that fits the declared width.
    #[error("invalid {target} value {value:?} for field {field}: {reason}")]
    InvalidInteger {
        /// Name of the field being initialized.
        field: String,
        /// Name of the target type (e.g. `Integer`, `Long`).
        target: String,
        /// The raw fixed value.
        value: String,
        /// Message from the underlying parser.
        reason: String,
    },

    /// The value is not a floating point literal.
    #[error("invalid {target} value {value:?} for field {field}: {reason}")]
    InvalidFloat {
        /// Name of the field being initialized.
        field: String,
        /// Name of the target type (`Float` or `Double`).
        target: String,
        /// The raw fixed value.
        value: String,
        /// Message from the underlying parser.
        reason: String,
    },
}

impl ParseError {
    /// Returns the name of the field whose value failed to parse.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidInteger { field, .. } | Self::InvalidFloat { field, .. } => field,
        }
    }
}

/// Errors raised while installing class-level supporting members.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstallError {
    /// The class already declares a member with the requested name but an
    /// incompatible type or kind.
    #[error("class {class} already declares an incompatible member named {member}")]
    NameClash {
        /// Name of the class.
        class: String,
        /// Name of the conflicting member.
        member: String,
    },

    /// The requested member name is not a valid identifier.
    #[error("invalid member name {name:?} for class {class}")]
    InvalidName {
        /// Name of the class.
        class: String,
        /// The rejected member name.
        name: String,
    },
}

/// Errors in plugin configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option not recognized by the plugin.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Option recognized but its value is not accepted.
    #[error("invalid value {value:?} for option {option}")]
    InvalidValue {
        /// The option name.
        option: String,
        /// The rejected value.
        value: String,
    },
}
