/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixval Plugin
//!
//! Schema compiler extension that initializes generated fields to the value
//! of their element's `fixed` constraint.
//!
//! ## Usage
//!
//! The host compiler builds an [`Outline`](fixval_model::Outline), then runs
//! the plugin over it before emitting source:
//!
//! ```rust,ignore
//! let plugin = FixedValuePlugin::with_config(PluginConfig::from_args(&args)?);
//! plugin.run(&mut outline, &mut TracingDiagnostics)?;
//! ```

pub mod config;
pub mod diagnostics;
pub mod eligibility;
pub mod enums;
pub mod installer;
pub mod literal;
pub mod plugin;
pub mod target;

pub use config::{ParseErrorPolicy, PluginConfig};
pub use diagnostics::{Diagnostic, Diagnostics, RecordingDiagnostics, Severity, TracingDiagnostics};
pub use installer::DatatypeFactoryInstaller;
pub use plugin::{FixedValuePlugin, Plugin};
pub use target::{IntWidth, TargetKind};
