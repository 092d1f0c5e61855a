/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # fixval Core
//!
//! Error definitions shared by all fixval crates.
//!
//! This crate provides:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Result alias**: [`Result`] over [`FixValError`]

pub mod error;

pub use error::{ConfigError, FixValError, InstallError, ParseError, Result};
