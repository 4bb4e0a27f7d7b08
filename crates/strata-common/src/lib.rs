//! # Strata Common
//!
//! Shared types, errors and logging setup for the Strata workspace.
//!
//! This crate provides the foundational pieces used by every other crate:
//! the [`StrataError`] type, the validated [`LanguageCode`] newtype and the
//! `tracing` subscriber configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, StrataError};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LogFormat, LoggingConfig};
pub use types::LanguageCode;
