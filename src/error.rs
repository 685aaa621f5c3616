// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Error and result types.
//!
//! Scoring itself never fails. These errors are raised by the surfaces around it: loading the
//! configuration, reading candidate lists and writing results.

use std::io;
use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum ErrorType {
    /// Configuration error.
    #[error("Configuration Error ({0})")]
    Config(#[from] crate::config::ConfigError),
    /// The configured notification threshold is outside of the score range.
    #[error("Notification threshold {0} is not within 0..=100")]
    InvalidThreshold(u8),
    /// I/O Error.
    #[error("Input/Output error ({:?})", .0)]
    Io(#[from] io::Error),
    /// Serializing a result to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    /// Serializing the configuration to TOML failed.
    #[error("TOML serialization failed: {0}")]
    TomlSerialization(#[from] toml::ser::Error),
    /// Setting up the terminal logger failed.
    #[error("Logger initialization failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Convenience type.
pub type Result<T> = std::result::Result<T, ErrorType>;
