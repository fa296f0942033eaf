// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Civitas region data-acquisition layer.

use thiserror::Error;

/// The primary error type used across Civitas traits and core operations.
#[derive(Debug, Error)]
pub enum CivitasError {
    /// Configuration errors (malformed region config, missing required
    /// fields, missing collaborators at load time).
    #[error("configuration error: {0}")]
    Config(String),

    /// Extraction pipeline errors (fetch failure, extraction failure,
    /// malformed pipeline response).
    #[error("pipeline error: {message}")]
    Pipeline {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A plugin's `initialize()` rejected during registration.
    #[error("plugin initialization failed for {name}: {message}")]
    Initialization {
        name: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A plugin's health check failed.
    #[error("health check failed for {name}: {message}")]
    HealthCheckFailed { name: String, message: String },
}
