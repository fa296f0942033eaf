// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Civitas civic-data platform.
//!
//! This crate provides the foundational trait definitions, error types,
//! common value types, and civic record models used throughout the Civitas
//! workspace. Region plugins implement traits defined here.

pub mod error;
pub mod records;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CivitasError;
pub use types::{DataSourceSpec, DataType, ExtractionResult, PluginHealth, RegionInfo, SourceType};

// Re-export the trait boundaries at crate root.
pub use traits::{PipelineService, RegionPlugin};
