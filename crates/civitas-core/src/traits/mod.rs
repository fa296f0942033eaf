// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait boundaries of the region data-acquisition layer.
//!
//! [`RegionPlugin`] is the handle the domain layer calls; [`PipelineService`]
//! is the extraction collaborator a plugin fans out to. Both use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod pipeline;
pub mod region;

pub use pipeline::PipelineService;
pub use region::RegionPlugin;
