// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! External extraction pipeline collaborator.

use async_trait::async_trait;

use crate::error::CivitasError;
use crate::types::{DataSourceSpec, ExtractionResult};

/// The scraping/extraction executor that turns one data source into raw
/// items.
///
/// The region layer treats this as opaque: it does not retry, time out, or
/// validate results beyond logging reported warnings/errors. A hung call is
/// expected to be bounded by the pipeline itself.
#[async_trait]
pub trait PipelineService: Send + Sync + 'static {
    /// Execute extraction for one source on behalf of the given region.
    async fn execute(
        &self,
        source: &DataSourceSpec,
        region_id: &str,
    ) -> Result<ExtractionResult, CivitasError>;
}
