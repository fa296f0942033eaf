// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Region plugin handle exposed to the domain layer.

use async_trait::async_trait;

use crate::error::CivitasError;
use crate::records::{CampaignFinanceData, Meeting, Proposition, Representative};
use crate::types::{DataType, PluginHealth, RegionInfo};

/// A pluggable data-acquisition unit scoped to one region.
///
/// Implementations provide identity, lifecycle, health, and the fixed fetch
/// contract the domain layer consumes. Fetch methods on an initialized
/// plugin degrade to partial or empty results rather than erroring, so
/// upstream orchestration always gets a usable answer.
#[async_trait]
pub trait RegionPlugin: Send + Sync + 'static {
    /// Unique plugin name, conventionally the region id.
    fn name(&self) -> &str;

    /// Version of the plugin implementation family.
    fn version(&self) -> semver::Version;

    /// Region identity and configured source inventory.
    fn region_info(&self) -> RegionInfo;

    /// Distinct data types across all configured sources, each appearing
    /// exactly once.
    fn supported_data_types(&self) -> Vec<DataType>;

    /// Prepare the plugin for fetching. Idempotent.
    async fn initialize(&self, config: Option<&serde_json::Value>) -> Result<(), CivitasError>;

    /// Release held resources. Idempotent.
    async fn destroy(&self) -> Result<(), CivitasError>;

    /// Report current health.
    async fn health_check(&self) -> Result<PluginHealth, CivitasError>;

    async fn fetch_propositions(&self) -> Result<Vec<Proposition>, CivitasError>;

    async fn fetch_meetings(&self) -> Result<Vec<Meeting>, CivitasError>;

    async fn fetch_representatives(&self) -> Result<Vec<Representative>, CivitasError>;

    /// Fetch and classify campaign-finance records into the four-bucket
    /// result shape.
    async fn fetch_campaign_finance(&self) -> Result<CampaignFinanceData, CivitasError>;
}
