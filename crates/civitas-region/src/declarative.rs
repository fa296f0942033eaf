// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative region plugin driven entirely by configuration.
//!
//! `DeclarativePlugin` implements [`RegionPlugin`] from one immutable
//! [`RegionPluginConfig`] plus an injected [`PipelineService`]. Each fetch
//! fans out over the configured sources of the requested data type, executes
//! the pipeline per source, and merges results in configured source order.
//! One source's failure never aborts the whole fetch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use civitas_core::records::{CampaignFinanceData, Meeting, Proposition, Representative};
use civitas_core::types::{DataType, PluginHealth, RegionInfo};
use civitas_core::{CivitasError, PipelineService, RegionPlugin};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::RegionPluginConfig;
use crate::finance;

/// Version sentinel identifying the declarative adapter family, as opposed
/// to any future hand-coded per-region implementation.
pub fn declarative_adapter_version() -> semver::Version {
    semver::Version::new(1, 0, 0)
}

/// A region plugin whose behavior is data, not code: one plugin type, many
/// region configs.
pub struct DeclarativePlugin {
    config: RegionPluginConfig,
    pipeline: Arc<dyn PipelineService>,
    initialized: AtomicBool,
}

impl std::fmt::Debug for DeclarativePlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarativePlugin")
            .field("region_id", &self.config.region_id)
            .field("data_sources", &self.config.data_sources.len())
            .field("initialized", &self.initialized.load(Ordering::SeqCst))
            .finish()
    }
}

impl DeclarativePlugin {
    /// Wrap a region config and a pipeline executor into a plugin handle.
    pub fn new(config: RegionPluginConfig, pipeline: Arc<dyn PipelineService>) -> Self {
        Self {
            config,
            pipeline,
            initialized: AtomicBool::new(false),
        }
    }

    /// The immutable region config this plugin was built from.
    pub fn config(&self) -> &RegionPluginConfig {
        &self.config
    }

    /// Execute every configured source of `data_type` and pool their raw
    /// items in configured source order.
    ///
    /// Returns early with no pipeline calls when no source matches. Sources
    /// run concurrently; `join_all` yields results in input order, so the
    /// merge reflects configuration order rather than completion order. A
    /// failed source is logged and skipped.
    async fn collect_items(&self, data_type: DataType) -> Vec<serde_json::Value> {
        let sources = self.config.sources_for(data_type);
        if sources.is_empty() {
            debug!(region_id = %self.config.region_id, data_type = %data_type,
                "no sources configured, skipping fetch");
            return Vec::new();
        }

        let results = join_all(
            sources
                .iter()
                .map(|source| self.pipeline.execute(source, &self.config.region_id)),
        )
        .await;

        let mut items = Vec::new();
        for (source, result) in sources.iter().zip(results) {
            match result {
                Ok(extraction) => {
                    for warning in &extraction.warnings {
                        debug!(region_id = %self.config.region_id, url = %source.url,
                            warning = %warning, "pipeline warning");
                    }
                    for error in &extraction.errors {
                        warn!(region_id = %self.config.region_id, url = %source.url,
                            error = %error, "pipeline reported an error");
                    }
                    debug!(region_id = %self.config.region_id, url = %source.url,
                        count = extraction.items.len(),
                        elapsed_ms = extraction.extraction_time_ms,
                        "source extracted");
                    items.extend(extraction.items);
                }
                Err(e) => {
                    warn!(region_id = %self.config.region_id, url = %source.url,
                        data_type = %data_type, error = %e,
                        "source fetch failed, skipping");
                }
            }
        }
        items
    }

    /// Deserialize pooled raw items into a record type, dropping malformed
    /// items at debug level.
    fn typed_items<T: DeserializeOwned>(&self, items: Vec<serde_json::Value>) -> Vec<T> {
        let mut typed = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value(item) {
                Ok(record) => typed.push(record),
                Err(e) => {
                    debug!(region_id = %self.config.region_id, error = %e,
                        "dropping item that does not match the record shape");
                }
            }
        }
        typed
    }

    async fn fetch_typed<T: DeserializeOwned>(&self, data_type: DataType) -> Vec<T> {
        let items = self.collect_items(data_type).await;
        self.typed_items(items)
    }
}

#[async_trait]
impl RegionPlugin for DeclarativePlugin {
    fn name(&self) -> &str {
        &self.config.region_id
    }

    fn version(&self) -> semver::Version {
        declarative_adapter_version()
    }

    fn region_info(&self) -> RegionInfo {
        RegionInfo {
            id: self.config.region_id.clone(),
            name: self.config.region_name.clone(),
            description: self.config.description.clone(),
            timezone: self.config.timezone.clone(),
            data_source_urls: self.config.data_source_urls(),
        }
    }

    fn supported_data_types(&self) -> Vec<DataType> {
        self.config.supported_data_types()
    }

    /// Mark the plugin ready. The declarative plugin is config-complete at
    /// construction, so the runtime `config` override is ignored.
    async fn initialize(&self, _config: Option<&serde_json::Value>) -> Result<(), CivitasError> {
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn destroy(&self) -> Result<(), CivitasError> {
        self.initialized.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn health_check(&self) -> Result<PluginHealth, CivitasError> {
        if !self.initialized.load(Ordering::SeqCst) {
            return Ok(PluginHealth::unhealthy(format!(
                "region plugin '{}' is not initialized",
                self.config.region_id
            )));
        }
        let supported: Vec<String> = self
            .supported_data_types()
            .iter()
            .map(|t| t.to_string())
            .collect();
        Ok(PluginHealth::healthy(format!(
            "region plugin '{}' is operational",
            self.config.region_id
        ))
        .with_metadata(serde_json::json!({
            "regionId": self.config.region_id,
            "dataSourceCount": self.config.data_sources.len(),
            "supportedTypes": supported,
        })))
    }

    async fn fetch_propositions(&self) -> Result<Vec<Proposition>, CivitasError> {
        Ok(self.fetch_typed(DataType::Propositions).await)
    }

    async fn fetch_meetings(&self) -> Result<Vec<Meeting>, CivitasError> {
        Ok(self.fetch_typed(DataType::Meetings).await)
    }

    async fn fetch_representatives(&self) -> Result<Vec<Representative>, CivitasError> {
        Ok(self.fetch_typed(DataType::Representatives).await)
    }

    async fn fetch_campaign_finance(&self) -> Result<CampaignFinanceData, CivitasError> {
        let items = self.collect_items(DataType::CampaignFinance).await;
        Ok(finance::classify(items))
    }
}
