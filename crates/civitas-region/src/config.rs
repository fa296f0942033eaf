// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Region plugin configuration parsing from persisted JSON documents.
//!
//! A region config is a plain immutable value: one region identity plus an
//! ordered sequence of data sources. It is loaded once at plugin
//! construction time and never mutated, preserving the "one plugin type,
//! many configs" shape.

use civitas_core::types::{DataSourceSpec, DataType};
use civitas_core::CivitasError;
use serde::{Deserialize, Serialize};

/// Declarative configuration for one region plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPluginConfig {
    /// Unique region identifier, also the default plugin name.
    pub region_id: String,
    /// Human-readable region name.
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub description: String,
    /// IANA timezone of the region.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Ordered data sources; position defines fetch/merge order within a
    /// data type.
    #[serde(default)]
    pub data_sources: Vec<DataSourceSpec>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl RegionPluginConfig {
    /// Parse and validate a config from a JSON document.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CivitasError> {
        let config: Self = serde_json::from_value(value)
            .map_err(|e| CivitasError::Config(format!("invalid region config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CivitasError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CivitasError::Config(format!("invalid region config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config structurally resembles a usable region config:
    /// a region id and at least one data source with a URL.
    pub fn validate(&self) -> Result<(), CivitasError> {
        if self.region_id.is_empty() {
            return Err(CivitasError::Config(
                "region config: regionId must not be empty".to_string(),
            ));
        }
        if self.data_sources.is_empty() {
            return Err(CivitasError::Config(format!(
                "region config '{}': at least one data source is required",
                self.region_id
            )));
        }
        for (index, source) in self.data_sources.iter().enumerate() {
            if source.url.is_empty() {
                return Err(CivitasError::Config(format!(
                    "region config '{}': data source {index} has an empty url",
                    self.region_id
                )));
            }
        }
        Ok(())
    }

    /// Distinct data types across all sources, in first-seen order.
    pub fn supported_data_types(&self) -> Vec<DataType> {
        let mut types = Vec::new();
        for source in &self.data_sources {
            if !types.contains(&source.data_type) {
                types.push(source.data_type);
            }
        }
        types
    }

    /// All sources of the given data type, in configured order.
    pub fn sources_for(&self, data_type: DataType) -> Vec<&DataSourceSpec> {
        self.data_sources
            .iter()
            .filter(|s| s.data_type == data_type)
            .collect()
    }

    /// All source URLs, in configured order.
    pub fn data_source_urls(&self) -> Vec<String> {
        self.data_sources.iter().map(|s| s.url.clone()).collect()
    }
}
