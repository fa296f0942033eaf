// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the region plugin traits and the Civitas
//! data-acquisition layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The kind of civic data a configured source yields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DataType {
    Propositions,
    Meetings,
    Representatives,
    CampaignFinance,
}

/// How a data source is accessed by the extraction pipeline.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceType {
    /// A structured API endpoint.
    Api,
    /// A page scraped and run through extraction.
    #[default]
    Scrape,
}

/// One configured `(url, data type, content goal)` unit the pipeline can
/// extract from.
///
/// A region config holds an ordered sequence of these; position in that
/// sequence defines fetch and merge order within a data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceSpec {
    /// Source URL handed to the pipeline.
    pub url: String,
    /// Kind of civic data this source yields.
    pub data_type: DataType,
    /// Extraction intent passed through to the pipeline.
    #[serde(default)]
    pub content_goal: String,
    /// Disambiguates multiple sources of the same data type
    /// (e.g. "Assembly" vs "Senate").
    #[serde(default)]
    pub category: Option<String>,
    /// Access mode for this source.
    #[serde(default)]
    pub source_type: SourceType,
}

/// Region identity and source inventory reported by a plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub timezone: String,
    /// All configured source URLs, in configured order.
    pub data_source_urls: Vec<String>,
}

/// Health report produced by a plugin health check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginHealth {
    pub healthy: bool,
    pub message: String,
    pub last_check: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl PluginHealth {
    /// Build a healthy report stamped with the current time.
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            healthy: true,
            message: message.into(),
            last_check: Utc::now(),
            metadata: None,
        }
    }

    /// Build an unhealthy report stamped with the current time.
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: message.into(),
            last_check: Utc::now(),
            metadata: None,
        }
    }

    /// Attach structured metadata to the report.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Result of one pipeline execution against one data source.
///
/// The region layer never validates `manifest_version`; it logs
/// `warnings`/`errors` and consumes `items` regardless of `success`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Raw extracted items, shape defined by the source's data type.
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub manifest_version: u32,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub extraction_time_ms: f64,
}
