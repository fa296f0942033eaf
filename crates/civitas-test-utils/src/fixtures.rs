// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for region config documents and data source specs used across
//! test suites.

use civitas_core::types::{DataSourceSpec, DataType, SourceType};
use serde_json::json;

/// Build a scrape source for the given URL and data type.
pub fn source(url: &str, data_type: DataType) -> DataSourceSpec {
    DataSourceSpec {
        url: url.to_string(),
        data_type,
        content_goal: format!("extract {data_type}"),
        category: None,
        source_type: SourceType::Scrape,
    }
}

/// Build a region config JSON document, the shape persisted by the config
/// store and consumed by the plugin loader.
pub fn region_config_value(region_id: &str, sources: &[DataSourceSpec]) -> serde_json::Value {
    json!({
        "regionId": region_id,
        "regionName": region_id,
        "description": format!("test region {region_id}"),
        "timezone": "America/Los_Angeles",
        "dataSources": sources,
    })
}
