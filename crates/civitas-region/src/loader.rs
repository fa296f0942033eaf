// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin loader: builds declarative plugins from persisted definitions and
//! registers them into the shared registry.
//!
//! The loader fails loud at the boundary: a missing pipeline collaborator or
//! a malformed region config rejects the load immediately, never a degraded
//! load. Fetch-time failures are the plugin's concern, not the loader's.

use std::sync::Arc;

use civitas_core::{CivitasError, PipelineService, RegionPlugin};
use tokio::sync::Mutex;
use tracing::info;

use crate::config::RegionPluginConfig;
use crate::declarative::DeclarativePlugin;
use crate::registry::RegionRegistry;

/// Name under which the federal plugin is always registered.
pub const FEDERAL_PLUGIN_NAME: &str = "federal";

/// A persisted plugin definition: a name plus its region config document.
#[derive(Debug, Clone)]
pub struct PluginDefinition {
    pub name: String,
    pub config: Option<serde_json::Value>,
}

/// Loads declarative region plugins into the shared [`RegionRegistry`].
#[derive(Clone)]
pub struct PluginLoader {
    registry: Arc<Mutex<RegionRegistry>>,
}

impl PluginLoader {
    /// Create a loader targeting the given shared registry.
    pub fn new(registry: Arc<Mutex<RegionRegistry>>) -> Self {
        Self { registry }
    }

    /// The registry this loader registers into.
    pub fn registry(&self) -> Arc<Mutex<RegionRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Build a declarative plugin from `definition` and register it into the
    /// local slot, returning the plugin handle.
    ///
    /// Fails immediately when `pipeline` is absent or the config does not
    /// structurally resemble a region config.
    pub async fn load_plugin(
        &self,
        definition: PluginDefinition,
        pipeline: Option<Arc<dyn PipelineService>>,
    ) -> Result<Arc<DeclarativePlugin>, CivitasError> {
        let pipeline = require_pipeline(pipeline)?;
        let raw = definition.config.ok_or_else(|| {
            CivitasError::Config(format!(
                "plugin '{}' has no region config",
                definition.name
            ))
        })?;
        let plugin = build_plugin(raw.clone(), pipeline)?;

        self.registry
            .lock()
            .await
            .register_local(&definition.name, plugin.clone(), Some(&raw))
            .await?;
        info!(plugin = %definition.name, region_id = %plugin.name(), "local region plugin loaded");
        Ok(plugin)
    }

    /// Build a declarative plugin from `config` and register it into the
    /// federal slot as [`FEDERAL_PLUGIN_NAME`].
    ///
    /// Intended to run at process startup regardless of which local region
    /// is selected.
    pub async fn load_federal_plugin(
        &self,
        config: serde_json::Value,
        pipeline: Option<Arc<dyn PipelineService>>,
    ) -> Result<Arc<DeclarativePlugin>, CivitasError> {
        let pipeline = require_pipeline(pipeline)?;
        let plugin = build_plugin(config.clone(), pipeline)?;

        self.registry
            .lock()
            .await
            .register_federal(FEDERAL_PLUGIN_NAME, plugin.clone(), Some(&config))
            .await?;
        info!(region_id = %plugin.name(), "federal region plugin loaded");
        Ok(plugin)
    }

    /// Unregister the local plugin, if any. Never fails.
    pub async fn unload_plugin(&self) {
        self.registry.lock().await.unregister().await;
    }
}

fn require_pipeline(
    pipeline: Option<Arc<dyn PipelineService>>,
) -> Result<Arc<dyn PipelineService>, CivitasError> {
    pipeline.ok_or_else(|| {
        CivitasError::Config(
            "pipeline service is required to load a region plugin and none was provided"
                .to_string(),
        )
    })
}

fn build_plugin(
    raw_config: serde_json::Value,
    pipeline: Arc<dyn PipelineService>,
) -> Result<Arc<DeclarativePlugin>, CivitasError> {
    let config = RegionPluginConfig::from_value(raw_config)?;
    Ok(Arc::new(DeclarativePlugin::new(config, pipeline)))
}
