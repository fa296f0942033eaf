// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dual-slot registry owning the active region plugins.
//!
//! The registry holds two independently-lifecycled slots: `federal` (the
//! always-loaded nationwide plugin) and `local` (the user-selected region).
//! Each slot holds at most one plugin. The registry exclusively owns slot
//! contents and is responsible for destroying replaced or unregistered
//! instances.
//!
//! Mutating methods take `&mut self`; callers share one registry per process
//! behind `tokio::sync::Mutex`, which serializes register/unregister per
//! slot so no caller observes a half-replaced slot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use civitas_core::types::PluginHealth;
use civitas_core::{CivitasError, RegionPlugin};
use tracing::{info, warn};

/// State of a populated registry slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Plugin initialized successfully and is serving fetches.
    Active,
    /// Plugin registration was attempted but `initialize()` rejected.
    Error,
}

impl std::fmt::Display for SlotState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotState::Active => write!(f, "active"),
            SlotState::Error => write!(f, "error"),
        }
    }
}

/// The two registry slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Federal,
    Local,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Federal => write!(f, "federal"),
            Slot::Local => write!(f, "local"),
        }
    }
}

/// A plugin held by one registry slot.
struct RegisteredPlugin {
    name: String,
    instance: Arc<dyn RegionPlugin>,
    state: SlotState,
    last_error: Option<String>,
    loaded_at: DateTime<Utc>,
}

impl std::fmt::Debug for RegisteredPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredPlugin")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("last_error", &self.last_error)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

/// Point-in-time view of one slot, for diagnostics.
#[derive(Debug, Clone)]
pub struct SlotStatus {
    pub name: String,
    pub state: SlotState,
    pub last_error: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

/// Point-in-time view of both slots.
#[derive(Debug, Clone)]
pub struct RegistryStatus {
    /// Whether the local slot is populated at all (active or errored).
    pub has_plugin: bool,
    pub local: Option<SlotStatus>,
    pub federal: Option<SlotStatus>,
}

/// Registry owning the federal and local region plugin slots.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    federal: Option<RegisteredPlugin>,
    local: Option<RegisteredPlugin>,
}

impl RegionRegistry {
    /// Create a registry with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin into the local slot, replacing any current
    /// occupant.
    ///
    /// The old occupant is destroyed first (destroy errors are logged and
    /// swallowed), then `initialize(config)` runs on the new instance. On
    /// initialize failure the slot keeps the errored entry for diagnostics
    /// and the error is returned to the caller.
    pub async fn register_local(
        &mut self,
        name: &str,
        instance: Arc<dyn RegionPlugin>,
        config: Option<&serde_json::Value>,
    ) -> Result<(), CivitasError> {
        self.register_slot(Slot::Local, name, instance, config).await
    }

    /// Register a plugin into the federal slot. Same lifecycle as
    /// [`register_local`](Self::register_local).
    pub async fn register_federal(
        &mut self,
        name: &str,
        instance: Arc<dyn RegionPlugin>,
        config: Option<&serde_json::Value>,
    ) -> Result<(), CivitasError> {
        self.register_slot(Slot::Federal, name, instance, config)
            .await
    }

    /// Legacy alias for [`register_local`](Self::register_local), kept for
    /// callers predating the federal slot.
    pub async fn register(
        &mut self,
        name: &str,
        instance: Arc<dyn RegionPlugin>,
        config: Option<&serde_json::Value>,
    ) -> Result<(), CivitasError> {
        self.register_local(name, instance, config).await
    }

    async fn register_slot(
        &mut self,
        slot: Slot,
        name: &str,
        instance: Arc<dyn RegionPlugin>,
        config: Option<&serde_json::Value>,
    ) -> Result<(), CivitasError> {
        if let Some(old) = self.slot_mut(slot).take() {
            info!(slot = %slot, old = %old.name, new = %name, "replacing region plugin");
            if let Err(e) = old.instance.destroy().await {
                warn!(slot = %slot, plugin = %old.name, error = %e,
                    "failed to destroy replaced plugin, continuing");
            }
        }

        match instance.initialize(config).await {
            Ok(()) => {
                info!(slot = %slot, plugin = %name, "region plugin registered");
                *self.slot_mut(slot) = Some(RegisteredPlugin {
                    name: name.to_string(),
                    instance,
                    state: SlotState::Active,
                    last_error: None,
                    loaded_at: Utc::now(),
                });
                Ok(())
            }
            Err(e) => {
                warn!(slot = %slot, plugin = %name, error = %e,
                    "region plugin failed to initialize");
                // Keep the errored entry so status reporting can distinguish
                // "no plugin" from "plugin present but broken".
                *self.slot_mut(slot) = Some(RegisteredPlugin {
                    name: name.to_string(),
                    instance,
                    state: SlotState::Error,
                    last_error: Some(e.to_string()),
                    loaded_at: Utc::now(),
                });
                Err(e)
            }
        }
    }

    /// Remove and destroy the local slot's plugin, if any. Destroy errors
    /// are logged and swallowed; this never fails.
    pub async fn unregister(&mut self) {
        self.clear_slot(Slot::Local).await;
    }

    /// Destroy both slots, federal first. A destroy failure in one slot
    /// does not block cleanup of the other.
    pub async fn shutdown(&mut self) {
        self.clear_slot(Slot::Federal).await;
        self.clear_slot(Slot::Local).await;
    }

    async fn clear_slot(&mut self, slot: Slot) {
        if let Some(entry) = self.slot_mut(slot).take() {
            info!(slot = %slot, plugin = %entry.name, "unregistering region plugin");
            if let Err(e) = entry.instance.destroy().await {
                warn!(slot = %slot, plugin = %entry.name, error = %e,
                    "failed to destroy plugin during unregister");
            }
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<RegisteredPlugin> {
        match slot {
            Slot::Federal => &mut self.federal,
            Slot::Local => &mut self.local,
        }
    }

    fn active_entry(entry: &Option<RegisteredPlugin>) -> Option<&RegisteredPlugin> {
        entry.as_ref().filter(|e| e.state == SlotState::Active)
    }

    /// The local slot's plugin, if active.
    pub fn local(&self) -> Option<Arc<dyn RegionPlugin>> {
        Self::active_entry(&self.local).map(|e| Arc::clone(&e.instance))
    }

    /// The federal slot's plugin, if active.
    pub fn federal(&self) -> Option<Arc<dyn RegionPlugin>> {
        Self::active_entry(&self.federal).map(|e| Arc::clone(&e.instance))
    }

    /// Legacy alias for [`local`](Self::local).
    pub fn active(&self) -> Option<Arc<dyn RegionPlugin>> {
        self.local()
    }

    /// All active plugins, federal first, as `(name, instance)` pairs.
    /// Empty or errored slots contribute nothing.
    pub fn all(&self) -> Vec<(String, Arc<dyn RegionPlugin>)> {
        [&self.federal, &self.local]
            .into_iter()
            .filter_map(|slot| Self::active_entry(slot))
            .map(|e| (e.name.clone(), Arc::clone(&e.instance)))
            .collect()
    }

    /// True iff the local slot holds an active plugin.
    pub fn has_active(&self) -> bool {
        Self::active_entry(&self.local).is_some()
    }

    /// Health of the active local plugin.
    ///
    /// Returns `None` when no active local plugin exists. A rejecting
    /// `health_check()` is converted into a synthesized unhealthy report;
    /// health probing never errors.
    pub async fn health(&self) -> Option<PluginHealth> {
        let entry = Self::active_entry(&self.local)?;
        match entry.instance.health_check().await {
            Ok(health) => Some(health),
            Err(e) => {
                warn!(plugin = %entry.name, error = %e, "health check failed");
                Some(PluginHealth::unhealthy(e.to_string()))
            }
        }
    }

    /// Snapshot of both slots for status reporting.
    pub fn status(&self) -> RegistryStatus {
        let snapshot = |entry: &Option<RegisteredPlugin>| {
            entry.as_ref().map(|e| SlotStatus {
                name: e.name.clone(),
                state: e.state,
                last_error: e.last_error.clone(),
                loaded_at: e.loaded_at,
            })
        };
        RegistryStatus {
            has_plugin: self.local.is_some(),
            local: snapshot(&self.local),
            federal: snapshot(&self.federal),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use civitas_core::records::{CampaignFinanceData, Meeting, Proposition, Representative};
    use civitas_core::types::{DataType, RegionInfo};

    use super::*;

    /// Minimal plugin with scriptable initialize/destroy/health behavior.
    struct TestPlugin {
        name: String,
        fail_initialize: bool,
        fail_health: bool,
        fail_destroy: bool,
        destroy_count: Arc<AtomicUsize>,
    }

    impl TestPlugin {
        fn named(name: &str) -> Self {
            Self {
                name: name.to_string(),
                fail_initialize: false,
                fail_health: false,
                fail_destroy: false,
                destroy_count: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing_initialize(name: &str) -> Self {
            Self {
                fail_initialize: true,
                ..Self::named(name)
            }
        }

        fn failing_health(name: &str) -> Self {
            Self {
                fail_health: true,
                ..Self::named(name)
            }
        }

        fn failing_destroy(name: &str) -> Self {
            Self {
                fail_destroy: true,
                ..Self::named(name)
            }
        }
    }

    #[async_trait]
    impl RegionPlugin for TestPlugin {
        fn name(&self) -> &str {
            &self.name
        }

        fn version(&self) -> semver::Version {
            semver::Version::new(0, 1, 0)
        }

        fn region_info(&self) -> RegionInfo {
            RegionInfo {
                id: self.name.clone(),
                name: self.name.clone(),
                description: String::new(),
                timezone: "UTC".to_string(),
                data_source_urls: vec![],
            }
        }

        fn supported_data_types(&self) -> Vec<DataType> {
            vec![]
        }

        async fn initialize(
            &self,
            _config: Option<&serde_json::Value>,
        ) -> Result<(), CivitasError> {
            if self.fail_initialize {
                Err(CivitasError::Initialization {
                    name: self.name.clone(),
                    message: "scripted failure".to_string(),
                    source: None,
                })
            } else {
                Ok(())
            }
        }

        async fn destroy(&self) -> Result<(), CivitasError> {
            self.destroy_count.fetch_add(1, Ordering::SeqCst);
            if self.fail_destroy {
                Err(CivitasError::Pipeline {
                    message: "scripted teardown failure".to_string(),
                    source: None,
                })
            } else {
                Ok(())
            }
        }

        async fn health_check(&self) -> Result<PluginHealth, CivitasError> {
            if self.fail_health {
                Err(CivitasError::HealthCheckFailed {
                    name: self.name.clone(),
                    message: "probe exploded".to_string(),
                })
            } else {
                Ok(PluginHealth::healthy("operational"))
            }
        }

        async fn fetch_propositions(&self) -> Result<Vec<Proposition>, CivitasError> {
            Ok(vec![])
        }

        async fn fetch_meetings(&self) -> Result<Vec<Meeting>, CivitasError> {
            Ok(vec![])
        }

        async fn fetch_representatives(&self) -> Result<Vec<Representative>, CivitasError> {
            Ok(vec![])
        }

        async fn fetch_campaign_finance(&self) -> Result<CampaignFinanceData, CivitasError> {
            Ok(CampaignFinanceData::default())
        }
    }

    #[tokio::test]
    async fn registering_federal_does_not_touch_local_slot() {
        let mut registry = RegionRegistry::new();
        registry
            .register_local("oakland", Arc::new(TestPlugin::named("oakland")), None)
            .await
            .unwrap();
        registry
            .register_federal("federal", Arc::new(TestPlugin::named("federal")), None)
            .await
            .unwrap();

        assert_eq!(registry.local().unwrap().name(), "oakland");
        assert_eq!(registry.federal().unwrap().name(), "federal");
    }

    #[tokio::test]
    async fn replacing_local_plugin_destroys_old_instance_once() {
        let mut registry = RegionRegistry::new();
        let first = TestPlugin::named("first");
        let destroys = Arc::clone(&first.destroy_count);
        registry
            .register_local("first", Arc::new(first), None)
            .await
            .unwrap();
        registry
            .register_local("second", Arc::new(TestPlugin::named("second")), None)
            .await
            .unwrap();

        assert_eq!(destroys.load(Ordering::SeqCst), 1);
        assert_eq!(registry.local().unwrap().name(), "second");
    }

    #[tokio::test]
    async fn replacement_proceeds_when_old_plugin_destroy_fails() {
        let mut registry = RegionRegistry::new();
        let first = TestPlugin::failing_destroy("first");
        let destroys = Arc::clone(&first.destroy_count);
        registry
            .register_local("first", Arc::new(first), None)
            .await
            .unwrap();

        // The old occupant's destroy rejects; registration of the
        // replacement must still succeed.
        registry
            .register_local("second", Arc::new(TestPlugin::named("second")), None)
            .await
            .unwrap();

        assert_eq!(destroys.load(Ordering::SeqCst), 1);
        assert!(registry.has_active());
        assert_eq!(registry.local().unwrap().name(), "second");
    }

    #[tokio::test]
    async fn unregister_swallows_destroy_failure() {
        let mut registry = RegionRegistry::new();
        registry
            .register_local("flaky", Arc::new(TestPlugin::failing_destroy("flaky")), None)
            .await
            .unwrap();

        registry.unregister().await;
        assert!(!registry.has_active());
        assert!(!registry.status().has_plugin);
    }

    #[tokio::test]
    async fn shutdown_destroys_local_even_when_federal_destroy_fails() {
        let mut registry = RegionRegistry::new();
        let federal = TestPlugin::failing_destroy("federal");
        let local = TestPlugin::named("oakland");
        let federal_destroys = Arc::clone(&federal.destroy_count);
        let local_destroys = Arc::clone(&local.destroy_count);
        registry
            .register_federal("federal", Arc::new(federal), None)
            .await
            .unwrap();
        registry
            .register_local("oakland", Arc::new(local), None)
            .await
            .unwrap();

        registry.shutdown().await;
        assert_eq!(federal_destroys.load(Ordering::SeqCst), 1);
        assert_eq!(local_destroys.load(Ordering::SeqCst), 1);
        assert!(registry.all().is_empty());
    }

    #[tokio::test]
    async fn initialize_failure_leaves_errored_populated_slot() {
        let mut registry = RegionRegistry::new();
        let result = registry
            .register_local("broken", Arc::new(TestPlugin::failing_initialize("broken")), None)
            .await;

        assert!(result.is_err());
        assert!(!registry.has_active());
        assert!(registry.active().is_none());

        let status = registry.status();
        assert!(status.has_plugin);
        let local = status.local.unwrap();
        assert_eq!(local.state, SlotState::Error);
        assert!(local.last_error.unwrap().contains("scripted failure"));
    }

    #[tokio::test]
    async fn health_converts_probe_errors_into_unhealthy_reports() {
        let mut registry = RegionRegistry::new();
        // Initialize succeeds, only the probe fails.
        registry
            .register_local("flaky", Arc::new(TestPlugin::failing_health("flaky")), None)
            .await
            .unwrap();

        let health = registry.health().await.unwrap();
        assert!(!health.healthy);
        assert!(health.message.contains("probe exploded"));
    }

    #[tokio::test]
    async fn health_is_none_without_active_plugin() {
        let registry = RegionRegistry::new();
        assert!(registry.health().await.is_none());
    }

    #[tokio::test]
    async fn all_lists_federal_before_local() {
        let mut registry = RegionRegistry::new();
        registry
            .register_local("oakland", Arc::new(TestPlugin::named("oakland")), None)
            .await
            .unwrap();
        registry
            .register_federal("federal", Arc::new(TestPlugin::named("federal")), None)
            .await
            .unwrap();

        let names: Vec<String> = registry.all().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["federal", "oakland"]);
    }

    #[tokio::test]
    async fn register_alias_targets_local_slot() {
        let mut registry = RegionRegistry::new();
        registry
            .register("legacy", Arc::new(TestPlugin::named("legacy")), None)
            .await
            .unwrap();
        assert_eq!(registry.local().unwrap().name(), "legacy");
        assert!(registry.federal().is_none());
    }

    #[tokio::test]
    async fn unregister_destroys_local_and_is_idempotent() {
        let mut registry = RegionRegistry::new();
        let plugin = TestPlugin::named("oakland");
        let destroys = Arc::clone(&plugin.destroy_count);
        registry
            .register_local("oakland", Arc::new(plugin), None)
            .await
            .unwrap();

        registry.unregister().await;
        assert!(!registry.has_active());
        assert_eq!(destroys.load(Ordering::SeqCst), 1);

        // Second unregister on an empty slot is a no-op.
        registry.unregister().await;
        assert_eq!(destroys.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn shutdown_clears_both_slots() {
        let mut registry = RegionRegistry::new();
        let federal = TestPlugin::named("federal");
        let local = TestPlugin::named("oakland");
        let federal_destroys = Arc::clone(&federal.destroy_count);
        let local_destroys = Arc::clone(&local.destroy_count);
        registry
            .register_federal("federal", Arc::new(federal), None)
            .await
            .unwrap();
        registry
            .register_local("oakland", Arc::new(local), None)
            .await
            .unwrap();

        registry.shutdown().await;
        assert_eq!(federal_destroys.load(Ordering::SeqCst), 1);
        assert_eq!(local_destroys.load(Ordering::SeqCst), 1);
        assert!(registry.all().is_empty());
        assert!(!registry.status().has_plugin);
    }
}
