// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Region data-acquisition layer for the Civitas platform.
//!
//! Three cooperating pieces:
//! - [`RegionRegistry`] owns the two plugin slots (federal and local) and
//!   their register/replace/destroy lifecycle;
//! - [`DeclarativePlugin`] adapts one region config plus an extraction
//!   pipeline into the [`RegionPlugin`](civitas_core::RegionPlugin)
//!   contract;
//! - [`PluginLoader`] turns persisted plugin definitions into registered
//!   plugins.

pub mod config;
pub mod declarative;
pub mod finance;
pub mod loader;
pub mod registry;

pub use config::RegionPluginConfig;
pub use declarative::{declarative_adapter_version, DeclarativePlugin};
pub use loader::{PluginDefinition, PluginLoader, FEDERAL_PLUGIN_NAME};
pub use registry::{RegionRegistry, RegistryStatus, SlotState, SlotStatus};
