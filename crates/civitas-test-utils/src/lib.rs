// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities shared by Civitas test suites: a scriptable mock
//! extraction pipeline and config fixture builders.

pub mod fixtures;
pub mod mock_pipeline;

pub use fixtures::{region_config_value, source};
pub use mock_pipeline::{ok_result, MockPipeline};
