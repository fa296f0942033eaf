// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock extraction pipeline for deterministic testing.
//!
//! `MockPipeline` implements `PipelineService` with responses scripted per
//! source URL, failure injection, optional resolution delays, and a recorded
//! call log, enabling fast CI-runnable tests without any scraping.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use civitas_core::types::{DataSourceSpec, ExtractionResult};
use civitas_core::{CivitasError, PipelineService};

/// Build a successful [`ExtractionResult`] wrapping the given items.
pub fn ok_result(items: Vec<serde_json::Value>) -> ExtractionResult {
    ExtractionResult {
        items,
        manifest_version: 1,
        success: true,
        warnings: vec![],
        errors: vec![],
        extraction_time_ms: 1.0,
    }
}

struct Scripted {
    outcome: Result<ExtractionResult, String>,
    delay: Option<Duration>,
}

/// A pipeline whose responses are scripted per source URL.
///
/// Calling `execute` for an unscripted URL fails, so tests notice
/// unexpected fetches instead of silently receiving empty results.
#[derive(Default)]
pub struct MockPipeline {
    scripts: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl MockPipeline {
    /// Create a mock with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful extraction of `items` for `url`.
    pub async fn respond(&self, url: &str, items: Vec<serde_json::Value>) {
        self.respond_with(url, ok_result(items)).await;
    }

    /// Script an exact [`ExtractionResult`] for `url`.
    pub async fn respond_with(&self, url: &str, result: ExtractionResult) {
        self.scripts.lock().await.insert(
            url.to_string(),
            Scripted {
                outcome: Ok(result),
                delay: None,
            },
        );
    }

    /// Script a successful extraction that resolves only after `delay`,
    /// for exercising out-of-completion-order merging.
    pub async fn respond_delayed(
        &self,
        url: &str,
        items: Vec<serde_json::Value>,
        delay: Duration,
    ) {
        self.scripts.lock().await.insert(
            url.to_string(),
            Scripted {
                outcome: Ok(ok_result(items)),
                delay: Some(delay),
            },
        );
    }

    /// Script a rejected execution for `url`.
    pub async fn fail(&self, url: &str, message: &str) {
        self.scripts.lock().await.insert(
            url.to_string(),
            Scripted {
                outcome: Err(message.to_string()),
                delay: None,
            },
        );
    }

    /// URLs executed so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Number of executions so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl PipelineService for MockPipeline {
    async fn execute(
        &self,
        source: &DataSourceSpec,
        _region_id: &str,
    ) -> Result<ExtractionResult, CivitasError> {
        self.calls.lock().await.push(source.url.clone());

        let (outcome, delay) = {
            let scripts = self.scripts.lock().await;
            match scripts.get(&source.url) {
                Some(scripted) => (
                    match &scripted.outcome {
                        Ok(result) => Ok(result.clone()),
                        Err(message) => Err(message.clone()),
                    },
                    scripted.delay,
                ),
                None => {
                    return Err(CivitasError::Pipeline {
                        message: format!("no scripted response for url '{}'", source.url),
                        source: None,
                    });
                }
            }
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        outcome.map_err(|message| CivitasError::Pipeline {
            message,
            source: None,
        })
    }
}
