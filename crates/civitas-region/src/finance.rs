// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Campaign-finance record classification.
//!
//! Filing systems emit committees, contributions, expenditures, and
//! independent expenditures through the same sources without a discriminant
//! tag, so raw items are partitioned by structural shape. The predicate
//! chain below is ordered and first-match-wins; upstream payloads are
//! unambiguous per source, but the classifier itself must stay
//! deterministic. Items matching no shape are dropped, never raised.

use civitas_core::records::CampaignFinanceData;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Shape an untagged raw item was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FinanceShape {
    Contribution,
    Expenditure,
    IndependentExpenditure,
    Committee,
}

/// Classify one raw item by structural inspection.
///
/// Precedence (first match wins):
/// 1. `donorName` -> contribution
/// 2. `payeeName` -> expenditure
/// 3. `supportOrOppose` + `committeeName` -> independent expenditure
/// 4. `sourceSystem` + `type` -> committee
///
/// Upstream does not define behavior for items matching several predicates
/// at once (e.g. both `donorName` and `payeeName`); this order is pinned by
/// tests and must not be reshuffled silently.
fn shape_of(item: &Value) -> Option<FinanceShape> {
    let fields = item.as_object()?;
    if fields.contains_key("donorName") {
        return Some(FinanceShape::Contribution);
    }
    if fields.contains_key("payeeName") {
        return Some(FinanceShape::Expenditure);
    }
    if fields.contains_key("supportOrOppose") && fields.contains_key("committeeName") {
        return Some(FinanceShape::IndependentExpenditure);
    }
    if fields.contains_key("sourceSystem") && fields.contains_key("type") {
        return Some(FinanceShape::Committee);
    }
    None
}

fn into_bucket<T: DeserializeOwned>(item: Value, bucket: &mut Vec<T>) {
    match serde_json::from_value(item) {
        Ok(record) => bucket.push(record),
        Err(e) => debug!(error = %e, "dropping malformed campaign finance item"),
    }
}

/// Partition a pool of raw campaign-finance items into the four typed
/// buckets.
///
/// Bucket order follows pool order. Unclassifiable or malformed items are
/// dropped at debug level; this function never fails on bad input.
pub fn classify(items: Vec<Value>) -> CampaignFinanceData {
    let mut data = CampaignFinanceData::default();
    for item in items {
        match shape_of(&item) {
            Some(FinanceShape::Contribution) => into_bucket(item, &mut data.contributions),
            Some(FinanceShape::Expenditure) => into_bucket(item, &mut data.expenditures),
            Some(FinanceShape::IndependentExpenditure) => {
                into_bucket(item, &mut data.independent_expenditures)
            }
            Some(FinanceShape::Committee) => into_bucket(item, &mut data.committees),
            None => {
                debug!("campaign finance item matched no known shape, dropping");
            }
        }
    }
    data
}
