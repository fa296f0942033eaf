// SPDX-FileCopyrightText: 2026 Civitas Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed civic record models produced by region plugins.
//!
//! All models deserialize from camelCase JSON emitted by the extraction
//! pipeline. Fields are lenient (`Option` + defaults) because upstream
//! payloads come from heterogeneous scraped sources.

use serde::{Deserialize, Serialize};

/// A ballot proposition or legislative measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proposition {
    pub external_id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub election_date: Option<String>,
    pub url: Option<String>,
}

/// A public meeting (council session, committee hearing, town hall).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meeting {
    pub external_id: Option<String>,
    pub title: Option<String>,
    /// Governing body holding the meeting (e.g. "City Council").
    pub body: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub agenda_url: Option<String>,
}

/// An elected representative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Representative {
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub office: Option<String>,
    pub party: Option<String>,
    pub district: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

/// A campaign committee registered with a filing system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Committee {
    /// Filing system the record came from (e.g. "fec", "cal-access").
    pub source_system: Option<String>,
    #[serde(rename = "type")]
    pub committee_type: Option<String>,
    pub committee_id: Option<String>,
    pub name: Option<String>,
    pub candidate_name: Option<String>,
    pub total_receipts: Option<f64>,
}

/// A contribution made to a committee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contribution {
    pub donor_name: Option<String>,
    pub donor_employer: Option<String>,
    pub donor_occupation: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub committee_id: Option<String>,
    pub committee_name: Option<String>,
}

/// An expenditure made by a committee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Expenditure {
    pub payee_name: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub purpose: Option<String>,
    pub committee_id: Option<String>,
    pub committee_name: Option<String>,
}

/// An independent expenditure supporting or opposing a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndependentExpenditure {
    pub support_or_oppose: Option<String>,
    pub committee_name: Option<String>,
    pub candidate_name: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

/// The four-bucket result of a campaign-finance fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignFinanceData {
    pub committees: Vec<Committee>,
    pub contributions: Vec<Contribution>,
    pub expenditures: Vec<Expenditure>,
    pub independent_expenditures: Vec<IndependentExpenditure>,
}

impl CampaignFinanceData {
    /// Total number of classified records across all four buckets.
    pub fn len(&self) -> usize {
        self.committees.len()
            + self.contributions.len()
            + self.expenditures.len()
            + self.independent_expenditures.len()
    }

    /// Returns true if no bucket holds any record.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
