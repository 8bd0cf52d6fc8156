//! Settings and value objects for one listing fetch
//!
//! Settings arrive from the hosting CMS as loosely typed data, so every
//! field tolerates absence: missing strings decode to empty strings and a
//! missing limit decodes to 0 (unlimited).

use serde::{Deserialize, Serialize};

/// Which side of the options schema a job's `custom_field1` value is
/// compared against when grouping by relation.
///
/// The listing pipeline relabels codes before grouping, so comparing
/// against raw codes only matches when a code and its label coincide.
/// `RawCode` keeps that behavior for parity with the hosting CMS;
/// `ResolvedLabel` compares against the label the relabeling step wrote
/// into the job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationMatch {
    #[default]
    RawCode,
    ResolvedLabel,
}

impl std::fmt::Display for RelationMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationMatch::RawCode => write!(f, "raw_code"),
            RelationMatch::ResolvedLabel => write!(f, "resolved_label"),
        }
    }
}

impl std::str::FromStr for RelationMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw_code" => Ok(RelationMatch::RawCode),
            "resolved_label" => Ok(RelationMatch::ResolvedLabel),
            _ => Err(format!("Invalid relation match basis: {}", s)),
        }
    }
}

/// One pipeline run's input, immutable once built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobsSettings {
    /// API key for the b-ite advertisements endpoint
    pub job_listing_key: String,

    /// Language the listing filter is restricted to (e.g. "en")
    pub language: String,

    /// Column the API sorts by (e.g. "date")
    pub sort_by: String,

    /// Sort order, "asc" or "desc"
    pub sorting_direction: String,

    /// Category filter value; the sentinel "all" disables the filter
    #[serde(rename = "custom_field1")]
    pub custom_field1: String,

    /// Maximum number of jobs to return; 0 means unlimited
    pub limit: u32,

    /// Comparison basis for relation grouping, see [`RelationMatch`]
    pub relation_match: RelationMatch,
}
