//! Relation grouping
//!
//! A relation is a resolved category label used to filter and tag jobs for
//! grouped display. The relation map is rebuilt from the response's
//! `custom_field1` options on every call; nothing is carried across runs.

use serde_json::Value;

use crate::modules::jobs::domain::RelationMatch;

use super::dto::{JobAdsResponse, JobRecord};
use super::fields::resolve_options;

/// The custom field relations are derived from.
pub const RELATION_FIELD: &str = "custom_field1";

/// Key under which the resolved relation label is attached to a job.
pub const RELATION_NAME_KEY: &str = "relationName";

/// Filter jobs to those matching a known relation, tagging each match with
/// `relationName`.
///
/// For every job, every `(code, label)` relation entry is checked in schema
/// order: under `RawCode` the job's `custom_field1` value is compared to
/// the code, under `ResolvedLabel` to the label. Each match emits its own
/// copy of the job, so a job matching several entries appears once per
/// match; duplicates are deliberate and must not be deduplicated. Jobs
/// without any match are dropped. Survivors keep their input order.
pub fn group_by_relations(
    jobs: Vec<JobRecord>,
    response: &JobAdsResponse,
    basis: RelationMatch,
) -> Vec<JobRecord> {
    let relations = resolve_options(response, RELATION_FIELD);
    let mut grouped = Vec::new();

    for job in jobs {
        for (code, label) in &relations {
            let key = match basis {
                RelationMatch::RawCode => code,
                RelationMatch::ResolvedLabel => label,
            };
            if job.get(RELATION_FIELD).and_then(Value::as_str) == Some(key.as_str()) {
                let mut tagged = job.clone();
                tagged.insert(RELATION_NAME_KEY.to_string(), Value::String(label.clone()));
                grouped.push(tagged);
            }
        }
    }

    grouped
}
