//! Custom-field label resolution
//!
//! The API exposes custom fields (job category and the like) as opaque
//! codes; each field's schema carries an `options` list mapping codes to
//! display labels. Resolution is generic over the field name so any custom
//! field can be relabeled, not just `custom_field1`.

use serde_json::Value;

use super::dto::{JobAdsResponse, JobRecord};

/// Resolve a field's options into ordered `(code, label)` pairs.
///
/// Returns an empty list when the field or its options are absent from the
/// response; never fails. Pair order follows the schema's option order.
pub fn resolve_options(response: &JobAdsResponse, field_name: &str) -> Vec<(String, String)> {
    response
        .fields
        .get(field_name)
        .map(|schema| {
            schema
                .options
                .iter()
                .map(|option| (option.id.clone(), option.label.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Rewrite each job's `field_name` code into its resolved label.
///
/// Jobs whose value has no matching option (or is not a string) keep their
/// raw value. Never drops jobs; order- and length-preserving.
pub fn map_field_to_jobs(
    jobs: Vec<JobRecord>,
    response: &JobAdsResponse,
    field_name: &str,
) -> Vec<JobRecord> {
    let labels = resolve_options(response, field_name);

    jobs.into_iter()
        .map(|mut job| {
            let resolved = job
                .get(field_name)
                .and_then(Value::as_str)
                .and_then(|raw| labels.iter().find(|(id, _)| id == raw))
                .map(|(_, label)| label.clone());

            if let Some(label) = resolved {
                job.insert(field_name.to_string(), Value::String(label));
            }
            job
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response() -> JobAdsResponse {
        serde_json::from_value(json!({
            "advertisements": [],
            "fields": {
                "custom_field1": {
                    "options": [
                        {"id": "A", "label": "Remote"},
                        {"id": "B", "label": "Onsite"}
                    ]
                }
            }
        }))
        .unwrap()
    }

    fn job(code: &str) -> JobRecord {
        match json!({"title": "Dev", "custom_field1": code}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_resolve_options_preserves_schema_order() {
        let options = resolve_options(&response(), "custom_field1");
        assert_eq!(
            options,
            vec![
                ("A".to_string(), "Remote".to_string()),
                ("B".to_string(), "Onsite".to_string())
            ]
        );
    }

    #[test]
    fn test_resolve_options_absent_field_is_empty() {
        assert!(resolve_options(&response(), "custom_field2").is_empty());
        assert!(resolve_options(&JobAdsResponse::default(), "custom_field1").is_empty());
    }

    #[test]
    fn test_map_field_rewrites_known_codes() {
        let jobs = map_field_to_jobs(
            vec![job("A"), job("B"), job("A")],
            &response(),
            "custom_field1",
        );
        let values: Vec<_> = jobs
            .iter()
            .map(|j| j["custom_field1"].as_str().unwrap())
            .collect();
        assert_eq!(values, vec!["Remote", "Onsite", "Remote"]);
    }

    #[test]
    fn test_map_field_leaves_unknown_codes_untouched() {
        let jobs = map_field_to_jobs(vec![job("Z")], &response(), "custom_field1");
        assert_eq!(jobs[0]["custom_field1"], json!("Z"));
    }

    #[test]
    fn test_map_field_never_drops_jobs_and_keeps_other_keys() {
        let jobs = map_field_to_jobs(vec![job("A"), job("Z")], &response(), "custom_field1");
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0]["title"], json!("Dev"));
        assert_eq!(jobs[1]["title"], json!("Dev"));
    }

    #[test]
    fn test_map_field_tolerates_non_string_values() {
        let mut weird = job("A");
        weird.insert("custom_field1".to_string(), json!(42));
        let jobs = map_field_to_jobs(vec![weird], &response(), "custom_field1");
        assert_eq!(jobs[0]["custom_field1"], json!(42));
    }
}
