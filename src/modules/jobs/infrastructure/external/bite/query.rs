use crate::modules::jobs::domain::JobsSettings;
use urlencoding::encode;

/// Columns requested for every listing fetch.
pub const BITE_COLUMNS: [&str; 3] = ["title", "description", "jobSite"];

/// Sentinel filter value that disables the category filter.
pub const FILTER_ALL: &str = "all";

/// Build the query pairs for the advertisements endpoint.
///
/// Keys follow PHP `http_build_query` bracket notation, which is what the
/// API expects for nested filters (`language[filter][enable]=true`).
/// Pure and infallible; empty settings fields become empty values.
pub fn build_query(settings: &JobsSettings) -> Vec<(String, String)> {
    let mut params = vec![
        ("apikey".to_string(), settings.job_listing_key.clone()),
        ("channel".to_string(), "0".to_string()),
    ];

    for (i, column) in BITE_COLUMNS.iter().enumerate() {
        params.push((format!("columns[{}]", i), (*column).to_string()));
    }

    params.push(("language[filter][enable]".to_string(), "true".to_string()));
    params.push((
        "language[filter][value]".to_string(),
        settings.language.clone(),
    ));
    params.push(("order".to_string(), settings.sorting_direction.clone()));
    params.push(("sort".to_string(), settings.sort_by.clone()));

    if settings.custom_field1 != FILTER_ALL {
        params.push((
            "custom_field1[filter][enable]".to_string(),
            "true".to_string(),
        ));
        params.push((
            "custom_field1[filter][value]".to_string(),
            settings.custom_field1.clone(),
        ));
    }

    params
}

/// URL-encode query pairs into a `k=v&k=v` string.
pub fn query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(custom_field1: &str) -> JobsSettings {
        JobsSettings {
            job_listing_key: "key-123".to_string(),
            language: "en".to_string(),
            sort_by: "date".to_string(),
            sorting_direction: "desc".to_string(),
            custom_field1: custom_field1.to_string(),
            ..Default::default()
        }
    }

    fn value_of<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_base_parameters() {
        let params = build_query(&settings("all"));
        assert_eq!(value_of(&params, "apikey"), Some("key-123"));
        assert_eq!(value_of(&params, "channel"), Some("0"));
        assert_eq!(value_of(&params, "columns[0]"), Some("title"));
        assert_eq!(value_of(&params, "columns[1]"), Some("description"));
        assert_eq!(value_of(&params, "columns[2]"), Some("jobSite"));
        assert_eq!(value_of(&params, "language[filter][enable]"), Some("true"));
        assert_eq!(value_of(&params, "language[filter][value]"), Some("en"));
        assert_eq!(value_of(&params, "order"), Some("desc"));
        assert_eq!(value_of(&params, "sort"), Some("date"));
    }

    #[test]
    fn test_all_sentinel_omits_category_filter() {
        let params = build_query(&settings("all"));
        assert!(!params.iter().any(|(k, _)| k.starts_with("custom_field1")));
    }

    #[test]
    fn test_other_values_enable_category_filter() {
        let params = build_query(&settings("A"));
        assert_eq!(
            value_of(&params, "custom_field1[filter][enable]"),
            Some("true")
        );
        assert_eq!(value_of(&params, "custom_field1[filter][value]"), Some("A"));
    }

    #[test]
    fn test_empty_settings_produce_empty_values_not_panic() {
        let params = build_query(&JobsSettings::default());
        assert_eq!(value_of(&params, "apikey"), Some(""));
        // an empty filter value is not the "all" sentinel
        assert_eq!(value_of(&params, "custom_field1[filter][value]"), Some(""));
    }

    #[test]
    fn test_query_string_encodes_brackets() {
        let qs = query_string(&build_query(&settings("all")));
        assert!(qs.contains("columns%5B0%5D=title"));
        assert!(qs.contains("language%5Bfilter%5D%5Benable%5D=true"));
        assert!(!qs.contains(' '));
    }
}
