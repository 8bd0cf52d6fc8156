/// Job listing module
///
/// Fetches job advertisements from the b-ite ads API, resolves custom-field
/// codes into labels, groups the listings by relation and applies the
/// configured limit.
///
/// Architecture:
/// - Domain: settings value objects
/// - Infrastructure: b-ite HTTP client, DTOs and the transformation steps
/// - Service: the fetch → relabel → group → limit pipeline
pub mod domain;
pub mod infrastructure;
pub mod service;

// Re-exports for easy access
pub use domain::{JobsSettings, RelationMatch};
pub use infrastructure::external::bite::{
    BiteClient, BiteClientConfig, FieldOption, FieldSchema, JobAdsApi, JobAdsResponse, JobRecord,
};
pub use service::BiteJobsService;
