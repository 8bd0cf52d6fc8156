pub mod client;
pub mod dto;
pub mod fields;
pub mod grouper;
pub mod query;

pub use client::{BiteClient, BiteClientConfig, JobAdsApi, BITE_API_URL};
pub use dto::{FieldOption, FieldSchema, JobAdsResponse, JobRecord};
pub use fields::{map_field_to_jobs, resolve_options};
pub use grouper::{group_by_relations, RELATION_FIELD, RELATION_NAME_KEY};
pub use query::{build_query, query_string};
