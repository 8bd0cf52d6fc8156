pub mod modules;
pub mod shared;

pub use modules::jobs::{
    BiteClient, BiteClientConfig, BiteJobsService, JobAdsApi, JobAdsResponse, JobRecord,
    JobsSettings, RelationMatch,
};
pub use shared::errors::{AppError, AppResult};
