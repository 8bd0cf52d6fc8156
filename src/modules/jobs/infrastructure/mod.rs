pub mod external;

pub use external::bite::{BiteClient, BiteClientConfig, JobAdsApi};
