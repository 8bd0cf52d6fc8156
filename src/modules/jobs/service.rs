use tracing::error;

use crate::modules::jobs::domain::JobsSettings;
use crate::modules::jobs::infrastructure::external::bite::{
    group_by_relations, map_field_to_jobs, BiteClient, BiteClientConfig, JobAdsApi, JobAdsResponse,
    JobRecord, RELATION_FIELD,
};
use crate::shared::errors::AppResult;

/// Orchestrates one listing fetch: query → fetch → relabel → group → limit.
///
/// The service is stateless per call; the response is threaded through the
/// transformation steps as a value and never stored on the instance, so
/// concurrent or repeated runs cannot observe each other's data.
pub struct BiteJobsService<A: JobAdsApi> {
    api: A,
}

impl BiteJobsService<BiteClient> {
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_api(BiteClient::new()?))
    }

    pub fn with_config(config: BiteClientConfig) -> AppResult<Self> {
        Ok(Self::with_api(BiteClient::with_config(config)?))
    }
}

impl<A: JobAdsApi> BiteJobsService<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Fetch, relabel and group job advertisements.
    ///
    /// Fail-soft by contract: a transport, status or decode failure is
    /// logged once and degrades to an empty listing. The rendering path
    /// never sees an error from here.
    pub async fn fetch_bite_jobs(&self, settings: &JobsSettings) -> Vec<JobRecord> {
        let mut response = match self.api.fetch_job_ads(settings).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error while fetching jobs from Bite API: {}", e);
                JobAdsResponse::default()
            }
        };

        let advertisements = std::mem::take(&mut response.advertisements);

        let mut jobs = Vec::new();
        if !advertisements.is_empty() {
            // Relabel codes first so the frontend sees labels, then group.
            // Under the default RawCode basis the grouping comparison runs
            // against values the relabeling already rewrote.
            jobs = map_field_to_jobs(advertisements, &response, RELATION_FIELD);
            jobs = group_by_relations(jobs, &response, settings.relation_match);
        }

        if settings.limit > 0 {
            jobs.truncate(settings.limit as usize);
        }

        jobs
    }
}
