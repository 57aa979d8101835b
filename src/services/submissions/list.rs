use super::{SubmissionService, enrich};
use crate::errors::Result;
use crate::models::submissions::responses::EnrichedSubmission;
use crate::utils::SimulatedLatency;

pub async fn list_submissions(service: &SubmissionService) -> Result<Vec<EnrichedSubmission>> {
    SimulatedLatency::wait(service.latency.submissions).await;

    let collections = service.storage.snapshot().await?;
    Ok(enrich::enrich_submissions(&collections))
}
