use super::{SubmissionService, enrich};
use crate::errors::Result;
use crate::models::submissions::responses::EnrichedSubmission;
use crate::utils::SimulatedLatency;

pub async fn recent_submissions(
    service: &SubmissionService,
    limit: usize,
) -> Result<Vec<EnrichedSubmission>> {
    SimulatedLatency::wait(service.latency.submissions).await;

    let collections = service.storage.snapshot().await?;
    let recent = enrich::most_recent(enrich::enrich_submissions(&collections), limit);

    tracing::debug!("Returning {} of {} submissions", recent.len(), collections.submissions.len());
    Ok(recent)
}
