use super::DashboardService;
use crate::errors::Result;
use crate::models::dashboard::responses::DashboardStats;
use crate::storage::Collections;
use crate::utils::SimulatedLatency;

/// 从集合快照计算仪表盘统计
pub fn compute_dashboard_stats(collections: &Collections) -> DashboardStats {
    let graded: Vec<f64> = collections
        .submissions
        .iter()
        .filter(|s| s.is_graded())
        .map(|s| s.score.unwrap_or(0.0))
        .collect();

    let average_score = if graded.is_empty() {
        0
    } else {
        (graded.iter().sum::<f64>() / graded.len() as f64).round() as i64
    };

    DashboardStats {
        total_students: collections.students.iter().filter(|s| s.is_active()).count(),
        total_assignments: collections.assignments.len(),
        total_submissions: collections.submissions.len(),
        pending_reviews: collections
            .submissions
            .iter()
            .filter(|s| s.is_pending())
            .count(),
        average_score,
    }
}

pub async fn get_dashboard_stats(service: &DashboardService) -> Result<DashboardStats> {
    SimulatedLatency::wait(service.latency.stats).await;

    let collections = service.storage.snapshot().await?;
    let stats = compute_dashboard_stats(&collections);

    tracing::debug!(
        "Dashboard stats computed: {} students, {} submissions",
        stats.total_students,
        stats.total_submissions
    );
    Ok(stats)
}
