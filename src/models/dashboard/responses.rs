use serde::{Deserialize, Serialize};

/// 仪表盘统计，每次调用时从存储的当前内容重新计算
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    // 仅统计在读学生
    pub total_students: usize,
    pub total_assignments: usize,
    pub total_submissions: usize,
    // 待批改的提交数
    pub pending_reviews: usize,
    // 已评分提交的平均分（四舍五入），没有已评分提交时为 0
    pub average_score: i64,
}
