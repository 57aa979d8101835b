//! 提交关联
//!
//! 在读取时按 ID 查找当前的学生和作业记录，找不到时留空。

use crate::models::{
    assignments::entities::Assignment,
    students::entities::Student,
    submissions::{entities::Submission, responses::EnrichedSubmission},
};
use crate::storage::Collections;

/// 默认的最近提交条数
pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub fn enrich_submission(
    submission: &Submission,
    students: &[Student],
    assignments: &[Assignment],
) -> EnrichedSubmission {
    EnrichedSubmission {
        student: students
            .iter()
            .find(|s| s.id == submission.student_id)
            .cloned(),
        assignment: assignments
            .iter()
            .find(|a| a.id == submission.assignment_id)
            .cloned(),
        submission: submission.clone(),
    }
}

/// 按存储顺序关联全部提交
pub fn enrich_submissions(collections: &Collections) -> Vec<EnrichedSubmission> {
    collections
        .submissions
        .iter()
        .map(|sub| enrich_submission(sub, &collections.students, &collections.assignments))
        .collect()
}

/// 按提交时间倒序取前 `limit` 条（稳定排序，同一时间的记录保持原顺序）
pub fn most_recent(mut enriched: Vec<EnrichedSubmission>, limit: usize) -> Vec<EnrichedSubmission> {
    enriched.sort_by(|a, b| b.submission.submitted_at.cmp(&a.submission.submitted_at));
    enriched.truncate(limit);
    enriched
}
