//! 业务逻辑层
//!
//! [`LmsApi`] 是调用方唯一使用的入口，每个操作先等待模拟延迟，再访问存储。

pub mod assignments;
pub mod auth;
pub mod dashboard;
pub mod queries;
pub mod students;
pub mod submissions;

use std::sync::Arc;

use crate::storage::Storage;
use crate::utils::SimulatedLatency;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use queries::QueryClient;
pub use students::StudentService;
pub use submissions::SubmissionService;

/// 数据访问外观
#[derive(Clone)]
pub struct LmsApi {
    auth: AuthService,
    students: StudentService,
    assignments: AssignmentService,
    submissions: SubmissionService,
    dashboard: DashboardService,
}

impl LmsApi {
    pub fn new(storage: Arc<dyn Storage>, latency: SimulatedLatency) -> Self {
        Self {
            auth: AuthService::new(latency),
            students: StudentService::new(storage.clone(), latency),
            assignments: AssignmentService::new(storage.clone(), latency),
            submissions: SubmissionService::new(storage.clone(), latency),
            dashboard: DashboardService::new(storage, latency),
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn students(&self) -> &StudentService {
        &self.students
    }

    pub fn assignments(&self) -> &AssignmentService {
        &self.assignments
    }

    pub fn submissions(&self) -> &SubmissionService {
        &self.submissions
    }

    pub fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        assignments::{
            entities::AssignmentStatus,
            requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
        },
        students::{
            entities::{Student, StudentStatus},
            requests::{CreateStudentRequest, UpdateStudentRequest},
        },
        submissions::entities::{Submission, SubmissionStatus},
    };
    use crate::storage::{Collections, MemoryStorage};
    use std::collections::HashSet;
    use std::time::Duration;

    fn api_with(collections: Collections) -> LmsApi {
        LmsApi::new(
            Arc::new(MemoryStorage::with_collections(collections)),
            SimulatedLatency::none(),
        )
    }

    fn seeded_api() -> LmsApi {
        LmsApi::new(Arc::new(MemoryStorage::seeded()), SimulatedLatency::none())
    }

    fn student(id: &str, status: StudentStatus) -> Student {
        Student {
            id: id.to_string(),
            first_name: "Анна".to_string(),
            last_name: "Соколова".to_string(),
            email: format!("student{id}@lms.com"),
            group: "ИВТ-21".to_string(),
            enrolled_at: chrono::NaiveDate::from_ymd_opt(2022, 9, 1).unwrap(),
            status,
        }
    }

    fn submission(
        id: &str,
        student_id: &str,
        minutes: i64,
        score: Option<f64>,
        status: SubmissionStatus,
    ) -> Submission {
        let base = chrono::DateTime::parse_from_rfc3339("2024-11-01T10:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        Submission {
            id: id.to_string(),
            student_id: student_id.to_string(),
            assignment_id: "a1".to_string(),
            submitted_at: base + chrono::Duration::minutes(minutes),
            score,
            status,
        }
    }

    fn new_student() -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: "Игорь".to_string(),
            last_name: "Лебедев".to_string(),
            email: "lebedev@student.lms.com".to_string(),
            group: "ПИ-23".to_string(),
            enrolled_at: chrono::NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
            status: StudentStatus::Active,
        }
    }

    fn new_assignment() -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            title: "Контрольная работа".to_string(),
            description: "Линейная алгебра".to_string(),
            due_date: chrono::NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            status: AssignmentStatus::Open,
            max_score: 30.0,
        }
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let api = seeded_api();
        let mut ids: HashSet<String> = api
            .students()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();

        for _ in 0..50 {
            let created = api.students().create(new_student()).await.unwrap();
            assert!(ids.insert(created.id), "duplicate student id");
        }

        let mut assignment_ids = HashSet::new();
        for _ in 0..50 {
            let created = api.assignments().create(new_assignment()).await.unwrap();
            assert!(assignment_ids.insert(created.id), "duplicate assignment id");
        }
    }

    #[tokio::test]
    async fn test_empty_patch_leaves_student_unchanged() {
        let api = seeded_api();
        let before = api.students().get("2").await.unwrap().unwrap();

        let after = api
            .students()
            .update("2", UpdateStudentRequest::default())
            .await
            .unwrap();

        assert_eq!(after, before);
        assert_eq!(
            serde_json::to_string(&after).unwrap(),
            serde_json::to_string(&before).unwrap()
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails_and_keeps_length() {
        let api = seeded_api();
        let len = api.students().list().await.unwrap().len();

        let err = api
            .students()
            .update(
                "missing",
                UpdateStudentRequest {
                    first_name: Some("Никто".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.message(), "Студент не найден");
        assert_eq!(api.students().list().await.unwrap().len(), len);

        let err = api
            .assignments()
            .update("missing", UpdateAssignmentRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Задание не найдено");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_absent() {
        let api = seeded_api();
        let created = api.assignments().create(new_assignment()).await.unwrap();

        api.assignments().delete(&created.id).await.unwrap();

        assert_eq!(api.assignments().get(&created.id).await.unwrap(), None);
        assert!(
            api.assignments()
                .delete(&created.id)
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_created_assignment_has_zero_submissions() {
        let api = seeded_api();
        let request: CreateAssignmentRequest = serde_json::from_value(serde_json::json!({
            "title": "Эссе",
            "description": "История вычислительной техники",
            "dueDate": "2025-01-15",
            "status": "open",
            "maxScore": 10,
            "totalSubmissions": 99
        }))
        .unwrap();

        let created = api.assignments().create(request).await.unwrap();

        assert_eq!(created.total_submissions, 0);
        assert_eq!(
            api.assignments()
                .get(&created.id)
                .await
                .unwrap()
                .unwrap()
                .total_submissions,
            0
        );
    }

    #[tokio::test]
    async fn test_dashboard_scenario() {
        let api = api_with(Collections {
            students: vec![
                student("s1", StudentStatus::Active),
                student("s2", StudentStatus::Inactive),
            ],
            assignments: vec![],
            submissions: vec![
                submission("1", "s1", 0, Some(80.0), SubmissionStatus::Graded),
                submission("2", "s2", 5, Some(100.0), SubmissionStatus::Graded),
                submission("3", "s1", 10, None, SubmissionStatus::Pending),
            ],
        });

        let stats = api.dashboard().stats().await.unwrap();

        assert_eq!(stats.total_students, 1);
        assert_eq!(stats.total_assignments, 0);
        assert_eq!(stats.total_submissions, 3);
        assert_eq!(stats.pending_reviews, 1);
        assert_eq!(stats.average_score, 90);
    }

    #[tokio::test]
    async fn test_dashboard_recomputes_after_mutation() {
        let api = seeded_api();
        let before = api.dashboard().stats().await.unwrap();

        api.students().create(new_student()).await.unwrap();
        api.students()
            .update(
                "4",
                UpdateStudentRequest {
                    status: Some(StudentStatus::Active),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let after = api.dashboard().stats().await.unwrap();
        assert_eq!(after.total_students, before.total_students + 2);
        assert_eq!(after.average_score, before.average_score);
    }

    #[tokio::test]
    async fn test_deleted_student_leaves_submission_without_student() {
        let api = api_with(Collections {
            students: vec![student("s1", StudentStatus::Active)],
            assignments: vec![],
            submissions: vec![submission("1", "s1", 0, None, SubmissionStatus::Pending)],
        });

        api.students().delete("s1").await.unwrap();
        let submissions = api.submissions().list().await.unwrap();

        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].submission.id, "1");
        assert!(submissions[0].student.is_none());
        assert!(submissions[0].assignment.is_none());
    }

    #[tokio::test]
    async fn test_recent_submissions_reflect_current_store() {
        let api = api_with(Collections {
            students: vec![
                student("s1", StudentStatus::Active),
                student("s2", StudentStatus::Active),
            ],
            assignments: vec![],
            submissions: (0..8)
                .map(|i| {
                    let owner = if i % 2 == 0 { "s1" } else { "s2" };
                    submission(&i.to_string(), owner, i, None, SubmissionStatus::Pending)
                })
                .collect(),
        });

        api.students()
            .update(
                "s2",
                UpdateStudentRequest {
                    group: Some("ИВТ-99".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let recent = api.submissions().recent(None).await.unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.submission.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "6", "5", "4", "3"]);
        for item in &recent {
            let joined = item.student.as_ref().unwrap();
            let current = api
                .students()
                .get(&item.submission.student_id)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(joined, &current);
        }

        assert_eq!(api.submissions().recent(Some(2)).await.unwrap().len(), 2);
        assert_eq!(api.submissions().recent(Some(100)).await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_login_through_facade() {
        let api = seeded_api();
        assert!(
            api.auth()
                .login("admin@lms.com", "wrong")
                .await
                .unwrap_err()
                .is_authentication()
        );
        let user = api.auth().login("admin@lms.com", "admin").await.unwrap();
        assert_eq!(user.name, "Администратор");
    }

    #[tokio::test(start_paused = true)]
    async fn test_operations_wait_for_configured_latency() {
        let api = LmsApi::new(Arc::new(MemoryStorage::seeded()), SimulatedLatency::standard());

        let start = tokio::time::Instant::now();
        api.dashboard().stats().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(600));

        let start = tokio::time::Instant::now();
        let err = api.students().delete("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
