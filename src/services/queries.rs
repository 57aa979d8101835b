//! 带缓存的查询客户端
//!
//! 读取结果按查询键缓存；学生或作业写操作成功后使对应前缀的键失效。
//! 仪表盘相关的键不随实体写操作失效，只依赖 TTL 过期。
//!
//! 每个前缀维护一个失效代数：读取开始后若该前缀被失效过，结果照常返回但不写回缓存。

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::LmsApi;
use crate::cache::{CacheResult, ObjectCache};
use crate::errors::Result;
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    dashboard::responses::DashboardStats,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    submissions::responses::EnrichedSubmission,
};

pub const STUDENTS_KEY: &str = "students";
pub const ASSIGNMENTS_KEY: &str = "assignments";
pub const DASHBOARD_PREFIX: &str = "dashboard";
pub const DASHBOARD_STATS_KEY: &str = "dashboard:stats";

pub fn student_key(id: &str) -> String {
    format!("{STUDENTS_KEY}:{id}")
}

pub fn assignment_key(id: &str) -> String {
    format!("{ASSIGNMENTS_KEY}:{id}")
}

pub fn recent_submissions_key(limit: usize) -> String {
    format!("{DASHBOARD_PREFIX}:recent-submissions:{limit}")
}

#[derive(Clone)]
pub struct QueryClient {
    api: LmsApi,
    cache: Arc<dyn ObjectCache>,
    generations: Arc<DashMap<&'static str, u64>>,
}

impl QueryClient {
    pub fn new(api: LmsApi, cache: Arc<dyn ObjectCache>) -> Self {
        Self {
            api,
            cache,
            generations: Arc::new(DashMap::new()),
        }
    }

    pub fn api(&self) -> &LmsApi {
        &self.api
    }

    fn generation(&self, prefix: &'static str) -> u64 {
        self.generations.get(prefix).map(|g| *g).unwrap_or(0)
    }

    /// 命中缓存则反序列化返回，否则调用 `fetch` 并写入缓存
    async fn cached<T, F, Fut>(&self, prefix: &'static str, key: String, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let CacheResult::Found(json) = self.cache.get_raw(&key).await {
            match serde_json::from_str::<T>(&json) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!("Discarding undecodable cache entry '{}': {}", key, e);
                    self.cache.remove(&key).await;
                }
            }
        }

        let started = self.generation(prefix);
        let value = fetch().await?;
        if self.generation(prefix) != started {
            debug!("Skipping cache write for '{}': invalidated during fetch", key);
            return Ok(value);
        }

        match serde_json::to_string(&value) {
            Ok(json) => {
                self.cache.insert_raw(key.clone(), json).await;
                // 写入与失效交错时撤回刚写入的值
                if self.generation(prefix) != started {
                    self.cache.remove(&key).await;
                }
            }
            Err(e) => warn!("Failed to cache '{}': {}", key, e),
        }
        Ok(value)
    }

    async fn invalidate(&self, prefix: &'static str) {
        debug!("Invalidating queries under '{}'", prefix);
        *self.generations.entry(prefix).or_insert(0) += 1;
        self.cache.invalidate_prefix(prefix).await;
    }

    // ---- 学生 ----

    pub async fn students(&self) -> Result<Vec<Student>> {
        self.cached(STUDENTS_KEY, STUDENTS_KEY.to_string(), || {
            self.api.students().list()
        })
        .await
    }

    /// 空 ID 视为未启用的查询，直接返回 `None`
    pub async fn student(&self, id: &str) -> Result<Option<Student>> {
        if id.is_empty() {
            return Ok(None);
        }
        self.cached(STUDENTS_KEY, student_key(id), || self.api.students().get(id))
            .await
    }

    pub async fn create_student(&self, data: CreateStudentRequest) -> Result<Student> {
        let student = self.api.students().create(data).await?;
        self.invalidate(STUDENTS_KEY).await;
        Ok(student)
    }

    pub async fn update_student(&self, id: &str, data: UpdateStudentRequest) -> Result<Student> {
        let student = self.api.students().update(id, data).await?;
        self.invalidate(STUDENTS_KEY).await;
        Ok(student)
    }

    pub async fn delete_student(&self, id: &str) -> Result<()> {
        self.api.students().delete(id).await?;
        self.invalidate(STUDENTS_KEY).await;
        Ok(())
    }

    // ---- 作业 ----

    pub async fn assignments(&self) -> Result<Vec<Assignment>> {
        self.cached(ASSIGNMENTS_KEY, ASSIGNMENTS_KEY.to_string(), || {
            self.api.assignments().list()
        })
        .await
    }

    pub async fn assignment(&self, id: &str) -> Result<Option<Assignment>> {
        if id.is_empty() {
            return Ok(None);
        }
        self.cached(ASSIGNMENTS_KEY, assignment_key(id), || {
            self.api.assignments().get(id)
        })
        .await
    }

    pub async fn create_assignment(&self, data: CreateAssignmentRequest) -> Result<Assignment> {
        let assignment = self.api.assignments().create(data).await?;
        self.invalidate(ASSIGNMENTS_KEY).await;
        Ok(assignment)
    }

    pub async fn update_assignment(
        &self,
        id: &str,
        data: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        let assignment = self.api.assignments().update(id, data).await?;
        self.invalidate(ASSIGNMENTS_KEY).await;
        Ok(assignment)
    }

    pub async fn delete_assignment(&self, id: &str) -> Result<()> {
        self.api.assignments().delete(id).await?;
        self.invalidate(ASSIGNMENTS_KEY).await;
        Ok(())
    }

    // ---- 仪表盘 ----

    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.cached(DASHBOARD_PREFIX, DASHBOARD_STATS_KEY.to_string(), || {
            self.api.dashboard().stats()
        })
        .await
    }

    pub async fn recent_submissions(&self, limit: usize) -> Result<Vec<EnrichedSubmission>> {
        self.cached(DASHBOARD_PREFIX, recent_submissions_key(limit), || {
            self.api.submissions().recent(Some(limit))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MokaCacheWrapper;
    use crate::config::CacheConfig;
    use crate::models::students::entities::StudentStatus;
    use crate::storage::{MemoryStorage, Storage};
    use crate::utils::SimulatedLatency;

    fn setup() -> (Arc<dyn Storage>, Arc<dyn ObjectCache>, QueryClient) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::seeded());
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new(&CacheConfig {
            default_ttl: 60,
            max_capacity: 100,
        }));
        let api = LmsApi::new(storage.clone(), SimulatedLatency::none());
        (storage, cache.clone(), QueryClient::new(api, cache))
    }

    fn new_student() -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: "Новый".to_string(),
            last_name: "Студент".to_string(),
            email: "new@student.lms.com".to_string(),
            group: "ИВТ-24".to_string(),
            enrolled_at: chrono::NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            status: StudentStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_reads_are_served_from_cache() {
        let (storage, cache, client) = setup();
        let first = client.students().await.unwrap();
        assert!(matches!(cache.get_raw(STUDENTS_KEY).await, CacheResult::Found(_)));

        // 绕过查询客户端直接写入存储，缓存结果不应变化
        storage.create_student(new_student()).await.unwrap();
        assert_eq!(client.students().await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_successful_mutation_invalidates_entity_queries() {
        let (_storage, cache, client) = setup();
        let before = client.students().await.unwrap();
        client.student("1").await.unwrap();

        let created = client.create_student(new_student()).await.unwrap();

        assert_eq!(cache.get_raw(&student_key("1")).await, CacheResult::NotFound);
        let after = client.students().await.unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let (_storage, cache, client) = setup();
        client.assignments().await.unwrap();

        let err = client
            .delete_assignment("missing")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(cache.get_raw(ASSIGNMENTS_KEY).await, CacheResult::Found(_)));
    }

    #[tokio::test]
    async fn test_dashboard_is_not_invalidated_by_entity_mutations() {
        let (_storage, _cache, client) = setup();
        let stats = client.dashboard_stats().await.unwrap();

        client.delete_student("1").await.unwrap();

        assert_eq!(client.dashboard_stats().await.unwrap(), stats);
        assert_eq!(
            client.api().dashboard().stats().await.unwrap().total_students,
            stats.total_students - 1
        );
    }

    #[tokio::test]
    async fn test_empty_id_query_is_disabled() {
        let (_storage, cache, client) = setup();
        assert_eq!(client.student("").await.unwrap(), None);
        assert_eq!(client.assignment("").await.unwrap(), None);
        assert_eq!(cache.get_raw(&student_key("")).await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_treated_as_miss() {
        let (_storage, cache, client) = setup();
        cache
            .insert_raw(DASHBOARD_STATS_KEY.to_string(), "not json".to_string())
            .await;

        let stats = client.dashboard_stats().await.unwrap();
        assert_eq!(stats, client.api().dashboard().stats().await.unwrap());
    }

    #[tokio::test]
    async fn test_second_recent_submissions_read_hits_cache() {
        let (storage, cache, client) = setup();
        let first = client.recent_submissions(3).await.unwrap();
        assert!(first.iter().all(|s| s.student.is_some() && s.assignment.is_some()));

        // 缓存中的 JSON 必须能还原为同样的富化提交
        let CacheResult::Found(json) = cache.get_raw(&recent_submissions_key(3)).await else {
            panic!("recent submissions were not cached");
        };
        let decoded: Vec<EnrichedSubmission> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, first);

        // 存储变化后第二次读取仍返回缓存值
        storage.delete_student(&first[0].submission.student_id).await.unwrap();
        storage.delete_assignment(&first[0].submission.assignment_id).await.unwrap();
        assert_eq!(client.recent_submissions(3).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_second_dashboard_stats_read_hits_cache() {
        let (storage, cache, client) = setup();
        let first = client.dashboard_stats().await.unwrap();

        let CacheResult::Found(json) = cache.get_raw(DASHBOARD_STATS_KEY).await else {
            panic!("dashboard stats were not cached");
        };
        assert_eq!(serde_json::from_str::<DashboardStats>(&json).unwrap(), first);

        storage.create_student(new_student()).await.unwrap();
        assert_eq!(client.dashboard_stats().await.unwrap(), first);
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_overlapping_mutation_is_not_written_back() {
        let (storage, cache, client) = setup();
        let before = storage.list_students().await.unwrap();

        // 读取先拿到旧数据，随后在返回前发生一次成功的写操作
        let read = client.cached(STUDENTS_KEY, STUDENTS_KEY.to_string(), || async {
            let students = storage.list_students().await;
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            students
        });
        let write = async {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            client.create_student(new_student()).await.unwrap()
        };
        let (stale, created) = tokio::join!(read, write);

        assert_eq!(stale.unwrap(), before);
        assert_eq!(cache.get_raw(STUDENTS_KEY).await, CacheResult::NotFound);
        let fresh = client.students().await.unwrap();
        assert_eq!(fresh.last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_recent_submissions_are_keyed_by_limit() {
        let (_storage, _cache, client) = setup();
        assert_eq!(client.recent_submissions(2).await.unwrap().len(), 2);
        assert_eq!(client.recent_submissions(4).await.unwrap().len(), 4);
    }
}
