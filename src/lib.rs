//! LMS Dashboard - 学习管理系统仪表盘数据层
//!
//! 学生、作业的增删改查，提交记录的关联读取，以及仪表盘统计。
//!
//! # 架构
//! - `cache`: 查询缓存（Moka）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 数据访问外观与聚合
//! - `storage`: 数据存储层（内存）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
