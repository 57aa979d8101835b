//! 数据模型定义
//!
//! 序列化字段名使用 camelCase，枚举值使用 snake_case。

pub mod assignments;
pub mod auth;
pub mod dashboard;
pub mod students;
pub mod submissions;
pub mod users;
