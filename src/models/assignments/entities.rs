use serde::{Deserialize, Serialize};

// 作业状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Open,     // 开放提交
    Closed,   // 已截止
    InReview, // 批改中
}

impl AssignmentStatus {
    pub const OPEN: &'static str = "open";
    pub const CLOSED: &'static str = "closed";
    pub const IN_REVIEW: &'static str = "in_review";
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Open => write!(f, "{}", AssignmentStatus::OPEN),
            AssignmentStatus::Closed => write!(f, "{}", AssignmentStatus::CLOSED),
            AssignmentStatus::InReview => write!(f, "{}", AssignmentStatus::IN_REVIEW),
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AssignmentStatus::OPEN => Ok(AssignmentStatus::Open),
            AssignmentStatus::CLOSED => Ok(AssignmentStatus::Closed),
            AssignmentStatus::IN_REVIEW => Ok(AssignmentStatus::InReview),
            _ => Err(format!(
                "Invalid assignment status: '{s}'. Supported: open, closed, in_review"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    // 唯一 ID
    pub id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 截止日期
    pub due_date: chrono::NaiveDate,
    pub status: AssignmentStatus,
    // 作业最高分数
    pub max_score: f64,
    // 冗余的提交计数，创建时为 0，之后不随提交数据重新计算
    pub total_submissions: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_snake_case_names() {
        assert_eq!(AssignmentStatus::InReview.to_string(), "in_review");
        assert_eq!(
            serde_json::to_string(&AssignmentStatus::InReview).unwrap(),
            "\"in_review\""
        );
        assert_eq!(
            serde_json::from_str::<AssignmentStatus>("\"closed\"").unwrap(),
            AssignmentStatus::Closed
        );
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = serde_json::from_str::<AssignmentStatus>("\"archived\"").unwrap_err();
        assert!(err.to_string().contains("Invalid assignment status"));
        assert!("InReview".parse::<AssignmentStatus>().is_err());
    }
}
