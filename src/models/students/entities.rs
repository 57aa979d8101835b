use serde::{Deserialize, Serialize};

// 学生状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Active,    // 在读
    Inactive,  // 休学
    Graduated, // 毕业
}

impl StudentStatus {
    pub const ACTIVE: &'static str = "active";
    pub const INACTIVE: &'static str = "inactive";
    pub const GRADUATED: &'static str = "graduated";
}

impl<'de> Deserialize<'de> for StudentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentStatus::Active => write!(f, "{}", StudentStatus::ACTIVE),
            StudentStatus::Inactive => write!(f, "{}", StudentStatus::INACTIVE),
            StudentStatus::Graduated => write!(f, "{}", StudentStatus::GRADUATED),
        }
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            StudentStatus::ACTIVE => Ok(StudentStatus::Active),
            StudentStatus::INACTIVE => Ok(StudentStatus::Inactive),
            StudentStatus::GRADUATED => Ok(StudentStatus::Graduated),
            _ => Err(format!(
                "Invalid student status: '{s}'. Supported: active, inactive, graduated"
            )),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    // 唯一 ID，创建后不可变
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    // 学习小组（自由文本）
    pub group: String,
    // 入学日期
    pub enrolled_at: chrono::NaiveDate,
    pub status: StudentStatus,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_active(&self) -> bool {
        self.status == StudentStatus::Active
    }
}
