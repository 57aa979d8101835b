use once_cell::sync::Lazy;

use crate::models::users::entities::{User, UserRole};

/// 静态账号，密码仅用于比对
pub(crate) struct Credential {
    user: User,
    password: &'static str,
}

impl Credential {
    fn new(id: &str, email: &str, password: &'static str, name: &str, role: UserRole) -> Self {
        Self {
            user: User {
                id: id.to_string(),
                email: email.to_string(),
                name: name.to_string(),
                role,
            },
            password,
        }
    }

    pub(crate) fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email == email && self.password == password
    }

    pub(crate) fn user(&self) -> User {
        self.user.clone()
    }
}

pub(crate) static CREDENTIALS: Lazy<Vec<Credential>> = Lazy::new(|| {
    vec![
        Credential::new("1", "admin@lms.com", "admin", "Администратор", UserRole::Admin),
        Credential::new("2", "teacher@lms.com", "teacher", "Иван Петров", UserRole::Teacher),
    ]
});
