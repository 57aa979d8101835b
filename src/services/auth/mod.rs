mod credentials;
pub mod login;

use crate::errors::Result;
use crate::models::{auth::LoginRequest, users::entities::User};
use crate::utils::SimulatedLatency;

#[derive(Clone)]
pub struct AuthService {
    latency: SimulatedLatency,
}

impl AuthService {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }

    // 登录验证
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        login::handle_login(
            self,
            LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }
}
