use super::AuthService;
use super::credentials::CREDENTIALS;
use crate::errors::{LmsError, Result};
use crate::models::{auth::LoginRequest, users::entities::User};
use crate::utils::SimulatedLatency;

pub(crate) const INVALID_CREDENTIALS: &str = "Неверный email или пароль";

pub async fn handle_login(service: &AuthService, login_request: LoginRequest) -> Result<User> {
    SimulatedLatency::wait(service.latency.login).await;

    // 邮箱与密码必须同时精确匹配
    match CREDENTIALS
        .iter()
        .find(|c| c.matches(&login_request.email, &login_request.password))
    {
        Some(credential) => {
            let user = credential.user();
            tracing::info!("User {} logged in successfully", user.email);
            Ok(user)
        }
        None => Err(LmsError::authentication(INVALID_CREDENTIALS)),
    }
}
