use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, SessionUser};

use crate::shared::api_client;

/// Login with e-mail and password
pub async fn login(email: String, senha: String) -> Result<SessionUser, ApiError> {
    let request = LoginRequest { email, senha };
    let raw = api_client::post_json("/auth/login", &request).await?;
    SessionUser::from_login_response(raw).map_err(ApiError::decode)
}
