use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::system::users::{CreateUserDto, ResetPasswordDto, UpdateUserDto, User};

use crate::shared::api_client;

const USERS_PATH: &str = "/usuarios";

fn user_path(id: EntityId) -> String {
    format!("{}/{}", USERS_PATH, id)
}

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    let raw = api_client::get_json(USERS_PATH).await?;
    api_client::decode_rows(raw, serde_json::from_value)
}

/// Create new user
pub async fn create_user(dto: &CreateUserDto) -> Result<(), ApiError> {
    api_client::post_json(USERS_PATH, dto).await.map(|_| ())
}

/// Update profile data (name, e-mail, profile, active flag)
pub async fn update_user(id: EntityId, dto: &UpdateUserDto) -> Result<(), ApiError> {
    api_client::put_json(&user_path(id), dto).await.map(|_| ())
}

/// Delete user
pub async fn delete_user(id: EntityId) -> Result<(), ApiError> {
    api_client::delete(&user_path(id)).await
}

/// Set a new password for the user
pub async fn reset_password(id: EntityId, dto: &ResetPasswordDto) -> Result<(), ApiError> {
    api_client::put_json(&format!("{}/senha", user_path(id)), dto)
        .await
        .map(|_| ())
}
