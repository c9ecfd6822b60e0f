use contracts::domain::common::EntityId;
use contracts::system::auth::SessionUser;
use web_sys::window;

const SESSION_USER_KEY: &str = "cca_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the logged-in user to localStorage
pub fn save_user(user: &SessionUser) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_USER_KEY, &json);
        }
        Err(e) => log::warn!("failed to serialize session user: {}", e),
    }
}

/// Restore the logged-in user; a corrupt entry is dropped
pub fn load_user() -> Option<SessionUser> {
    let json = get_local_storage()?.get_item(SESSION_USER_KEY).ok()??;
    match serde_json::from_str::<SessionUser>(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("discarding stored session user: {}", e);
            clear_user();
            None
        }
    }
}

pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_USER_KEY);
    }
}

/// Id sent as `X-User-Id` on every request
pub fn current_user_id() -> Option<EntityId> {
    load_user().map(|u| u.id)
}
