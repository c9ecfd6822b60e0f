use contracts::shared::api_error::ApiError;
use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_admin)
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.has_permission(permission))
    }

    pub fn can_read(&self, resource: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.can_read(resource))
    }

    pub fn can_edit(&self, resource: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.can_edit(resource))
    }
}

/// Auth context provider component
///
/// The session is restored synchronously from localStorage so the first
/// render already shows the right shell.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let restored = storage::load_user();
    if let Some(user) = &restored {
        log::debug!("session restored for {}", user.email);
    }
    let (auth_state, set_auth_state) = signal(AuthState { user: restored });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
///
/// The setter is passed in because the call resumes after an `await`,
/// outside the reactive owner that provided the context.
pub async fn do_login(
    email: String,
    senha: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let user = api::login(email, senha).await?;
    log::info!("logged in as {} ({})", user.email, user.perfil.as_str());

    storage::save_user(&user);
    set_auth_state.set(AuthState { user: Some(user) });

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_user();
    set_auth_state.set(AuthState::default());
    log::info!("logged out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Profile;

    fn state(perfil: Profile, permissoes: &[&str]) -> AuthState {
        AuthState {
            user: Some(SessionUser {
                id: 1,
                nome: "Ana".into(),
                email: "ana@cca.com".into(),
                perfil,
                permissoes: permissoes.iter().map(|p| p.to_string()).collect(),
            }),
        }
    }

    #[test]
    fn test_anonymous_state_denies_everything() {
        let anon = AuthState::default();
        assert!(!anon.is_authenticated());
        assert!(!anon.can_read("produtos"));
        assert!(!anon.is_admin());
    }

    #[test]
    fn test_permission_checks_delegate_to_session_user() {
        let viewer = state(Profile::Visualizador, &["faqs:editar"]);
        assert!(viewer.can_read("produtos"));
        assert!(!viewer.can_edit("produtos"));
        assert!(viewer.can_edit("faqs"));
        assert!(state(Profile::Admin, &[]).can_edit("usuarios"));
    }
}
