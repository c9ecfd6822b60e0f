use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only when the session user holds `permission`
/// (`recurso:acao`).
#[component]
pub fn RequirePermission(
    #[prop(into)] permission: String,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let permission = StoredValue::new(permission);

    view! {
        <Show
            when=move || permission.with_value(|p| auth_state.with(|s| s.has_permission(p)))
            fallback=|| view! {
                <div class="access-denied">"Acesso negado. Você não tem permissão para acessar esta página."</div>
            }
        >
            {children()}
        </Show>
    }
}

/// Component that requires admin privileges
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_admin())
            fallback=|| view! {
                <div class="access-denied">"Acesso negado. Somente administradores."</div>
            }
        >
            {children()}
        </Show>
    }
}
