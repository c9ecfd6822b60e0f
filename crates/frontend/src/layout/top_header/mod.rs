//! Top bar: sidebar toggle, application title, signed-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modal_stack = use_context::<ModalStackService>();
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        if let Some(stack) = modal_stack {
            stack.clear();
        }
        ctx.reset();
        do_logout(set_auth_state);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menu" } else { "Mostrar menu" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"CCA"</span>
                <span class="top-header__subtitle">"Administração"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| s.user.as_ref()
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_default())}
                    </span>
                    <span class="top-header__role">
                        {move || auth_state.with(|s| s.user.as_ref()
                            .map(|u| u.perfil.label())
                            .unwrap_or_default())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
