use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (senha, set_senha) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let senha_val = senha.get();
        if email_val.is_empty() || senha_val.is_empty() {
            set_error_message.set(Some("Informe e-mail e senha.".into()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // On success the auth state flips and AppShell swaps in the main layout
            if let Err(e) = do_login(email_val, senha_val, set_auth_state).await {
                log::warn!("login failed: {}", e);
                set_error_message.set(Some(e.to_string()));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"CCA"</h1>
                <h2>"Acesso ao sistema"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="usuario@empresa.com.br"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="senha">"Senha"</label>
                        <input
                            type="password"
                            id="senha"
                            autocomplete="current-password"
                            prop:value=move || senha.get()
                            on:input=move |ev| set_senha.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
