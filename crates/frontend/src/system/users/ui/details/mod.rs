use contracts::domain::common::EntityId;
use contracts::system::auth::Profile;
use contracts::system::users::{
    validate_password, CreateUserDto, ResetPasswordDto, UpdateUserDto, User,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::system::users::api;

fn profile_options() -> Vec<(String, String)> {
    Profile::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect()
}

/// Overlay + dialog used by the three account forms
#[component]
fn UserDialog<F>(title: String, on_close: F, children: Children) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--ghost" on:click=move |_| on_close()>
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn CreateUserForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let form = RwSignal::new(CreateUserDto::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let dto = form.get_untracked();
        if let Err(msg) = dto.validate() {
            set_error_message.set(Some(msg));
            return;
        }

        set_is_saving.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::create_user(&dto).await {
                Ok(()) => {
                    log::info!("user {} created", dto.email);
                    on_created();
                }
                Err(e) => {
                    set_error_message.set(Some(e.to_string()));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <UserDialog title="Novo usuário".to_string() on_close=on_close>
            <form on:submit=on_submit>
                <div class="modal-body">
                    {move || error_message.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <Input
                        label="Nome"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.nome.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.nome = v))
                        disabled=is_saving
                    />
                    <Input
                        label="E-mail"
                        input_type="email"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        disabled=is_saving
                    />
                    <Input
                        label="Senha"
                        input_type="password"
                        required=true
                        value=Signal::derive(move || form.with(|f| f.senha.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.senha = v))
                        disabled=is_saving
                    />
                    <Select
                        label="Perfil"
                        value=Signal::derive(move || form.with(|f| f.perfil.as_str().to_string()))
                        on_change=Callback::new(move |v: String| form.update(|f| f.perfil = Profile::from_str_lossy(&v)))
                        options=Signal::derive(profile_options)
                        disabled=is_saving
                    />
                </div>

                <div class="modal-footer">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close()
                        disabled=move || is_saving.get()
                    >
                        "Cancelar"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Salvando..." } else { "Criar usuário" }}
                    </button>
                </div>
            </form>
        </UserDialog>
    }
}

#[component]
pub fn EditUserForm<F1, F2>(user: User, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let user_id = user.id;
    let form = RwSignal::new(UpdateUserDto::from(&user));
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = form.get_untracked();
        if let Err(msg) = dto.validate() {
            set_error.set(Some(msg));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::update_user(user_id, &dto).await {
                Ok(()) => on_saved(),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <UserDialog title=format!("Editar: {}", user.email) on_close=on_close>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Input
                    label="Nome"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.nome.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.nome = v))
                    disabled=saving
                />
                <Input
                    label="E-mail"
                    input_type="email"
                    required=true
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.email = v))
                    disabled=saving
                />
                <Select
                    label="Perfil"
                    value=Signal::derive(move || form.with(|f| f.perfil.as_str().to_string()))
                    on_change=Callback::new(move |v: String| form.update(|f| f.perfil = Profile::from_str_lossy(&v)))
                    options=Signal::derive(profile_options)
                    disabled=saving
                />
                <div class="form__group">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.ativo)
                            on:change=move |ev| form.update(|f| f.ativo = event_target_checked(&ev))
                            disabled=move || saving.get()
                        />
                        " Ativo"
                    </label>
                </div>
            </div>

            <div class="modal-footer">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_close()
                    disabled=move || saving.get()
                >
                    "Cancelar"
                </button>
                <button class="button button--primary" on:click=on_save disabled=move || saving.get()>
                    {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                </button>
            </div>
        </UserDialog>
    }
}

#[component]
pub fn ResetPasswordForm<F1, F2>(
    user_id: EntityId,
    user_label: String,
    on_close: F1,
    on_done: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let senha = RwSignal::new(String::new());
    let confirmacao = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let value = senha.get_untracked();
        if let Err(msg) = validate_password(&value) {
            set_error.set(Some(msg));
            return;
        }
        if value != confirmacao.get_untracked() {
            set_error.set(Some("As senhas não conferem".into()));
            return;
        }
        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::reset_password(user_id, &ResetPasswordDto { senha: value }).await {
                Ok(()) => on_done(),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <UserDialog title=format!("Redefinir senha: {}", user_label) on_close=on_close>
            <div class="modal-body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Input
                    label="Nova senha"
                    input_type="password"
                    required=true
                    value=senha
                    on_input=Callback::new(move |v| senha.set(v))
                    disabled=saving
                />
                <Input
                    label="Confirmar senha"
                    input_type="password"
                    required=true
                    value=confirmacao
                    on_input=Callback::new(move |v| confirmacao.set(v))
                    disabled=saving
                />
            </div>
            <div class="modal-footer">
                <button class="button button--secondary" on:click=move |_| on_close()>
                    "Cancelar"
                </button>
                <button class="button button--primary" on:click=on_save disabled=move || saving.get()>
                    {move || if saving.get() { "Salvando..." } else { "Redefinir" }}
                </button>
            </div>
        </UserDialog>
    }
}
