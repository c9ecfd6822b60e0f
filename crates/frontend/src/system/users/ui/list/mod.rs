use contracts::domain::common::EntityId;
use contracts::system::auth::{read_permission, Profile};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::ui::Badge;
use crate::shared::crud::list::alert;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_opt_text, cmp_text, create_sort_toggle, filter_list, get_sort_indicator,
    highlight_matches, matches_any, sort_list, SearchInput, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;
use crate::system::users::api;
use crate::system::users::ui::details::{CreateUserForm, EditUserForm, ResetPasswordForm};

const USERS_RESOURCE: &str = "usuarios";

impl Searchable for User {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any([self.nome.as_str(), self.email.as_str(), self.perfil.label()], filter)
    }
}

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => cmp_text(&self.nome, &other.nome),
            "email" => cmp_text(&self.email, &other.email),
            "perfil" => cmp_text(self.perfil.label(), other.perfil.label()),
            "ativo" => self.ativo.cmp(&other.ativo),
            "ultimo_acesso" => cmp_opt_text(
                self.ultimo_acesso.as_deref(),
                other.ultimo_acesso.as_deref(),
            ),
            _ => Ordering::Equal,
        }
    }
}

/// What the dialog slot currently shows
#[derive(Clone)]
enum Dialog {
    None,
    Create,
    Edit(User),
    Password(EntityId, String),
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequirePermission permission=read_permission(USERS_RESOURCE)>
            <UsersList />
        </RequirePermission>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.with(|s| s.can_edit(USERS_RESOURCE)));
    let current_user_id = Signal::derive(move || auth_state.with(|s| s.user.as_ref().map(|u| u.id)));

    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let dialog = RwSignal::new(Dialog::None);
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("nome".to_string());
    let sort_ascending = RwSignal::new(true);

    let visible = Signal::derive(move || {
        let mut rows = filter_list(all_users.get(), &search.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => all_users.set(data),
                Err(e) => {
                    log::error!("usuarios: list failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let delete_user = move |user: User| {
        if current_user_id.get_untracked() == Some(user.id) {
            alert("Você não pode excluir o próprio usuário.");
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Excluir o usuário \"{}\"?", user.email))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            if let Err(e) = api::delete_user(user.id).await {
                alert(&format!("Não foi possível excluir: {}", e));
            }
            load_data();
        });
    };

    load_data();

    let header = move |field: &'static str, title: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=create_sort_toggle(field, sort_field, sort_ascending)
            >
                {title}
                <span class="table__sort-indicator">
                    {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                </span>
            </th>
        }
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Usuários" subtitle="Contas de acesso ao sistema">
                <SearchInput value=search on_change=Callback::new(move |v: String| search.set(v)) />
                <Show when=move || can_edit.get()>
                    <button class="button button--primary" on:click=move |_| dialog.set(Dialog::Create)>
                        {icon("plus")}
                        "Novo usuário"
                    </button>
                </Show>
                <button
                    class="button button--secondary"
                    on:click=move |_| load_data()
                    disabled=move || loading.get()
                >
                    {icon("refresh")}
                    {move || if loading.get() { "Carregando..." } else { "Atualizar" }}
                </button>
            </PageHeader>

            <div class="page__content">
                <ErrorBanner message=error />

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {header("nome", "Nome")}
                                {header("email", "E-mail")}
                                {header("perfil", "Perfil")}
                                {header("ativo", "Situação")}
                                {header("ultimo_acesso", "Último acesso")}
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let filter = search.get();
                                visible.get().into_iter().map(|user| {
                                    let for_edit = user.clone();
                                    let for_password = (user.id, user.email.clone());
                                    let for_delete = user.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{highlight_matches(&user.nome, &filter)}</td>
                                            <td class="table__cell">{highlight_matches(&user.email, &filter)}</td>
                                            <td class="table__cell">
                                                <Badge variant={if user.perfil == Profile::Admin { "warning" } else { "neutral" }}>
                                                    {user.perfil.label()}
                                                </Badge>
                                            </td>
                                            <td class="table__cell">
                                                {if user.ativo {
                                                    view! { <Badge variant="success">"Ativo"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge variant="error">"Inativo"</Badge> }.into_any()
                                                }}
                                            </td>
                                            <td class="table__cell">{format_date_opt(user.ultimo_acesso.as_deref())}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Show when=move || can_edit.get()>
                                                    <button
                                                        class="button button--ghost"
                                                        title="Editar"
                                                        on:click={
                                                            let u = for_edit.clone();
                                                            move |_| dialog.set(Dialog::Edit(u.clone()))
                                                        }
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--ghost"
                                                        title="Redefinir senha"
                                                        on:click={
                                                            let (id, label) = for_password.clone();
                                                            move |_| dialog.set(Dialog::Password(id, label.clone()))
                                                        }
                                                    >
                                                        {icon("key")}
                                                    </button>
                                                    <button
                                                        class="button button--ghost"
                                                        title="Excluir"
                                                        on:click={
                                                            let u = for_delete.clone();
                                                            move |_| delete_user(u.clone())
                                                        }
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                {move || match dialog.get() {
                    Dialog::None => ().into_any(),
                    Dialog::Create => view! {
                        <CreateUserForm
                            on_close=move || dialog.set(Dialog::None)
                            on_created=move || {
                                dialog.set(Dialog::None);
                                load_data();
                            }
                        />
                    }.into_any(),
                    Dialog::Edit(user) => view! {
                        <EditUserForm
                            user=user
                            on_close=move || dialog.set(Dialog::None)
                            on_saved=move || {
                                dialog.set(Dialog::None);
                                load_data();
                            }
                        />
                    }.into_any(),
                    Dialog::Password(id, label) => view! {
                        <ResetPasswordForm
                            user_id=id
                            user_label=label
                            on_close=move || dialog.set(Dialog::None)
                            on_done=move || {
                                dialog.set(Dialog::None);
                                alert("Senha redefinida.");
                            }
                        />
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
