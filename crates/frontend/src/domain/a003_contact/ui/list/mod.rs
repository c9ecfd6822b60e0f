use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a003_contact::aggregate::Contact;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Contact {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.name.as_str(),
                self.role.as_deref().unwrap_or(""),
                self.phone.as_deref().unwrap_or(""),
                self.email.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for Contact {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => cmp_text(&self.name, &other.name),
            "cargo" => cmp_opt_text(self.role.as_deref(), other.role.as_deref()),
            "telefone" => cmp_opt_text(self.phone.as_deref(), other.phone.as_deref()),
            "email" => cmp_opt_text(self.email.as_deref(), other.email.as_deref()),
            _ => Ordering::Equal,
        }
    }
}

fn email_link(c: &Contact) -> AnyView {
    match c.email.clone().filter(|e| !e.trim().is_empty()) {
        Some(email) => {
            let href = format!("mailto:{}", email);
            view! { <a href=href on:click=|e| e.stop_propagation()>{email}</a> }.into_any()
        }
        None => "—".into_any(),
    }
}

#[component]
pub fn ContactList() -> impl IntoView {
    let columns = vec![
        Column::text("nome", "Nome", |c: &Contact| c.name.clone()),
        Column::text("cargo", "Cargo", |c: &Contact| c.role.clone().unwrap_or_default()),
        Column::text("telefone", "Telefone", |c: &Contact| c.phone.clone().unwrap_or_default()),
        Column::view("email", "E-mail", email_link),
    ];

    view! {
        <CrudList<Contact>
            page_id="a003_contact--list"
            subtitle="Síndicos, zeladores e contatos técnicos"
            columns=columns
            details=open_details
            default_sort="nome"
            create_label="Novo contato"
        />
    }
}
