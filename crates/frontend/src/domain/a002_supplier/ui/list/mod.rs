use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a002_supplier::aggregate::Supplier;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Supplier {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.name.as_str(),
                self.cnpj.as_deref().unwrap_or(""),
                self.segment.as_deref().unwrap_or(""),
                self.contact_person.as_deref().unwrap_or(""),
                self.email.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for Supplier {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => cmp_text(&self.name, &other.name),
            "cnpj" => cmp_opt_text(self.cnpj.as_deref(), other.cnpj.as_deref()),
            "ramo" => cmp_opt_text(self.segment.as_deref(), other.segment.as_deref()),
            "responsavel" => cmp_opt_text(
                self.contact_person.as_deref(),
                other.contact_person.as_deref(),
            ),
            "telefone" => cmp_opt_text(self.phone.as_deref(), other.phone.as_deref()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let columns = vec![
        Column::text("nome", "Nome", |s: &Supplier| s.name.clone()),
        Column::text("cnpj", "CNPJ", |s: &Supplier| s.cnpj.clone().unwrap_or_default()),
        Column::text("ramo", "Ramo", |s: &Supplier| s.segment.clone().unwrap_or_default()),
        Column::text("responsavel", "Responsável", |s: &Supplier| {
            s.contact_person.clone().unwrap_or_default()
        }),
        Column::text("telefone", "Telefone", |s: &Supplier| s.phone.clone().unwrap_or_default()),
    ];

    view! {
        <CrudList<Supplier>
            page_id="a002_supplier--list"
            subtitle="Fornecedores e prestadores de serviço"
            columns=columns
            details=open_details
            default_sort="nome"
            create_label="Novo fornecedor"
        />
    }
}
