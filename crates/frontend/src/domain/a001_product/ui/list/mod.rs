use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.name.as_str(),
                self.category.as_deref().unwrap_or(""),
                self.brand.as_deref().unwrap_or(""),
                self.model.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => cmp_text(&self.name, &other.name),
            "categoria" => cmp_opt_text(self.category.as_deref(), other.category.as_deref()),
            "marca" => cmp_opt_text(self.brand.as_deref(), other.brand.as_deref()),
            "modelo" => cmp_opt_text(self.model.as_deref(), other.model.as_deref()),
            "prazo" => self.warranty_months.cmp(&other.warranty_months),
            _ => Ordering::Equal,
        }
    }
}

fn columns() -> Vec<Column<Product>> {
    vec![
        Column::text("nome", "Nome", |p| p.name.clone()),
        Column::text("categoria", "Categoria", |p| p.category.clone().unwrap_or_default()),
        Column::text("marca", "Marca", |p| p.brand.clone().unwrap_or_default()),
        Column::text("modelo", "Modelo", |p| p.model.clone().unwrap_or_default()),
        Column::text("prazo", "Garantia (meses)", |p| {
            p.warranty_months.map(|m| m.to_string()).unwrap_or_default()
        }),
    ]
}

#[component]
pub fn ProductList() -> impl IntoView {
    view! {
        <CrudList<Product>
            page_id="a001_product--list"
            subtitle="Produtos instalados nas unidades"
            columns=columns()
            details=open_details
            default_sort="nome"
            create_label="Novo produto"
        />
    }
}
