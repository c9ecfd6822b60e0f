use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::date_utils::format_date_opt;
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a004_development::aggregate::Development;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Development {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.name.as_str(),
                self.city.as_deref().unwrap_or(""),
                self.builder.as_deref().unwrap_or(""),
                self.address.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for Development {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => cmp_text(&self.name, &other.name),
            "cidade" => cmp_opt_text(self.city.as_deref(), other.city.as_deref()),
            "construtora" => cmp_opt_text(self.builder.as_deref(), other.builder.as_deref()),
            // ISO strings sort chronologically
            "data_entrega" => cmp_opt_text(
                self.delivery_date.as_deref(),
                other.delivery_date.as_deref(),
            ),
            "total_unidades" => self.total_units.cmp(&other.total_units),
            _ => Ordering::Equal,
        }
    }
}

fn city_state(d: &Development) -> String {
    match (d.city.as_deref(), d.state.as_deref()) {
        (Some(city), Some(uf)) if !uf.trim().is_empty() => format!("{} / {}", city, uf.to_uppercase()),
        (Some(city), _) => city.to_string(),
        (None, Some(uf)) => uf.to_uppercase(),
        (None, None) => String::new(),
    }
}

#[component]
pub fn DevelopmentList() -> impl IntoView {
    let columns = vec![
        Column::text("nome", "Nome", |d: &Development| d.name.clone()),
        Column::text("cidade", "Cidade / UF", city_state),
        Column::text("construtora", "Construtora", |d: &Development| d.builder.clone().unwrap_or_default()),
        Column::text("data_entrega", "Entrega", |d: &Development| {
            format_date_opt(d.delivery_date.as_deref())
        }),
        Column::text("total_unidades", "Unidades", |d: &Development| {
            d.total_units.map(|n| n.to_string()).unwrap_or_default()
        }),
    ];

    view! {
        <CrudList<Development>
            page_id="a004_development--list"
            columns=columns
            details=open_details
            default_sort="nome"
            create_label="Novo empreendimento"
        />
    }
}
