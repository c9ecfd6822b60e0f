use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a009_building_system::aggregate::BuildingSystem;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for BuildingSystem {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.name.as_str(),
                self.category.as_deref().unwrap_or(""),
                self.description.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for BuildingSystem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome" => cmp_text(&self.name, &other.name),
            "categoria" => cmp_opt_text(self.category.as_deref(), other.category.as_deref()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn BuildingSystemList() -> impl IntoView {
    let columns = vec![
        Column::text("nome", "Nome", |s: &BuildingSystem| s.name.clone()),
        Column::text("categoria", "Categoria", |s: &BuildingSystem| {
            s.category.clone().unwrap_or_default()
        }),
        Column::text("descricao", "Descrição", |s: &BuildingSystem| {
            s.description.clone().unwrap_or_default()
        }),
    ];

    view! {
        <CrudList<BuildingSystem>
            page_id="a009_building_system--list"
            subtitle="Sistemas construtivos cobertos por garantia e manutenção"
            columns=columns
            details=open_details
            default_sort="nome"
            create_label="Novo sistema"
        />
    }
}
