use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a005_unit::aggregate::Unit;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Unit {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.number.as_str(),
                self.block.as_deref().unwrap_or(""),
                self.kind.as_deref().unwrap_or(""),
                self.owner.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for Unit {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "numero" => cmp_text(&self.number, &other.number),
            "bloco" => cmp_opt_text(self.block.as_deref(), other.block.as_deref())
                .then_with(|| cmp_text(&self.number, &other.number)),
            "andar" => self.floor.cmp(&other.floor),
            "tipo" => cmp_opt_text(self.kind.as_deref(), other.kind.as_deref()),
            "area" => self
                .area_m2
                .partial_cmp(&other.area_m2)
                .unwrap_or(Ordering::Equal),
            "proprietario" => cmp_opt_text(self.owner.as_deref(), other.owner.as_deref()),
            _ => Ordering::Equal,
        }
    }
}

fn format_area(u: &Unit) -> String {
    u.area_m2
        .map(|a| format!("{:.2} m²", a).replace('.', ","))
        .unwrap_or_default()
}

#[component]
pub fn UnitList() -> impl IntoView {
    let columns = vec![
        Column::text("bloco", "Bloco", |u: &Unit| u.block.clone().unwrap_or_default()),
        Column::text("numero", "Número", |u: &Unit| u.number.clone()),
        Column::text("andar", "Andar", |u: &Unit| u.floor.map(|f| f.to_string()).unwrap_or_default()),
        Column::text("tipo", "Tipo", |u: &Unit| u.kind.clone().unwrap_or_default()),
        Column::text("area", "Área", format_area),
        Column::text("proprietario", "Proprietário", |u: &Unit| u.owner.clone().unwrap_or_default()),
    ];

    view! {
        <CrudList<Unit>
            page_id="a005_unit--list"
            subtitle="Apartamentos, casas e salas dos empreendimentos"
            columns=columns
            details=open_details
            default_sort="bloco"
            create_label="Nova unidade"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_sort_falls_back_to_number() {
        let a = Unit { number: "101".into(), block: Some("A".into()), ..Default::default() };
        let b = Unit { number: "102".into(), block: Some("A".into()), ..Default::default() };
        assert_eq!(a.compare_by_field(&b, "bloco"), Ordering::Less);
    }

    #[test]
    fn test_area_uses_decimal_comma() {
        let u = Unit { area_m2: Some(52.5), ..Default::default() };
        assert_eq!(format_area(&u), "52,50 m²");
    }
}
