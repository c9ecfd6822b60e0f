use super::details::open_details;
use crate::domain::a006_warranty::ui::list::status_badge;
use crate::shared::crud::{Column, CrudList};
use crate::shared::date_utils::{format_date_opt, format_naive, today};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a007_warranty_lot::aggregate::WarrantyLot;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for WarrantyLot {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.lot.as_str(),
                self.building_system.as_deref().unwrap_or(""),
                self.description.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for WarrantyLot {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "lote" => cmp_text(&self.lot, &other.lot),
            "sistema" => cmp_opt_text(
                self.building_system.as_deref(),
                other.building_system.as_deref(),
            ),
            "data_entrega" => cmp_opt_text(
                self.delivery_date.as_deref(),
                other.delivery_date.as_deref(),
            ),
            "termino" => self.end_date().cmp(&other.end_date()),
            "quantidade" => self.quantity.cmp(&other.quantity),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn WarrantyLotList() -> impl IntoView {
    let columns = vec![
        Column::text("lote", "Lote", |l: &WarrantyLot| l.lot.clone()),
        Column::text("sistema", "Sistema", |l: &WarrantyLot| {
            l.building_system.clone().unwrap_or_default()
        }),
        Column::text("quantidade", "Qtd.", |l: &WarrantyLot| {
            l.quantity.map(|q| q.to_string()).unwrap_or_default()
        }),
        Column::text("data_entrega", "Entrega", |l: &WarrantyLot| {
            format_date_opt(l.delivery_date.as_deref())
        }),
        Column::text("termino", "Término", |l: &WarrantyLot| {
            l.end_date().map(format_naive).unwrap_or_else(|| "—".into())
        }),
        Column::view("status", "Situação", |l: &WarrantyLot| status_badge(l.status(today()))),
    ];

    view! {
        <CrudList<WarrantyLot>
            page_id="a007_warranty_lot--list"
            subtitle="Garantias concedidas por torre ou lote de entrega"
            columns=columns
            details=open_details
            default_sort="lote"
            create_label="Nova garantia por lote"
        />
    }
}
