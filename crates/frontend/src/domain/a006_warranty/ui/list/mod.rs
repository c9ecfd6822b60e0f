use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::date_utils::{format_date_opt, format_naive, today};
use crate::shared::list_utils::{cmp_opt_text, matches_any, Searchable, Sortable};
use contracts::domain::a006_warranty::aggregate::{Warranty, WarrantyStatus};
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Warranty {
    fn matches_filter(&self, filter: &str) -> bool {
        let status = self.status(today()).map(|s| s.label()).unwrap_or("");
        matches_any(
            [
                self.description.as_deref().unwrap_or(""),
                self.terms.as_deref().unwrap_or(""),
                status,
            ],
            filter,
        )
    }
}

/// Expired first, then expiring, then valid; undated last
fn status_rank(status: Option<WarrantyStatus>) -> u8 {
    match status {
        Some(WarrantyStatus::Vencida) => 0,
        Some(WarrantyStatus::AVencer) => 1,
        Some(WarrantyStatus::Vigente) => 2,
        None => 3,
    }
}

impl Sortable for Warranty {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "descricao" => cmp_opt_text(self.description.as_deref(), other.description.as_deref()),
            "data_inicio" => cmp_opt_text(self.start_date.as_deref(), other.start_date.as_deref()),
            "data_fim" => self.effective_end_date().cmp(&other.effective_end_date()),
            "prazo_meses" => self.months.cmp(&other.months),
            "status" => {
                let today = today();
                status_rank(self.status(today))
                    .cmp(&status_rank(other.status(today)))
                    .then_with(|| self.effective_end_date().cmp(&other.effective_end_date()))
            }
            _ => Ordering::Equal,
        }
    }
}

pub fn status_badge(status: Option<WarrantyStatus>) -> AnyView {
    match status {
        Some(status) => view! { <span class=status.badge_class()>{status.label()}</span> }.into_any(),
        None => view! { <span class="badge badge--neutral">"Sem data"</span> }.into_any(),
    }
}

#[component]
pub fn WarrantyList() -> impl IntoView {
    let columns = vec![
        Column::text("descricao", "Descrição", |w: &Warranty| {
            w.description.clone().unwrap_or_default()
        }),
        Column::text("data_inicio", "Início", |w: &Warranty| format_date_opt(w.start_date.as_deref())),
        Column::text("data_fim", "Término", |w: &Warranty| {
            w.effective_end_date().map(format_naive).unwrap_or_else(|| "—".into())
        }),
        Column::text("prazo_meses", "Prazo (meses)", |w: &Warranty| {
            w.months.map(|m| m.to_string()).unwrap_or_default()
        }),
        Column::view("status", "Situação", |w: &Warranty| status_badge(w.status(today()))),
    ];

    view! {
        <CrudList<Warranty>
            page_id="a006_warranty--list"
            subtitle="Garantias de produtos por unidade"
            columns=columns
            details=open_details
            default_sort="status"
            create_label="Nova garantia"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_sort_puts_expired_first() {
        let expired = Warranty {
            start_date: Some("2000-01-01".into()),
            end_date: Some("2001-01-01".into()),
            ..Default::default()
        };
        let valid = Warranty {
            start_date: Some("2000-01-01".into()),
            end_date: Some("2999-01-01".into()),
            ..Default::default()
        };
        let undated = Warranty::default();
        assert_eq!(expired.compare_by_field(&valid, "status"), Ordering::Less);
        assert_eq!(valid.compare_by_field(&undated, "status"), Ordering::Less);
    }
}
