use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::date_utils::{format_date_opt, today};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a008_preventive::aggregate::Preventive;
use contracts::domain::a008_preventive::schedule::PreventiveStatus;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Preventive {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.activity.as_str(),
                self.periodicity.as_str(),
                self.responsible.as_deref().unwrap_or(""),
                self.notes.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

fn status_rank(status: Option<PreventiveStatus>) -> u8 {
    match status {
        Some(PreventiveStatus::Atrasado) => 0,
        Some(PreventiveStatus::Pendente) => 1,
        Some(PreventiveStatus::Concluido) => 2,
        None => 3,
    }
}

impl Sortable for Preventive {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "atividade" => cmp_text(&self.activity, &other.activity),
            "periodicidade" => self
                .periodicity()
                .map(|p| p.days())
                .cmp(&other.periodicity().map(|p| p.days())),
            "responsavel" => cmp_opt_text(self.responsible.as_deref(), other.responsible.as_deref()),
            "ultima_execucao" => self.last_execution.cmp(&other.last_execution),
            "proxima_execucao" => self
                .next_execution_date()
                .cmp(&other.next_execution_date()),
            "status" => {
                let today = today();
                status_rank(self.effective_status(today))
                    .cmp(&status_rank(other.effective_status(today)))
                    .then_with(|| self.next_execution_date().cmp(&other.next_execution_date()))
            }
            _ => Ordering::Equal,
        }
    }
}

pub fn preventive_status_badge(status: Option<PreventiveStatus>) -> AnyView {
    match status {
        Some(s) => view! { <span class=s.badge_class()>{s.label()}</span> }.into_any(),
        None => view! { <span class="badge badge--neutral">"Sem agenda"</span> }.into_any(),
    }
}

#[component]
pub fn PreventiveList() -> impl IntoView {
    let columns = vec![
        Column::text("atividade", "Atividade", |p: &Preventive| p.activity.clone()),
        Column::text("periodicidade", "Periodicidade", |p: &Preventive| {
            p.periodicity()
                .map(|x| x.label().to_string())
                .unwrap_or_else(|| p.periodicity.clone())
        }),
        Column::text("responsavel", "Responsável", |p: &Preventive| {
            p.responsible.clone().unwrap_or_default()
        }),
        Column::text("ultima_execucao", "Última execução", |p: &Preventive| {
            format_date_opt(p.last_execution.as_deref())
        }),
        Column::text("proxima_execucao", "Próxima execução", |p: &Preventive| {
            format_date_opt(p.next_execution.as_deref())
        }),
        Column::view("status", "Situação", |p: &Preventive| {
            preventive_status_badge(p.effective_status(today()))
        }),
    ];

    view! {
        <CrudList<Preventive>
            page_id="a008_preventive--list"
            subtitle="Plano de manutenção preventiva dos sistemas prediais"
            columns=columns
            details=open_details
            default_sort="status"
            create_label="Nova atividade"
        />
    }
}
