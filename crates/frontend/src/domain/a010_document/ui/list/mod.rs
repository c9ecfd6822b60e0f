use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a010_document::aggregate::Document;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Document {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.title.as_str(),
                self.kind.as_deref().unwrap_or(""),
                self.file_name.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for Document {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "titulo" => cmp_text(&self.title, &other.title),
            "tipo" => cmp_opt_text(self.kind.as_deref(), other.kind.as_deref()),
            "data_upload" => cmp_opt_text(self.uploaded_at.as_deref(), other.uploaded_at.as_deref()),
            _ => Ordering::Equal,
        }
    }
}

fn file_link(d: &Document) -> AnyView {
    let label = d.file_name.clone().unwrap_or_else(|| "Abrir".to_string());
    match d.url.clone() {
        Some(url) => view! {
            <a href=url target="_blank" rel="noopener" on:click=|e| e.stop_propagation()>
                {icon("download")} " " {label}
            </a>
        }
        .into_any(),
        None => "—".into_any(),
    }
}

#[component]
pub fn DocumentList() -> impl IntoView {
    let columns = vec![
        Column::text("titulo", "Título", |d: &Document| d.title.clone()),
        Column::text("tipo", "Tipo", |d: &Document| d.kind.clone().unwrap_or_default()),
        Column::view("arquivo", "Arquivo", file_link),
        Column::text("data_upload", "Enviado em", |d: &Document| {
            format_date_opt(d.uploaded_at.as_deref())
        }),
    ];

    view! {
        <CrudList<Document>
            page_id="a010_document--list"
            subtitle="Manuais, projetos e certificados"
            columns=columns
            details=open_details
            default_sort="titulo"
            create_label="Enviar documento"
        />
    }
}
