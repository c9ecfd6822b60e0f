use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::date_utils::format_date_opt;
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a012_bulletin::aggregate::Bulletin;
use leptos::prelude::*;
use std::cmp::Ordering;

const EXCERPT_CHARS: usize = 80;

impl Searchable for Bulletin {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.title.as_str(),
                self.content.as_str(),
                self.author.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for Bulletin {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "titulo" => cmp_text(&self.title, &other.title),
            "autor" => cmp_opt_text(self.author.as_deref(), other.author.as_deref()),
            "data_publicacao" => cmp_opt_text(
                self.published_at.as_deref(),
                other.published_at.as_deref(),
            ),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn BulletinList() -> impl IntoView {
    let columns = vec![
        Column::text("data_publicacao", "Publicação", |b: &Bulletin| {
            format_date_opt(b.published_at.as_deref())
        }),
        Column::text("titulo", "Título", |b: &Bulletin| b.title.clone()),
        Column::text("conteudo", "Resumo", |b: &Bulletin| b.excerpt(EXCERPT_CHARS)),
        Column::text("autor", "Autor", |b: &Bulletin| b.author.clone().unwrap_or_default()),
    ];

    view! {
        <CrudList<Bulletin>
            page_id="a012_bulletin--list"
            subtitle="Comunicados enviados aos moradores"
            columns=columns
            details=open_details
            default_sort="data_publicacao"
            create_label="Novo informativo"
        />
    }
}
