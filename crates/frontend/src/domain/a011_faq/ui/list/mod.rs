use super::details::open_details;
use crate::shared::crud::{Column, CrudList};
use crate::shared::list_utils::{cmp_opt_text, cmp_text, matches_any, Searchable, Sortable};
use contracts::domain::a011_faq::aggregate::Faq;
use leptos::prelude::*;
use std::cmp::Ordering;

impl Searchable for Faq {
    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(
            [
                self.question.as_str(),
                self.answer.as_str(),
                self.category.as_deref().unwrap_or(""),
            ],
            filter,
        )
    }
}

impl Sortable for Faq {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            // unset position goes last
            "ordem" => self
                .order
                .unwrap_or(i32::MAX)
                .cmp(&other.order.unwrap_or(i32::MAX))
                .then_with(|| cmp_text(&self.question, &other.question)),
            "pergunta" => cmp_text(&self.question, &other.question),
            "categoria" => cmp_opt_text(self.category.as_deref(), other.category.as_deref()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn FaqList() -> impl IntoView {
    let columns = vec![
        Column::text("ordem", "#", |f: &Faq| f.order.map(|o| o.to_string()).unwrap_or_default()),
        Column::text("pergunta", "Pergunta", |f: &Faq| f.question.clone()),
        Column::text("categoria", "Categoria", |f: &Faq| f.category.clone().unwrap_or_default()),
    ];

    view! {
        <CrudList<Faq>
            page_id="a011_faq--list"
            subtitle="Perguntas exibidas no portal do proprietário"
            columns=columns
            details=open_details
            default_sort="ordem"
            create_label="Nova pergunta"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::sort_list;

    fn faq(question: &str, order: Option<i32>) -> Faq {
        Faq {
            question: question.into(),
            answer: "-".into(),
            order,
            ..Default::default()
        }
    }

    #[test]
    fn test_order_column_puts_unset_last() {
        let mut items = vec![faq("b", None), faq("a", Some(2)), faq("c", Some(1))];
        sort_list(&mut items, "ordem", true);
        let questions: Vec<_> = items.iter().map(|f| f.question.as_str()).collect();
        assert_eq!(questions, ["c", "a", "b"]);
    }

    #[test]
    fn test_search_looks_into_answers() {
        let mut item = faq("Como abrir chamado?", None);
        item.answer = "Use o portal do proprietário".into();
        assert!(item.matches_filter("portal"));
        assert!(!item.matches_filter("boleto"));
    }
}
