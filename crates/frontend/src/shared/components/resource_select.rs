//! Select bound to a foreign key, options loaded from the referenced collection.

use super::ui::Select;
use crate::shared::api_client;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Parse the value of an id select; empty means "none".
pub fn parse_id(value: &str) -> Option<EntityId> {
    value.trim().parse().ok()
}

/// `(value, label)` options for a list of records; records without id are skipped.
pub fn id_options<R: Resource>(items: &[R]) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = items
        .iter()
        .filter_map(|item| item.id().map(|id| (id.to_string(), item.label())))
        .collect();
    options.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
    options
}

#[component]
pub fn ResourceSelect<R>(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Option<EntityId>>,
    on_change: Callback<Option<EntityId>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] _marker: std::marker::PhantomData<R>,
) -> impl IntoView
where
    R: Resource + Send + Sync,
{
    let options = RwSignal::new(Vec::<(String, String)>::new());
    let load_error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api_client::fetch_all::<R>().await {
            Ok(items) => options.set(id_options(&items)),
            Err(e) => {
                log::error!("{}: failed to load options: {}", R::collection_name(), e);
                load_error.set(Some(e.to_string()));
            }
        }
    });

    let current = Signal::derive(move || value.get().map(|id| id.to_string()).unwrap_or_default());

    view! {
        <Select
            label=label
            value=current
            options=options
            empty_label="— selecione —"
            required=required
            on_change=Callback::new(move |v: String| on_change.run(parse_id(&v)))
        />
        {move || load_error.get().map(|e| view! { <div class="form__hint form__hint--error">{e}</div> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_supplier::aggregate::Supplier;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
    }

    #[test]
    fn test_id_options_sorted_and_skip_new() {
        let items = vec![
            Supplier { id: Some(2), name: "zeta".into(), ..Default::default() },
            Supplier { id: None, name: "novo".into(), ..Default::default() },
            Supplier { id: Some(1), name: "Alfa".into(), ..Default::default() },
        ];
        let options = id_options(&items);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].0, "1");
    }
}
