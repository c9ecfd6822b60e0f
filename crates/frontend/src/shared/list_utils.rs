/// Utilities for list pages (search, sorting, UI components)
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Minimum number of characters before the search filter applies.
pub const MIN_FILTER_LEN: usize = 3;

/// Types that support text search
pub trait Searchable {
    /// Whether the record matches the search text
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that support sorting by a named column
pub trait Sortable {
    /// Compare two records by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

fn filter_is_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Case-insensitive substring search over a set of fields.
pub fn matches_any<'a>(fields: impl IntoIterator<Item = &'a str>, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Case-insensitive text comparison.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Optional text comparison, missing values last.
pub fn cmp_opt_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_text(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if !filter_is_active(filter) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    // Lowercasing may change byte offsets (e.g. some accented capitals); fall back to plain text.
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="search-highlight">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Sort the list by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter the list by the search text
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !filter_is_active(filter) {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new filter value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Buscar (mín. {} caracteres)...", MIN_FILTER_LEN)
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(_) => debounce_timeout.set_value(None),
        }
    };

    let is_filter_active = move || filter_is_active(&value.get());

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpar">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Click handler toggling the sort column / direction
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, Option<&'static str>);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            matches_any([self.0, self.1.unwrap_or("")], filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "extra" => cmp_opt_text(self.1, other.1),
                _ => cmp_text(self.0, other.0),
            }
        }
    }

    #[test]
    fn test_filter_requires_three_chars() {
        let rows = vec![Row("Elevador", None), Row("Piso", Some("cerâmica"))];
        assert_eq!(filter_list(rows.clone(), "el").len(), 2);
        assert_eq!(filter_list(rows.clone(), "ELE"), vec![Row("Elevador", None)]);
        assert_eq!(filter_list(rows, "cerâm"), vec![Row("Piso", Some("cerâmica"))]);
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("b", None), Row("A", Some("z")), Row("c", Some("a"))];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].0, "A");
        sort_list(&mut rows, "name", false);
        assert_eq!(rows[0].0, "c");
        sort_list(&mut rows, "extra", true);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["c", "A", "b"]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("nome", "nome", true), " ▲");
        assert_eq!(get_sort_indicator("nome", "nome", false), " ▼");
        assert_eq!(get_sort_indicator("nome", "email", true), " ⇅");
    }
}
