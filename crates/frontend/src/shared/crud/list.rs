use crate::shared::api_client;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, highlight_matches, sort_list,
    SearchInput, Searchable, Sortable,
};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_auth;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use std::rc::Rc;

/// Builds the details view shown in the modal: `(id, on_saved, on_cancel)`.
/// `None` opens the creation form.
pub type DetailsBuilder = fn(Option<EntityId>, Rc<dyn Fn(())>, Rc<dyn Fn(())>) -> AnyView;

pub enum Cell<R> {
    /// Plain text, search matches highlighted
    Text(fn(&R) -> String),
    /// Custom view (badges, links)
    View(fn(&R) -> AnyView),
}

pub struct Column<R> {
    /// Sort key passed to `Sortable::compare_by_field`
    pub field: &'static str,
    pub title: &'static str,
    pub cell: Cell<R>,
}

impl<R> Column<R> {
    pub fn text(field: &'static str, title: &'static str, value: fn(&R) -> String) -> Self {
        Self {
            field,
            title,
            cell: Cell::Text(value),
        }
    }

    pub fn view(field: &'static str, title: &'static str, render: fn(&R) -> AnyView) -> Self {
        Self {
            field,
            title,
            cell: Cell::View(render),
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// List page of one REST collection.
///
/// Loads on mount, filters by text (min. 3 chars) and sorts by clicked
/// column on the client. Create/delete buttons are shown only when the user
/// may edit the collection.
#[component]
pub fn CrudList<R>(
    page_id: &'static str,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    columns: Vec<Column<R>>,
    details: DetailsBuilder,
    /// Initial sort column
    default_sort: &'static str,
    /// Label of the create button; defaults to "Novo"
    #[prop(optional)]
    create_label: Option<&'static str>,
) -> impl IntoView
where
    R: Resource + Searchable + Sortable + Send + Sync,
{
    let (auth_state, _) = use_auth();
    let can_edit = Signal::derive(move || auth_state.with(|s| s.can_edit(R::collection_name())));

    let items = RwSignal::new(Vec::<R>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new(default_sort.to_string());
    let sort_ascending = RwSignal::new(true);
    let selected = RwSignal::new(HashSet::<EntityId>::new());
    let columns = StoredValue::new(columns);
    let modal_stack = use_context::<ModalStackService>();

    let visible = Signal::derive(move || {
        let mut rows = filter_list(items.get(), &search.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match api_client::fetch_all::<R>().await {
                Ok(rows) => {
                    items.set(rows);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("{}: list failed: {}", R::collection_name(), e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    let open_details = move |id: Option<EntityId>| {
        let Some(modal_stack) = modal_stack else {
            log::error!("ModalStackService not found in context");
            return;
        };
        modal_stack.clear();
        modal_stack.push_with_frame(
            Some("max-width: min(900px, 95vw); width: min(900px, 95vw);".to_string()),
            Some(format!("{}-details-modal", R::resource_index())),
            move |handle| {
                let on_saved: Rc<dyn Fn(())> = Rc::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        fetch();
                    }
                });
                let on_cancel: Rc<dyn Fn(())> = Rc::new({
                    let handle = handle.clone();
                    move |_| handle.close()
                });
                details(id, on_saved, on_cancel)
            },
        );
    };

    let toggle_select = move |id: EntityId, checked: bool| {
        selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<EntityId> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let message = if ids.len() == 1 {
            let label = items.with_untracked(|rows| {
                rows.iter()
                    .find(|r| r.id() == Some(ids[0]))
                    .map(|r| r.label())
                    .unwrap_or_default()
            });
            format!("Excluir \"{}\"?", label)
        } else {
            format!("Excluir os {} registros selecionados?", ids.len())
        };
        if !confirm(&message) {
            return;
        }

        spawn_local(async move {
            let mut failures = Vec::new();
            for id in ids {
                if let Err(e) = api_client::remove::<R>(id).await {
                    failures.push(e.to_string());
                }
            }
            if let Some(first) = failures.first() {
                alert(&format!("Não foi possível excluir: {}", first));
            }
            selected.set(HashSet::new());
            fetch();
        });
    };

    fetch();

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader title=R::list_name() subtitle=subtitle>
                <SearchInput
                    value=search
                    on_change=Callback::new(move |v: String| search.set(v))
                />
                <Show when=move || can_edit.get()>
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        {create_label.unwrap_or("Novo")}
                    </button>
                </Show>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Atualizar"
                </button>
                <Show when=move || can_edit.get()>
                    <button
                        class="button button--secondary"
                        on:click=move |_| delete_selected()
                        disabled=move || selected.with(|s| s.is_empty())
                    >
                        {icon("delete")}
                        {move || format!("Excluir ({})", selected.with(|s| s.len()))}
                    </button>
                </Show>
            </PageHeader>

            <div class="page__content">
                <ErrorBanner message=error />

                <Show when=move || loading.get() && items.with(|i| i.is_empty())>
                    <div class="page__loading">"Carregando..."</div>
                </Show>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell table__header-cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        on:change=move |ev| {
                                            if event_target_checked(&ev) {
                                                let ids: HashSet<EntityId> = visible
                                                    .get_untracked()
                                                    .iter()
                                                    .filter_map(|r| r.id())
                                                    .collect();
                                                selected.set(ids);
                                            } else {
                                                selected.set(HashSet::new());
                                            }
                                        }
                                    />
                                </th>
                                {columns.with_value(|cols| cols.iter().map(|col| {
                                    let field = col.field;
                                    view! {
                                        <th
                                            class="table__header-cell table__header-cell--sortable"
                                            on:click=create_sort_toggle(field, sort_field, sort_ascending)
                                        >
                                            {col.title}
                                            <span class="table__sort-indicator">
                                                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                                            </span>
                                        </th>
                                    }
                                }).collect_view())}
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let filter = search.get();
                                visible.get().into_iter().map(|row| {
                                    let id = row.id();
                                    let cells = columns.with_value(|cols| cols.iter().map(|col| {
                                        let content = match &col.cell {
                                            Cell::Text(value) => highlight_matches(&value(&row), &filter),
                                            Cell::View(render) => render(&row),
                                        };
                                        view! { <td class="table__cell">{content}</td> }
                                    }).collect_view());
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=move || id.is_some_and(|id| selected.with(|s| s.contains(&id)))
                                            on:click=move |_| open_details(id)
                                        >
                                            <TableCheckbox
                                                checked=Signal::derive(move || id.is_some_and(|id| selected.with(|s| s.contains(&id))))
                                                on_change=Callback::new(move |checked| {
                                                    if let Some(id) = id {
                                                        toggle_select(id, checked);
                                                    }
                                                })
                                                disabled=id.is_none()
                                            />
                                            {cells}
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="table__footer">
                    {move || format!("{} de {} registros", visible.with(|v| v.len()), items.with(|i| i.len()))}
                </div>
            </div>
        </PageFrame>
    }
}
