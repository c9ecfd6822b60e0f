//! Warranty catalog by delivery lot.
//!
//! Works on the static demo dataset from `contracts`: nothing is fetched or
//! persisted, the filters just recompute the joined rows.

use crate::domain::a006_warranty::ui::list::status_badge;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::ui::{Input, Select};
use crate::shared::date_utils::{format_date, format_naive, today};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_warranty_lot::catalog::{
    catalog_entries, CatalogEntry, CatalogFilter, BUILDING_SYSTEMS, CATALOG_LOTS,
};
use leptos::prelude::*;

fn lot_options() -> Vec<(String, String)> {
    CATALOG_LOTS
        .iter()
        .map(|lot| {
            (
                lot.id.to_string(),
                format!("{} · {} · {}", lot.code, lot.development, lot.tower),
            )
        })
        .collect()
}

fn system_options() -> Vec<(String, String)> {
    BUILDING_SYSTEMS
        .iter()
        .map(|s| (s.to_string(), s.to_string()))
        .collect()
}

#[component]
pub fn WarrantyCatalogPage() -> impl IntoView {
    let filter = RwSignal::new(CatalogFilter::default());

    let result = Memo::new(move |_| {
        filter.with(|f| catalog_entries(f, today()).map_err(|e| format!("{:#}", e)))
    });
    let entries = Signal::derive(move || result.with(|r| r.clone().unwrap_or_default()));
    let error = Signal::derive(move || result.with(|r| r.as_ref().err().cloned()));

    let row = |entry: CatalogEntry| {
        view! {
            <tr class="table__row">
                <td class="table__cell">{entry.lot.code}</td>
                <td class="table__cell">{format!("{} / {}", entry.lot.development, entry.lot.tower)}</td>
                <td class="table__cell">{entry.item.building_system}</td>
                <td class="table__cell">{entry.item.component}</td>
                <td class="table__cell">{entry.item.supplier}</td>
                <td class="table__cell">{format_date(entry.lot.delivery_date)}</td>
                <td class="table__cell table__cell--number">{entry.item.warranty_months}</td>
                <td class="table__cell">{format_naive(entry.end_date)}</td>
                <td class="table__cell">{status_badge(Some(entry.status))}</td>
            </tr>
        }
    };

    view! {
        <PageFrame page_id="a007_warranty_catalog--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Catálogo de garantias por lote"
                subtitle="Prazos de garantia por sistema construtivo (dados de demonstração)"
            >
                <button
                    class="button button--secondary"
                    on:click=move |_| filter.set(CatalogFilter::default())
                >
                    "Limpar filtros"
                </button>
            </PageHeader>

            <div class="page__content">
                <ErrorBanner message=error />

                <div class="filter-panel">
                    <div class="form__row">
                        <Select
                            label="Lote"
                            value=Signal::derive(move || filter.with(|f| f.lot_id.map(|id| id.to_string()).unwrap_or_default()))
                            on_change=Callback::new(move |v: String| filter.update(|f| f.lot_id = v.parse().ok()))
                            options=lot_options()
                            empty_label="Todos"
                        />
                        <Select
                            label="Sistema"
                            value=Signal::derive(move || filter.with(|f| f.building_system.clone().unwrap_or_default()))
                            on_change=Callback::new(move |v: String| {
                                filter.update(|f| f.building_system = Some(v).filter(|s| !s.is_empty()))
                            })
                            options=system_options()
                            empty_label="Todos"
                        />
                        <Input
                            label="Buscar"
                            placeholder="Componente, fornecedor ou sistema"
                            value=Signal::derive(move || filter.with(|f| f.text.clone()))
                            on_input=Callback::new(move |v| filter.update(|f| f.text = v))
                        />
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || filter.with(|f| f.only_active)
                                on:change=move |ev| filter.update(|f| f.only_active = event_target_checked(&ev))
                            />
                            " Somente vigentes"
                        </label>
                    </div>
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Lote"</th>
                                <th class="table__header-cell">"Empreendimento"</th>
                                <th class="table__header-cell">"Sistema"</th>
                                <th class="table__header-cell">"Componente"</th>
                                <th class="table__header-cell">"Fornecedor"</th>
                                <th class="table__header-cell">"Entrega"</th>
                                <th class="table__header-cell">"Meses"</th>
                                <th class="table__header-cell">"Término"</th>
                                <th class="table__header-cell">"Situação"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || entries.get().into_iter().map(row).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="table__footer">
                    {move || format!("{} itens", entries.with(|e| e.len()))}
                </div>
            </div>
        </PageFrame>
    }
}
