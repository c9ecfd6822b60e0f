use crate::dashboards::d400_summary::api;
use crate::domain::a008_preventive::ui::list::preventive_status_badge;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::tab_label;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date_opt, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;
use contracts::dashboards::d400_summary::dto::{DashboardSummary, SummaryCounters};
use contracts::domain::a013_ticket::aggregate::Ticket;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn ticket_status_class(ticket: &Ticket) -> &'static str {
    match ticket.status.as_deref().map(str::trim) {
        Some("aberto") => "badge badge--warning",
        Some("em_andamento") => "badge badge--info",
        Some("concluido") => "badge badge--success",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn SummaryDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<DashboardSummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let tabs_store = use_context::<AppGlobalContext>();
    let (auth_state, _) = use_auth();

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_summary().await {
                Ok(summary) => {
                    set_data.set(Some(summary));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("dashboard load failed: {}", e);
                    set_error.set(Some(e.to_string()));
                    set_loading.set(false);
                }
            }
        });
    };
    load();

    let counter = move |pick: fn(&SummaryCounters) -> u64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(|d| pick(&d.counters))))
    };

    // Cards link to their list only when the user can read it
    let open = move |key: &'static str, resource: &'static str| -> Option<Callback<()>> {
        let allowed = auth_state.with_untracked(|s| s.can_read(resource));
        match (tabs_store, allowed) {
            (Some(ctx), true) => Some(Callback::new(move |_| ctx.open_tab(key, tab_label(key)))),
            _ => None,
        }
    };

    view! {
        <PageFrame page_id="d400_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Painel" subtitle="Visão geral dos empreendimentos">
                <button class="button button--secondary" on:click=move |_| load() disabled=move || loading.get()>
                    {icon("refresh")}
                    {move || if loading.get() { "Atualizando..." } else { "Atualizar" }}
                </button>
            </PageHeader>

            <div class="page__content dashboard">
                <ErrorBanner message=error />

                <div class="dashboard__cards">
                    <StatCard label="Empreendimentos" icon_name="building"
                        value=counter(|c| c.developments)
                        on_click=open("a004_development", "empreendimentos") />
                    <StatCard label="Unidades" icon_name="home"
                        value=counter(|c| c.units)
                        on_click=open("a005_unit", "unidades") />
                    <StatCard label="Produtos" icon_name="package"
                        value=counter(|c| c.products)
                        on_click=open("a001_product", "produtos") />
                    <StatCard label="Fornecedores" icon_name="truck"
                        value=counter(|c| c.suppliers)
                        on_click=open("a002_supplier", "fornecedores") />
                    <StatCard label="Garantias ativas" icon_name="shield"
                        value=counter(|c| c.active_warranties)
                        on_click=open("a006_warranty", "garantias") />
                    <StatCard label="Garantias a vencer" icon_name="alert" alert="warning"
                        value=counter(|c| c.expiring_warranties)
                        on_click=open("a006_warranty", "garantias") />
                    <StatCard label="Chamados abertos" icon_name="ticket" alert="warning"
                        value=counter(|c| c.open_tickets) />
                    <StatCard label="Preventivos atrasados" icon_name="wrench" alert="error"
                        value=counter(|c| c.late_preventives)
                        on_click=open("a008_preventive", "preventivos") />
                </div>

                <div class="dashboard__panels">
                    <section class="dashboard__panel">
                        <h3>{icon("ticket")} " Chamados recentes"</h3>
                        <Show
                            when=move || data.with(|d| d.as_ref().is_some_and(|d| !d.recent_tickets.is_empty()))
                            fallback=|| view! { <p class="dashboard__empty">"Nenhum chamado recente."</p> }
                        >
                            <table class="table__data">
                                <thead>
                                    <tr>
                                        <th class="table__header-cell">"Título"</th>
                                        <th class="table__header-cell">"Unidade"</th>
                                        <th class="table__header-cell">"Aberto em"</th>
                                        <th class="table__header-cell">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || data.get().map(|d| d.recent_tickets).unwrap_or_default().into_iter().map(|t| {
                                        let class = ticket_status_class(&t);
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{t.title.clone()}</td>
                                                <td class="table__cell">{t.unit_label.clone().unwrap_or_default()}</td>
                                                <td class="table__cell">{format_date_opt(t.opened_at.as_deref())}</td>
                                                <td class="table__cell"><span class=class>{t.status_label()}</span></td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </Show>
                    </section>

                    <section class="dashboard__panel">
                        <h3>{icon("calendar")} " Próximos preventivos"</h3>
                        <Show
                            when=move || data.with(|d| d.as_ref().is_some_and(|d| !d.upcoming_preventives.is_empty()))
                            fallback=|| view! { <p class="dashboard__empty">"Nenhum preventivo programado."</p> }
                        >
                            <table class="table__data">
                                <thead>
                                    <tr>
                                        <th class="table__header-cell">"Atividade"</th>
                                        <th class="table__header-cell">"Próxima execução"</th>
                                        <th class="table__header-cell">"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || data.get().map(|d| d.upcoming_preventives).unwrap_or_default().into_iter().map(|p| {
                                        let status = p.effective_status(today());
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{p.activity.clone()}</td>
                                                <td class="table__cell">{format_date_opt(p.next_execution.as_deref())}</td>
                                                <td class="table__cell">{preventive_status_badge(status)}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </Show>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}
