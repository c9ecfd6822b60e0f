//! Monthly preventive maintenance calendar over the demo dataset.
//!
//! The task list lives only in this page; "Concluir" reschedules the
//! in-memory copy.

use super::list::preventive_status_badge;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::date_utils::{format_naive, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::{Datelike, NaiveDate};
use contracts::domain::a008_preventive::calendar_demo::{
    complete_task, demo_tasks, group_by_day, month_grid, month_name, shift_month,
    tasks_in_month, CalendarTask, WEEKDAY_SHORT,
};
use leptos::prelude::*;

#[component]
pub fn PreventiveCalendarPage() -> impl IntoView {
    let now = today();
    let tasks = RwSignal::new(demo_tasks(now));
    let year_month = RwSignal::new((now.year(), now.month()));
    let selected_day = RwSignal::new(Some(now));
    let error = RwSignal::new(None::<String>);

    let month_tasks = Memo::new(move |_| {
        let (y, m) = year_month.get();
        tasks.with(|t| tasks_in_month(t, y, m))
    });
    let by_day = Memo::new(move |_| month_tasks.with(|t| group_by_day(t)));
    let weeks = Memo::new(move |_| {
        let (y, m) = year_month.get();
        month_grid(y, m).map_err(|e| format!("{:#}", e))
    });

    let go = move |delta: i32| {
        year_month.update(|(y, m)| (*y, *m) = shift_month(*y, *m, delta));
        selected_day.set(None);
    };

    let complete = move |id: u32| {
        let result = tasks.try_update(|t| complete_task(t, id, today()));
        match result {
            Some(Ok(next)) => {
                log::debug!("demo task {} rescheduled to {}", id, next);
                error.set(None);
            }
            Some(Err(e)) => error.set(Some(format!("{:#}", e))),
            None => {}
        }
    };

    let day_cell = move |day: Option<NaiveDate>| {
        let Some(day) = day else {
            return view! { <td class="calendar__day calendar__day--empty"></td> }.into_any();
        };
        let count = by_day.with(|m| m.get(&day).map(|v| v.len()).unwrap_or(0));
        let late = by_day.with(|m| {
            m.get(&day)
                .is_some_and(|v| v.iter().any(|t| t.scheduled < today()))
        });
        view! {
            <td
                class="calendar__day"
                class:calendar__day--today=move || day == today()
                class:calendar__day--selected=move || selected_day.get() == Some(day)
                class:calendar__day--late=late
                on:click=move |_| selected_day.set(Some(day))
            >
                <span class="calendar__day-number">{day.day()}</span>
                {(count > 0).then(|| view! { <span class="calendar__day-count">{count}</span> })}
            </td>
        }
        .into_any()
    };

    let task_row = move |task: CalendarTask| {
        let id = task.id;
        view! {
            <li class="calendar__task">
                <div class="calendar__task-main">
                    <strong>{task.activity.clone()}</strong>
                    <span class="calendar__task-meta">
                        {format!("{} · {} · {}", task.building_system, task.periodicity.label(), task.responsible)}
                    </span>
                    {task.last_execution.map(|d| view! {
                        <span class="calendar__task-meta">{format!("Última execução: {}", format_naive(d))}</span>
                    })}
                </div>
                {preventive_status_badge(Some(task.status(today())))}
                <button class="button button--secondary" on:click=move |_| complete(id)>
                    {icon("check")}
                    "Concluir"
                </button>
            </li>
        }
    };

    let day_tasks = Signal::derive(move || match selected_day.get() {
        Some(day) => by_day.with(|m| m.get(&day).cloned().unwrap_or_default()),
        None => month_tasks.get(),
    });

    view! {
        <PageFrame page_id="a008_preventive_calendar--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Calendário de manutenção" subtitle="Dados de demonstração, não são salvos">
                <button class="button button--secondary" on:click=move |_| go(-1)>
                    {icon("chevron-left")}
                </button>
                <span class="calendar__month">
                    {move || {
                        let (y, m) = year_month.get();
                        format!("{} {}", month_name(m), y)
                    }}
                </span>
                <button class="button button--secondary" on:click=move |_| go(1)>
                    {icon("chevron-right")}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        let t = today();
                        year_month.set((t.year(), t.month()));
                        selected_day.set(Some(t));
                    }
                >
                    "Hoje"
                </button>
            </PageHeader>

            <div class="page__content calendar">
                <ErrorBanner message=Signal::derive(move || {
                    error.get().or_else(|| weeks.with(|w| w.as_ref().err().cloned()))
                }) />

                <table class="calendar__grid">
                    <thead>
                        <tr>
                            {WEEKDAY_SHORT.iter().map(|d| view! { <th class="calendar__weekday">{*d}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || weeks.get().unwrap_or_default().into_iter().map(|week| view! {
                            <tr>{week.into_iter().map(day_cell).collect_view()}</tr>
                        }).collect_view()}
                    </tbody>
                </table>

                <div class="calendar__tasks">
                    <h3>
                        {move || match selected_day.get() {
                            Some(day) => format!("Atividades em {}", format_naive(day)),
                            None => "Atividades do mês".to_string(),
                        }}
                    </h3>
                    <Show
                        when=move || !day_tasks.with(|t| t.is_empty())
                        fallback=|| view! { <p class="calendar__empty">"Nenhuma atividade programada."</p> }
                    >
                        <ul class="calendar__task-list">
                            {move || day_tasks.get().into_iter().map(task_row).collect_view()}
                        </ul>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
