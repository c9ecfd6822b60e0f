//! Preventive maintenance calendar over a static demo dataset.
//!
//! The dataset is generated relative to "today" so the calendar always has
//! late and upcoming tasks to show. Completing a task only changes the
//! in-memory copy held by the page; nothing is persisted.

use super::schedule::{next_due_date, status_for, Periodicity, PreventiveStatus};
use anyhow::{anyhow, bail};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

struct DemoRow {
    id: u32,
    building_system: &'static str,
    activity: &'static str,
    periodicity: Periodicity,
    offset_days: i64,
    responsible: &'static str,
}

const DEMO_ROWS: &[DemoRow] = &[
    DemoRow { id: 1, building_system: "Sistema de incêndio", activity: "Inspeção de extintores", periodicity: Periodicity::Mensal, offset_days: -12, responsible: "FireSafe" },
    DemoRow { id: 2, building_system: "Elevadores", activity: "Manutenção preventiva dos elevadores", periodicity: Periodicity::Mensal, offset_days: -3, responsible: "Elevare" },
    DemoRow { id: 3, building_system: "Instalações hidráulicas", activity: "Limpeza dos reservatórios de água", periodicity: Periodicity::Semestral, offset_days: 0, responsible: "Hidro Sul" },
    DemoRow { id: 4, building_system: "Portões automáticos", activity: "Lubrificação dos portões", periodicity: Periodicity::Trimestral, offset_days: 2, responsible: "Automatiza" },
    DemoRow { id: 5, building_system: "Instalações elétricas", activity: "Reaperto dos quadros elétricos", periodicity: Periodicity::Anual, offset_days: 5, responsible: "Eletro Forte" },
    DemoRow { id: 6, building_system: "Áreas comuns", activity: "Verificação da iluminação de emergência", periodicity: Periodicity::Semanal, offset_days: 1, responsible: "Zeladoria" },
    DemoRow { id: 7, building_system: "Sistema de incêndio", activity: "Teste das bombas de incêndio", periodicity: Periodicity::Semanal, offset_days: -1, responsible: "FireSafe" },
    DemoRow { id: 8, building_system: "Impermeabilização", activity: "Inspeção das lajes de cobertura", periodicity: Periodicity::Anual, offset_days: 20, responsible: "ImperTec" },
    DemoRow { id: 9, building_system: "Piscina", activity: "Tratamento da água da piscina", periodicity: Periodicity::Diaria, offset_days: 0, responsible: "Zeladoria" },
    DemoRow { id: 10, building_system: "Esquadrias", activity: "Revisão das vedações das janelas", periodicity: Periodicity::Semestral, offset_days: 35, responsible: "Alumax" },
    DemoRow { id: 11, building_system: "Instalações hidráulicas", activity: "Limpeza das caixas de gordura", periodicity: Periodicity::Trimestral, offset_days: -20, responsible: "Hidro Sul" },
    DemoRow { id: 12, building_system: "Gerador", activity: "Teste do gerador sob carga", periodicity: Periodicity::Mensal, offset_days: 12, responsible: "Eletro Forte" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTask {
    pub id: u32,
    pub building_system: String,
    pub activity: String,
    pub periodicity: Periodicity,
    pub scheduled: NaiveDate,
    pub responsible: String,
    pub last_execution: Option<NaiveDate>,
}

impl CalendarTask {
    pub fn status(&self, today: NaiveDate) -> PreventiveStatus {
        status_for(self.scheduled, today)
    }
}

/// Fresh copy of the demo tasks, scheduled around `today`.
pub fn demo_tasks(today: NaiveDate) -> Vec<CalendarTask> {
    DEMO_ROWS
        .iter()
        .map(|row| CalendarTask {
            id: row.id,
            building_system: row.building_system.to_string(),
            activity: row.activity.to_string(),
            periodicity: row.periodicity,
            scheduled: today + Duration::days(row.offset_days),
            responsible: row.responsible.to_string(),
            last_execution: None,
        })
        .collect()
}

/// Tasks scheduled in the given month, ordered by date then id.
pub fn tasks_in_month(tasks: &[CalendarTask], year: i32, month: u32) -> Vec<CalendarTask> {
    let mut result: Vec<CalendarTask> = tasks
        .iter()
        .filter(|t| t.scheduled.year() == year && t.scheduled.month() == month)
        .cloned()
        .collect();
    result.sort_by(|a, b| a.scheduled.cmp(&b.scheduled).then(a.id.cmp(&b.id)));
    result
}

pub fn group_by_day(tasks: &[CalendarTask]) -> BTreeMap<NaiveDate, Vec<CalendarTask>> {
    let mut days: BTreeMap<NaiveDate, Vec<CalendarTask>> = BTreeMap::new();
    for task in tasks {
        days.entry(task.scheduled).or_default().push(task.clone());
    }
    days
}

/// Weeks of the month, Sunday first, padded with `None` outside the month.
pub fn month_grid(year: i32, month: u32) -> anyhow::Result<Vec<[Option<NaiveDate>; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("mês inválido: {}-{}", year, month))?;
    let (next_year, next_month) = shift_month(year, month, 1);
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| anyhow!("mês inválido: {}-{}", next_year, next_month))?;

    let mut weeks = Vec::new();
    let mut week: [Option<NaiveDate>; 7] = [None; 7];
    let mut slot = first.weekday().num_days_from_sunday() as usize;
    let mut day = first;
    while day < next_first {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        day = day + Duration::days(1);
    }
    if slot > 0 {
        weeks.push(week);
    }
    Ok(weeks)
}

/// Mark a task as done on `today` and reschedule it. Returns the new date.
pub fn complete_task(tasks: &mut [CalendarTask], id: u32, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
        bail!("tarefa {} não encontrada", id);
    };
    task.last_execution = Some(today);
    task.scheduled = next_due_date(today, task.periodicity);
    Ok(task.scheduled)
}

/// Move `delta` months forward (negative goes back).
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + (month as i32 - 1) + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        12 => "Dezembro",
        _ => "",
    }
}

pub const WEEKDAY_SHORT: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_demo_tasks_mix_late_and_pending() {
        let today = date(2024, 6, 15);
        let tasks = demo_tasks(today);
        assert_eq!(tasks.len(), DEMO_ROWS.len());
        assert!(tasks.iter().any(|t| t.status(today) == PreventiveStatus::Atrasado));
        assert!(tasks.iter().any(|t| t.status(today) == PreventiveStatus::Pendente));
    }

    #[test]
    fn test_tasks_in_month_sorted() {
        let today = date(2024, 6, 15);
        let tasks = demo_tasks(today);
        let june = tasks_in_month(&tasks, 2024, 6);
        assert!(june.iter().all(|t| t.scheduled.month() == 6));
        assert!(june.windows(2).all(|w| w[0].scheduled <= w[1].scheduled));
        // offsets 20 and 35 land in July
        let july = tasks_in_month(&tasks, 2024, 7);
        assert_eq!(july.len(), 2);
    }

    #[test]
    fn test_group_by_day() {
        let today = date(2024, 6, 15);
        let tasks = demo_tasks(today);
        let days = group_by_day(&tasks);
        // two tasks scheduled for today
        assert_eq!(days.get(&today).map(Vec::len), Some(2));
    }

    #[test]
    fn test_month_grid_shape() {
        // June 2024 starts on a Saturday and has 30 days
        let grid = month_grid(2024, 6).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0][6], Some(date(2024, 6, 1)));
        assert!(grid[0][..6].iter().all(Option::is_none));
        assert_eq!(grid[5][0], Some(date(2024, 6, 30)));
        let days: usize = grid.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(days, 30);
    }

    #[test]
    fn test_month_grid_rejects_bad_month() {
        assert!(month_grid(2024, 13).is_err());
    }

    #[test]
    fn test_complete_task() {
        let today = date(2024, 6, 15);
        let mut tasks = demo_tasks(today);
        let next = complete_task(&mut tasks, 1, today).unwrap();
        assert_eq!(next, date(2024, 7, 15));
        let task = tasks.iter().find(|t| t.id == 1).unwrap();
        assert_eq!(task.last_execution, Some(today));
        assert_eq!(task.status(today), PreventiveStatus::Pendente);
        assert!(complete_task(&mut tasks, 99, today).is_err());
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(2024, 1, -1), (2023, 12));
        assert_eq!(shift_month(2024, 12, 1), (2025, 1));
        assert_eq!(shift_month(2024, 6, 0), (2024, 6));
        assert_eq!(shift_month(2024, 3, -15), (2022, 12));
    }
}
