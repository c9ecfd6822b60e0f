//! Date arithmetic for preventive maintenance: next due date per
//! periodicity and late/pending status.

use crate::domain::common::{format_iso, parse_iso_date};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Periodicidade desconhecida: {0}")]
    UnknownPeriodicity(String),
    #[error("Data inválida: {0}")]
    InvalidDate(String),
}

// ============================================================================
// Periodicity
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Diaria,
    Semanal,
    Mensal,
    Trimestral,
    Semestral,
    Anual,
}

impl Periodicity {
    pub const ALL: [Periodicity; 6] = [
        Periodicity::Diaria,
        Periodicity::Semanal,
        Periodicity::Mensal,
        Periodicity::Trimestral,
        Periodicity::Semestral,
        Periodicity::Anual,
    ];

    /// Fixed day offset added per execution
    pub fn days(self) -> i64 {
        match self {
            Periodicity::Diaria => 1,
            Periodicity::Semanal => 7,
            Periodicity::Mensal => 30,
            Periodicity::Trimestral => 90,
            Periodicity::Semestral => 180,
            Periodicity::Anual => 365,
        }
    }

    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Periodicity::Diaria => "diaria",
            Periodicity::Semanal => "semanal",
            Periodicity::Mensal => "mensal",
            Periodicity::Trimestral => "trimestral",
            Periodicity::Semestral => "semestral",
            Periodicity::Anual => "anual",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Periodicity::Diaria => "Diária",
            Periodicity::Semanal => "Semanal",
            Periodicity::Mensal => "Mensal",
            Periodicity::Trimestral => "Trimestral",
            Periodicity::Semestral => "Semestral",
            Periodicity::Anual => "Anual",
        }
    }

    /// Accepts wire values, UI labels (with or without accents, any case)
    /// and the English names.
    pub fn from_label(label: &str) -> Option<Self> {
        let folded: String = label
            .trim()
            .to_lowercase()
            .chars()
            .map(fold_accent)
            .collect();
        match folded.as_str() {
            "diaria" | "daily" => Some(Periodicity::Diaria),
            "semanal" | "weekly" => Some(Periodicity::Semanal),
            "mensal" | "monthly" => Some(Periodicity::Mensal),
            "trimestral" | "quarterly" => Some(Periodicity::Trimestral),
            "semestral" | "semiannual" | "semi-annual" => Some(Periodicity::Semestral),
            "anual" | "annual" | "yearly" => Some(Periodicity::Anual),
            _ => None,
        }
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' => 'a',
        'é' | 'ê' => 'e',
        'í' => 'i',
        'ó' | 'ô' | 'õ' => 'o',
        'ú' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}

impl std::fmt::Display for Periodicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreventiveStatus {
    Pendente,
    Atrasado,
    Concluido,
}

impl PreventiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreventiveStatus::Pendente => "pendente",
            PreventiveStatus::Atrasado => "atrasado",
            PreventiveStatus::Concluido => "concluido",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreventiveStatus::Pendente => "Pendente",
            PreventiveStatus::Atrasado => "Atrasado",
            PreventiveStatus::Concluido => "Concluído",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PreventiveStatus::Pendente => "badge badge--info",
            PreventiveStatus::Atrasado => "badge badge--error",
            PreventiveStatus::Concluido => "badge badge--success",
        }
    }
}

// ============================================================================
// Calculations
// ============================================================================

pub fn next_due_date(date: NaiveDate, periodicity: Periodicity) -> NaiveDate {
    date + Duration::days(periodicity.days())
}

/// String form used by forms and the demo calendar: ISO in, ISO out.
pub fn next_due_date_iso(date: &str, periodicity: &str) -> Result<String, ScheduleError> {
    let periodicity = Periodicity::from_label(periodicity)
        .ok_or_else(|| ScheduleError::UnknownPeriodicity(periodicity.to_string()))?;
    let date = parse_iso_date(date).ok_or_else(|| ScheduleError::InvalidDate(date.to_string()))?;
    Ok(format_iso(next_due_date(date, periodicity)))
}

/// Late when the scheduled day is strictly before today. Both sides are
/// calendar dates, so the time of day never matters.
pub fn status_for(scheduled: NaiveDate, today: NaiveDate) -> PreventiveStatus {
    if scheduled < today {
        PreventiveStatus::Atrasado
    } else {
        PreventiveStatus::Pendente
    }
}

pub fn status_for_iso(scheduled: &str, today: NaiveDate) -> Result<PreventiveStatus, ScheduleError> {
    parse_iso_date(scheduled)
        .map(|date| status_for(date, today))
        .ok_or_else(|| ScheduleError::InvalidDate(scheduled.to_string()))
}

/// Today in the browser's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_status(scheduled: NaiveDate) -> PreventiveStatus {
    status_for(scheduled, today())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_offsets() {
        let base = date(2024, 1, 1);
        let expected = [
            ("diaria", "2024-01-02"),
            ("semanal", "2024-01-08"),
            ("mensal", "2024-01-31"),
            ("trimestral", "2024-03-31"),
            ("semestral", "2024-06-29"),
            ("anual", "2024-12-31"),
        ];
        for (label, iso) in expected {
            let periodicity = Periodicity::from_label(label).unwrap();
            assert_eq!(format_iso(next_due_date(base, periodicity)), iso, "{label}");
        }
    }

    #[test]
    fn test_next_due_date_iso() {
        assert_eq!(next_due_date_iso("2024-02-28", "diaria").unwrap(), "2024-02-29");
        assert_eq!(
            next_due_date_iso("2024-02-28T15:30:00Z", "Mensal").unwrap(),
            "2024-03-29"
        );
        assert_eq!(
            next_due_date_iso("2024-01-01", "quinzenal"),
            Err(ScheduleError::UnknownPeriodicity("quinzenal".into()))
        );
        assert_eq!(
            next_due_date_iso("01/01/2024", "anual"),
            Err(ScheduleError::InvalidDate("01/01/2024".into()))
        );
    }

    #[test]
    fn test_label_variants() {
        assert_eq!(Periodicity::from_label("Diária"), Some(Periodicity::Diaria));
        assert_eq!(Periodicity::from_label(" WEEKLY "), Some(Periodicity::Semanal));
        assert_eq!(Periodicity::from_label("yearly"), Some(Periodicity::Anual));
        for p in Periodicity::ALL {
            assert_eq!(Periodicity::from_label(p.as_str()), Some(p));
            assert_eq!(Periodicity::from_label(p.label()), Some(p));
        }
    }

    #[test]
    fn test_status_for() {
        let today = date(2024, 5, 10);
        assert_eq!(status_for(date(2024, 5, 9), today), PreventiveStatus::Atrasado);
        assert_eq!(status_for(today, today), PreventiveStatus::Pendente);
        assert_eq!(status_for(date(2024, 5, 11), today), PreventiveStatus::Pendente);
    }

    #[test]
    fn test_status_ignores_time_of_day() {
        let today = date(2024, 5, 10);
        assert_eq!(
            status_for_iso("2024-05-10T00:00:01Z", today),
            Ok(PreventiveStatus::Pendente)
        );
        assert_eq!(
            status_for_iso("2024-05-09T23:59:59Z", today),
            Ok(PreventiveStatus::Atrasado)
        );
        assert!(status_for_iso("ontem", today).is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PreventiveStatus::Atrasado).unwrap(),
            "\"atrasado\""
        );
    }
}
