use super::schedule::{
    next_due_date, status_for, Periodicity, PreventiveStatus, ScheduleError,
};
use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{format_iso, null_as_default, parse_iso_date, EntityId, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Preventive maintenance task
// ============================================================================

/// Recurring maintenance activity on a building system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preventive {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "atividade", deserialize_with = "null_as_default")]
    pub activity: String,

    #[serde(rename = "sistema_id")]
    pub building_system_id: Option<EntityId>,

    #[serde(rename = "empreendimento_id")]
    pub development_id: Option<EntityId>,

    /// Periodicity label as stored by the backend ("mensal", "Trimestral")
    #[serde(rename = "periodicidade", deserialize_with = "null_as_default")]
    pub periodicity: String,

    #[serde(rename = "ultima_execucao")]
    pub last_execution: Option<String>,

    #[serde(rename = "proxima_execucao")]
    pub next_execution: Option<String>,

    #[serde(rename = "responsavel")]
    pub responsible: Option<String>,

    pub status: Option<String>,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

pub fn normalize_preventive(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_preventivo")
}

impl Preventive {
    pub fn periodicity(&self) -> Option<Periodicity> {
        Periodicity::from_label(&self.periodicity)
    }

    pub fn next_execution_date(&self) -> Option<NaiveDate> {
        self.next_execution.as_deref().and_then(parse_iso_date)
    }

    /// Stored `concluido` wins; otherwise the status follows the next date.
    pub fn effective_status(&self, today: NaiveDate) -> Option<PreventiveStatus> {
        if self.status.as_deref().map(str::trim) == Some(PreventiveStatus::Concluido.as_str()) {
            return Some(PreventiveStatus::Concluido);
        }
        self.next_execution_date()
            .map(|scheduled| status_for(scheduled, today))
    }

    /// Record an execution done on `today` and schedule the next one.
    pub fn register_execution(&mut self, today: NaiveDate) -> Result<(), ScheduleError> {
        let periodicity = self
            .periodicity()
            .ok_or_else(|| ScheduleError::UnknownPeriodicity(self.periodicity.clone()))?;
        self.last_execution = Some(format_iso(today));
        self.next_execution = Some(format_iso(next_due_date(today, periodicity)));
        self.status = Some(PreventiveStatus::Pendente.as_str().to_string());
        Ok(())
    }
}

impl Resource for Preventive {
    fn resource_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "preventivos"
    }

    fn element_name() -> &'static str {
        "Preventivo"
    }

    fn list_name() -> &'static str {
        "Manutenção preventiva"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        self.activity.clone()
    }

    fn normalize(raw: Value) -> Value {
        normalize_preventive(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.activity.trim().is_empty() {
            return Err("Atividade é obrigatória".into());
        }
        if self.periodicity().is_none() {
            return Err("Selecione a periodicidade".into());
        }
        for (value, name) in [
            (&self.last_execution, "última execução"),
            (&self.next_execution, "próxima execução"),
        ] {
            if let Some(date) = value.as_deref().filter(|d| !d.trim().is_empty()) {
                if parse_iso_date(date).is_none() {
                    return Err(format!("Data de {} inválida", name));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Attachments
// ============================================================================

/// File attached to a preventive task (report, photo, invoice)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreventiveAttachment {
    pub id: Option<EntityId>,

    #[serde(rename = "preventivo_id")]
    pub preventive_id: Option<EntityId>,

    #[serde(rename = "nome_arquivo", deserialize_with = "null_as_default")]
    pub file_name: String,

    pub url: Option<String>,

    #[serde(rename = "tamanho")]
    pub size_bytes: Option<u64>,

    #[serde(rename = "enviado_em")]
    pub uploaded_at: Option<String>,
}

pub fn normalize_attachment(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_anexo")
}

impl PreventiveAttachment {
    pub fn from_raw(raw: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(normalize_attachment(raw))
    }
}

/// Multipart field carrying the uploaded file
pub const ATTACHMENT_FILE_FIELD: &str = "arquivo";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_raw_preventive() {
        let task = Preventive::from_raw(json!({
            "id_preventivo": 3,
            "atividade": "Limpeza de reservatórios",
            "periodicidade": "Semestral",
            "proxima_execucao": "2024-07-01"
        }))
        .unwrap();
        assert_eq!(task.id, Some(3));
        assert_eq!(task.periodicity(), Some(Periodicity::Semestral));
        assert_eq!(
            task.effective_status(date(2024, 7, 2)),
            Some(PreventiveStatus::Atrasado)
        );
        assert_eq!(
            task.effective_status(date(2024, 7, 1)),
            Some(PreventiveStatus::Pendente)
        );
    }

    #[test]
    fn test_from_raw_null_text_fields() {
        let task = Preventive::from_raw(json!({
            "id_preventivo": 4,
            "atividade": "Limpeza",
            "periodicidade": null
        }))
        .unwrap();
        assert_eq!(task.id, Some(4));
        assert_eq!(task.periodicity, "");
        assert_eq!(task.periodicity(), None);

        let attachment = PreventiveAttachment::from_raw(json!({
            "id_anexo": 1,
            "nome_arquivo": null
        }))
        .unwrap();
        assert_eq!(attachment.file_name, "");
    }

    #[test]
    fn test_concluded_status_wins() {
        let task = Preventive {
            status: Some("concluido".into()),
            next_execution: Some("2020-01-01".into()),
            ..Default::default()
        };
        assert_eq!(
            task.effective_status(date(2024, 1, 1)),
            Some(PreventiveStatus::Concluido)
        );
    }

    #[test]
    fn test_register_execution() {
        let mut task = Preventive {
            activity: "Teste de bombas".into(),
            periodicity: "mensal".into(),
            next_execution: Some("2024-01-05".into()),
            status: Some("atrasado".into()),
            ..Default::default()
        };
        task.register_execution(date(2024, 1, 10)).unwrap();
        assert_eq!(task.last_execution.as_deref(), Some("2024-01-10"));
        assert_eq!(task.next_execution.as_deref(), Some("2024-02-09"));
        assert_eq!(task.status.as_deref(), Some("pendente"));
    }

    #[test]
    fn test_register_execution_unknown_periodicity() {
        let mut task = Preventive {
            periodicity: "bienal".into(),
            ..Default::default()
        };
        assert!(task.register_execution(date(2024, 1, 10)).is_err());
        assert!(task.last_execution.is_none());
    }

    #[test]
    fn test_validate_preventive() {
        let mut task = Preventive {
            activity: "Teste de bombas".into(),
            periodicity: "mensal".into(),
            next_execution: Some("05/01/2024".into()),
            ..Default::default()
        };
        assert_eq!(
            task.validate(),
            Err("Data de próxima execução inválida".to_string())
        );
        task.next_execution = Some("2024-01-05".into());
        assert!(task.validate().is_ok());
    }

    #[test]
    fn test_attachment_from_raw() {
        let attachment = PreventiveAttachment::from_raw(json!({
            "id_anexo": 4,
            "preventivo_id": 3,
            "nome_arquivo": "relatorio.pdf"
        }))
        .unwrap();
        assert_eq!(attachment.id, Some(4));
        assert_eq!(attachment.file_name, "relatorio.pdf");
    }
}
