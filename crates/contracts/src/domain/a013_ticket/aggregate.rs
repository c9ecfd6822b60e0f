use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{null_as_default, EntityId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Service ticket opened by a resident. Read-only in this client: tickets
/// only appear in the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub id: Option<EntityId>,

    #[serde(rename = "titulo", deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(rename = "descricao")]
    pub description: Option<String>,

    /// Free text from the backend ("aberto", "em_andamento", "concluido"...)
    pub status: Option<String>,

    #[serde(rename = "unidade_id")]
    pub unit_id: Option<EntityId>,

    #[serde(rename = "unidade")]
    pub unit_label: Option<String>,

    #[serde(rename = "data_abertura")]
    pub opened_at: Option<String>,
}

pub fn normalize_ticket(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_chamado")
}

impl Ticket {
    pub fn from_raw(raw: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(normalize_ticket(raw))
    }

    pub fn status_label(&self) -> String {
        match self.status.as_deref().map(str::trim) {
            Some("aberto") => "Aberto".into(),
            Some("em_andamento") => "Em andamento".into(),
            Some("concluido") => "Concluído".into(),
            Some("cancelado") => "Cancelado".into(),
            Some(other) if !other.is_empty() => other.to_string(),
            _ => "—".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_legacy_id() {
        let ticket = Ticket::from_raw(json!({
            "id_chamado": 42,
            "titulo": "Vazamento no banheiro",
            "status": "em_andamento"
        }))
        .unwrap();
        assert_eq!(ticket.id, Some(42));
        assert_eq!(ticket.status_label(), "Em andamento");
    }

    #[test]
    fn test_unknown_status_passes_through() {
        let ticket = Ticket {
            status: Some("aguardando_peca".into()),
            ..Default::default()
        };
        assert_eq!(ticket.status_label(), "aguardando_peca");
        assert_eq!(Ticket::default().status_label(), "—");
    }
}
