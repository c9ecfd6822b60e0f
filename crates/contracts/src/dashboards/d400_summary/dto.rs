use crate::domain::a008_preventive::aggregate::Preventive;
use crate::domain::a013_ticket::aggregate::{normalize_ticket, Ticket};
use crate::domain::common::{null_as_default, unwrap_collection, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Counters shown as cards on top of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryCounters {
    #[serde(rename = "total_empreendimentos", deserialize_with = "null_as_default")]
    pub developments: u64,
    #[serde(rename = "total_unidades", deserialize_with = "null_as_default")]
    pub units: u64,
    #[serde(rename = "total_produtos", deserialize_with = "null_as_default")]
    pub products: u64,
    #[serde(rename = "total_fornecedores", deserialize_with = "null_as_default")]
    pub suppliers: u64,
    #[serde(rename = "garantias_ativas", deserialize_with = "null_as_default")]
    pub active_warranties: u64,
    #[serde(rename = "garantias_a_vencer", deserialize_with = "null_as_default")]
    pub expiring_warranties: u64,
    #[serde(rename = "chamados_abertos", deserialize_with = "null_as_default")]
    pub open_tickets: u64,
    #[serde(rename = "preventivos_atrasados", deserialize_with = "null_as_default")]
    pub late_preventives: u64,
}

/// Response of `GET /dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub counters: SummaryCounters,

    #[serde(rename = "chamados_recentes", deserialize_with = "null_as_default")]
    pub recent_tickets: Vec<Ticket>,

    #[serde(rename = "proximos_preventivos", deserialize_with = "null_as_default")]
    pub upcoming_preventives: Vec<Preventive>,
}

impl DashboardSummary {
    /// Decode the dashboard payload. The backend may wrap it in `data` and
    /// nested rows carry the same legacy keys as their own endpoints.
    pub fn from_raw(raw: Value) -> Result<Self, serde_json::Error> {
        let mut raw = match raw {
            Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        };

        if let Value::Object(map) = &mut raw {
            if let Some(rows) = map.remove("chamados_recentes").and_then(unwrap_collection) {
                let rows = rows.into_iter().map(normalize_ticket).collect();
                map.insert("chamados_recentes".into(), Value::Array(rows));
            }
            if let Some(rows) = map.remove("proximos_preventivos").and_then(unwrap_collection) {
                let rows = rows.into_iter().map(Preventive::normalize).collect();
                map.insert("proximos_preventivos".into(), Value::Array(rows));
            }
        }

        serde_json::from_value(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_normalizes_nested_rows() {
        let summary = DashboardSummary::from_raw(json!({
            "total_unidades": 120,
            "chamados_abertos": 4,
            "chamados_recentes": [
                {"id_chamado": 7, "titulo": "Portão travado", "status": "aberto"}
            ],
            "proximos_preventivos": {"data": [
                {"id_preventivo": 3, "atividade": "Limpeza de caixa d'água", "periodicidade": "semestral"}
            ]}
        }))
        .unwrap();
        assert_eq!(summary.counters.units, 120);
        assert_eq!(summary.counters.open_tickets, 4);
        assert_eq!(summary.counters.products, 0);
        assert_eq!(summary.recent_tickets[0].id, Some(7));
        assert_eq!(summary.upcoming_preventives[0].id, Some(3));
    }

    #[test]
    fn test_from_raw_unwraps_data_envelope() {
        let summary = DashboardSummary::from_raw(json!({
            "data": {"total_produtos": 15}
        }))
        .unwrap();
        assert_eq!(summary.counters.products, 15);
        assert!(summary.recent_tickets.is_empty());
    }

    #[test]
    fn test_from_raw_null_counters_and_rows() {
        let summary = DashboardSummary::from_raw(json!({
            "total_unidades": null,
            "chamados_abertos": 2,
            "chamados_recentes": [
                {"id_chamado": 8, "titulo": null, "status": "aberto"}
            ],
            "proximos_preventivos": null
        }))
        .unwrap();
        assert_eq!(summary.counters.units, 0);
        assert_eq!(summary.counters.open_tickets, 2);
        assert_eq!(summary.recent_tickets[0].title, "");
        assert!(summary.upcoming_preventives.is_empty());
    }
}
