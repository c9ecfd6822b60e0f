use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{null_as_default, parse_iso_date, EntityId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Residential development (Empreendimento)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Development {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nome", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "endereco")]
    pub address: Option<String>,

    #[serde(rename = "cidade")]
    pub city: Option<String>,

    #[serde(rename = "uf")]
    pub state: Option<String>,

    #[serde(rename = "construtora")]
    pub builder: Option<String>,

    /// Keys handed over to the owners (ISO date)
    #[serde(rename = "data_entrega")]
    pub delivery_date: Option<String>,

    #[serde(rename = "total_unidades")]
    pub total_units: Option<u32>,
}

pub fn normalize_development(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_empreendimento")
}

impl Resource for Development {
    fn resource_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "empreendimentos"
    }

    fn element_name() -> &'static str {
        "Empreendimento"
    }

    fn list_name() -> &'static str {
        "Empreendimentos"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn normalize(raw: Value) -> Value {
        normalize_development(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome do empreendimento é obrigatório".into());
        }
        if let Some(uf) = self.state.as_deref().filter(|s| !s.trim().is_empty()) {
            if uf.trim().chars().count() != 2 || !uf.trim().chars().all(|c| c.is_ascii_alphabetic()) {
                return Err("UF deve conter 2 letras".into());
            }
        }
        if let Some(date) = self.delivery_date.as_deref().filter(|d| !d.trim().is_empty()) {
            if parse_iso_date(date).is_none() {
                return Err("Data de entrega inválida".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_development() {
        let out = normalize_development(json!({"id_empreendimento": 1, "nome": "Residencial Aurora"}));
        assert_eq!(out["id"], json!(1));
    }

    #[test]
    fn test_validate() {
        let mut development = Development {
            name: "Residencial Aurora".into(),
            state: Some("SP".into()),
            delivery_date: Some("2023-06-30".into()),
            ..Default::default()
        };
        assert!(development.validate().is_ok());

        development.state = Some("São Paulo".into());
        assert_eq!(development.validate(), Err("UF deve conter 2 letras".to_string()));

        development.state = None;
        development.delivery_date = Some("30/06/2023".into());
        assert_eq!(development.validate(), Err("Data de entrega inválida".to_string()));
    }
}
