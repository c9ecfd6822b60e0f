use crate::domain::common::normalize::reconcile_all;
use crate::domain::common::{null_as_default, EntityId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Property unit (apartment, house, shop) inside a development
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// Unit number as printed on the door ("12B", "301")
    #[serde(rename = "numero", deserialize_with = "null_as_default")]
    pub number: String,

    #[serde(rename = "bloco")]
    pub block: Option<String>,

    #[serde(rename = "andar")]
    pub floor: Option<i32>,

    #[serde(rename = "tipo")]
    pub kind: Option<String>,

    pub area_m2: Option<f64>,

    #[serde(rename = "empreendimento_id")]
    pub development_id: Option<EntityId>,

    #[serde(rename = "proprietario")]
    pub owner: Option<String>,
}

/// `/unidades` mixes `id`/`id_unidade` and `numero`/`numero_unidade`.
pub fn normalize_unit(raw: Value) -> Value {
    reconcile_all(raw, &[("id", "id_unidade"), ("numero", "numero_unidade")])
}

pub const UNIT_KINDS: &[&str] = &["Apartamento", "Casa", "Cobertura", "Loja", "Sala comercial"];

impl Resource for Unit {
    fn resource_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "unidades"
    }

    fn element_name() -> &'static str {
        "Unidade"
    }

    fn list_name() -> &'static str {
        "Unidades"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        match &self.block {
            Some(block) if !block.trim().is_empty() => format!("{} / {}", block, self.number),
            _ => self.number.clone(),
        }
    }

    fn normalize(raw: Value) -> Value {
        normalize_unit(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.number.trim().is_empty() {
            return Err("Número da unidade é obrigatório".into());
        }
        if self.development_id.is_none() {
            return Err("Selecione o empreendimento".into());
        }
        if matches!(self.area_m2, Some(area) if area <= 0.0) {
            return Err("Área deve ser maior que zero".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_unit_example() {
        let out = normalize_unit(json!({"id_unidade": 5, "numero_unidade": "12B"}));
        assert_eq!(out["id"], json!(5));
        assert_eq!(out["id_unidade"], json!(5));
        assert_eq!(out["numero"], json!("12B"));
        assert_eq!(out["numero_unidade"], json!("12B"));
    }

    #[test]
    fn test_normalize_unit_keeps_other_fields() {
        let out = normalize_unit(json!({"id": 2, "numero": "301", "bloco": "A"}));
        assert_eq!(out["id_unidade"], json!(2));
        assert_eq!(out["numero_unidade"], json!("301"));
        assert_eq!(out["bloco"], json!("A"));
    }

    #[test]
    fn test_from_raw_unit() {
        let unit = Unit::from_raw(json!({
            "id_unidade": 5,
            "numero_unidade": "12B",
            "bloco": "Torre 1",
            "area_m2": 72.5,
            "empreendimento_id": 1
        }))
        .unwrap();
        assert_eq!(unit.id, Some(5));
        assert_eq!(unit.number, "12B");
        assert_eq!(unit.label(), "Torre 1 / 12B");
        assert!(unit.validate().is_ok());
    }

    #[test]
    fn test_validate_unit() {
        let unit = Unit {
            number: "12B".into(),
            ..Default::default()
        };
        assert_eq!(unit.validate(), Err("Selecione o empreendimento".to_string()));

        let unit = Unit {
            number: "12B".into(),
            development_id: Some(1),
            area_m2: Some(0.0),
            ..Default::default()
        };
        assert_eq!(unit.validate(), Err("Área deve ser maior que zero".to_string()));
    }
}
