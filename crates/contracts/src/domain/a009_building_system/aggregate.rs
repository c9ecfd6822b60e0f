use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{null_as_default, EntityId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Building system of a development (elevators, fire protection, plumbing...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nome", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "descricao")]
    pub description: Option<String>,

    #[serde(rename = "categoria")]
    pub category: Option<String>,

    #[serde(rename = "empreendimento_id")]
    pub development_id: Option<EntityId>,
}

pub fn normalize_building_system(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_sistema")
}

impl Resource for BuildingSystem {
    fn resource_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "sistemas"
    }

    fn element_name() -> &'static str {
        "Sistema predial"
    }

    fn list_name() -> &'static str {
        "Sistemas prediais"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn normalize(raw: Value) -> Value {
        normalize_building_system(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome do sistema é obrigatório".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_legacy_id() {
        let system = BuildingSystem::from_raw(json!({
            "id_sistema": 3,
            "nome": "Elevadores",
            "empreendimento_id": 1
        }))
        .unwrap();
        assert_eq!(system.id, Some(3));
        assert_eq!(system.development_id, Some(1));
        assert_eq!(system.label(), "Elevadores");
    }

    #[test]
    fn test_validate_requires_name() {
        assert!(BuildingSystem::default().validate().is_err());
    }
}
