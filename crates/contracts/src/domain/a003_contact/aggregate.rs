use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{null_as_default, EntityId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Contact person (supplier staff, building manager, technician)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nome", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "cargo")]
    pub role: Option<String>,

    #[serde(rename = "telefone")]
    pub phone: Option<String>,

    pub email: Option<String>,

    #[serde(rename = "fornecedor_id")]
    pub supplier_id: Option<EntityId>,

    #[serde(rename = "empreendimento_id")]
    pub development_id: Option<EntityId>,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

pub fn normalize_contact(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_contato")
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl Resource for Contact {
    fn resource_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "contatos"
    }

    fn element_name() -> &'static str {
        "Contato"
    }

    fn list_name() -> &'static str {
        "Contatos"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        match &self.role {
            Some(role) if !role.trim().is_empty() => format!("{} - {}", self.name, role),
            _ => self.name.clone(),
        }
    }

    fn normalize(raw: Value) -> Value {
        normalize_contact(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome do contato é obrigatório".into());
        }
        if is_blank(&self.phone) && is_blank(&self.email) {
            return Err("Informe ao menos um telefone ou e-mail".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_contact() {
        let contact = Contact::from_raw(json!({
            "id_contato": 8,
            "nome": "Marina",
            "cargo": "Síndica",
            "telefone": "11 99999-0000"
        }))
        .unwrap();
        assert_eq!(contact.id, Some(8));
        assert_eq!(contact.label(), "Marina - Síndica");
    }

    #[test]
    fn test_validate_requires_phone_or_email() {
        let mut contact = Contact {
            name: "Marina".into(),
            ..Default::default()
        };
        assert!(contact.validate().is_err());
        contact.email = Some("marina@example.com".into());
        assert!(contact.validate().is_ok());
    }
}
