use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{null_as_default, EntityId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Supplier or service provider (Fornecedor)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nome", deserialize_with = "null_as_default")]
    pub name: String,

    pub cnpj: Option<String>,

    #[serde(rename = "telefone")]
    pub phone: Option<String>,

    pub email: Option<String>,

    #[serde(rename = "endereco")]
    pub address: Option<String>,

    /// Person to talk to at the supplier
    #[serde(rename = "responsavel")]
    pub contact_person: Option<String>,

    #[serde(rename = "ramo")]
    pub segment: Option<String>,
}

pub fn normalize_supplier(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_fornecedor")
}

impl Resource for Supplier {
    fn resource_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "fornecedores"
    }

    fn element_name() -> &'static str {
        "Fornecedor"
    }

    fn list_name() -> &'static str {
        "Fornecedores"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn normalize(raw: Value) -> Value {
        normalize_supplier(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome do fornecedor é obrigatório".into());
        }

        // Empty CNPJ is allowed for individual providers
        if let Some(cnpj) = self.cnpj.as_deref().filter(|c| !c.trim().is_empty()) {
            let digits = cnpj.chars().filter(|c| c.is_ascii_digit()).count();
            if digits != 14 {
                return Err("CNPJ deve conter 14 dígitos".into());
            }
        }

        if let Some(email) = self.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if !email.contains('@') {
                return Err("E-mail inválido".into());
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
    fn test_normalize_supplier() {
        let out = normalize_supplier(json!({"id_fornecedor": 3, "nome": "Hidro Ltda"}));
        assert_eq!(out["id"], json!(3));
        assert_eq!(out["id_fornecedor"], json!(3));
    }

    #[test]
    fn test_validate_cnpj() {
        let mut supplier = Supplier {
            name: "Hidro Ltda".into(),
            cnpj: Some("12.345.678/0001-90".into()),
            ..Default::default()
        };
        assert!(supplier.validate().is_ok());

        supplier.cnpj = Some("123".into());
        assert_eq!(supplier.validate(), Err("CNPJ deve conter 14 dígitos".to_string()));

        supplier.cnpj = Some(String::new());
        assert!(supplier.validate().is_ok());
    }

    #[test]
    fn test_validate_email() {
        let supplier = Supplier {
            name: "Hidro Ltda".into(),
            email: Some("contato.hidro".into()),
            ..Default::default()
        };
        assert_eq!(supplier.validate(), Err("E-mail inválido".to_string()));
    }
}
