use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{null_as_default, EntityId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Record
// ============================================================================

/// Product installed in the units (fixtures, equipment, finishing materials)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nome", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "descricao")]
    pub description: Option<String>,

    #[serde(rename = "categoria")]
    pub category: Option<String>,

    #[serde(rename = "marca")]
    pub brand: Option<String>,

    #[serde(rename = "modelo")]
    pub model: Option<String>,

    #[serde(rename = "fornecedor_id")]
    pub supplier_id: Option<EntityId>,

    /// Manufacturer warranty, in months
    #[serde(rename = "prazo_garantia_meses")]
    pub warranty_months: Option<u32>,
}

// ============================================================================
// Normalization
// ============================================================================

/// `/produtos` returns `id_produto` on some routes and `id` on others.
pub fn normalize_product(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_produto")
}

impl Resource for Product {
    fn resource_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "produtos"
    }

    fn element_name() -> &'static str {
        "Produto"
    }

    fn list_name() -> &'static str {
        "Produtos"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        match &self.brand {
            Some(brand) if !brand.trim().is_empty() => format!("{} ({})", self.name, brand),
            _ => self.name.clone(),
        }
    }

    fn normalize(raw: Value) -> Value {
        normalize_product(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nome do produto é obrigatório".into());
        }
        if self.warranty_months == Some(0) {
            return Err("Prazo de garantia deve ser maior que zero".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_product_legacy_id() {
        let out = normalize_product(json!({"id_produto": 12, "nome": "Aquecedor"}));
        assert_eq!(out["id"], out["id_produto"]);
        assert_eq!(out["id"], json!(12));
    }

    #[test]
    fn test_from_raw_decodes_legacy_row() {
        let product = Product::from_raw(json!({
            "id_produto": 4,
            "nome": "Porta corta-fogo",
            "marca": "Acme",
            "fornecedor_id": 2,
            "coluna_desconhecida": true
        }))
        .unwrap();
        assert_eq!(product.id, Some(4));
        assert_eq!(product.name, "Porta corta-fogo");
        assert_eq!(product.supplier_id, Some(2));
        assert_eq!(product.label(), "Porta corta-fogo (Acme)");
    }

    #[test]
    fn test_new_product_serializes_without_id() {
        let product = Product {
            name: "Piso".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["nome"], json!("Piso"));
    }

    #[test]
    fn test_validate() {
        assert!(Product::default().validate().is_err());
        let product = Product {
            name: "Piso".into(),
            warranty_months: Some(0),
            ..Default::default()
        };
        assert_eq!(
            product.validate(),
            Err("Prazo de garantia deve ser maior que zero".to_string())
        );
    }
}
