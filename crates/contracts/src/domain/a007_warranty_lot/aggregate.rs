use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{add_months, null_as_default, parse_iso_date, EntityId, Resource};
use crate::domain::a006_warranty::aggregate::{warranty_status, WarrantyStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Warranty granted to a whole delivery lot (tower, block) rather than one unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarrantyLot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    /// Lot code ("Torre A", "Lote 03")
    #[serde(rename = "lote", deserialize_with = "null_as_default")]
    pub lot: String,

    #[serde(rename = "empreendimento_id")]
    pub development_id: Option<EntityId>,

    #[serde(rename = "produto_id")]
    pub product_id: Option<EntityId>,

    #[serde(rename = "fornecedor_id")]
    pub supplier_id: Option<EntityId>,

    #[serde(rename = "sistema")]
    pub building_system: Option<String>,

    #[serde(rename = "data_entrega")]
    pub delivery_date: Option<String>,

    #[serde(rename = "prazo_meses")]
    pub months: Option<u32>,

    #[serde(rename = "quantidade")]
    pub quantity: Option<u32>,

    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

pub fn normalize_warranty_lot(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_garantia_lote")
}

impl WarrantyLot {
    pub fn end_date(&self) -> Option<NaiveDate> {
        let delivery = self.delivery_date.as_deref().and_then(parse_iso_date)?;
        add_months(delivery, self.months?)
    }

    pub fn status(&self, today: NaiveDate) -> Option<WarrantyStatus> {
        self.end_date().map(|end| warranty_status(end, today))
    }
}

impl Resource for WarrantyLot {
    fn resource_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "garantias-lote"
    }

    fn element_name() -> &'static str {
        "Garantia por lote"
    }

    fn list_name() -> &'static str {
        "Garantias por lote"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        match &self.building_system {
            Some(system) if !system.trim().is_empty() => format!("{} - {}", self.lot, system),
            _ => self.lot.clone(),
        }
    }

    fn normalize(raw: Value) -> Value {
        normalize_warranty_lot(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.lot.trim().is_empty() {
            return Err("Lote é obrigatório".into());
        }
        if self.development_id.is_none() {
            return Err("Selecione o empreendimento".into());
        }
        if let Some(date) = self.delivery_date.as_deref().filter(|d| !d.trim().is_empty()) {
            if parse_iso_date(date).is_none() {
                return Err("Data de entrega inválida".into());
            }
        }
        if self.months.unwrap_or(0) == 0 {
            return Err("Prazo em meses deve ser maior que zero".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_warranty_lot() {
        let out = normalize_warranty_lot(json!({"id_garantia_lote": 21, "lote": "Torre B"}));
        assert_eq!(out["id"], json!(21));
        assert_eq!(out["id_garantia_lote"], json!(21));
    }

    #[test]
    fn test_end_date_and_status() {
        let lot = WarrantyLot::from_raw(json!({
            "id_garantia_lote": 1,
            "lote": "Torre A",
            "empreendimento_id": 2,
            "data_entrega": "2022-03-10",
            "prazo_meses": 24
        }))
        .unwrap();
        assert_eq!(lot.end_date(), NaiveDate::from_ymd_opt(2024, 3, 10));
        let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(lot.status(today), Some(WarrantyStatus::Vencida));
        assert!(lot.validate().is_ok());
    }
}
