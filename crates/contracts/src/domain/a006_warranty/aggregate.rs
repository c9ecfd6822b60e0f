use crate::domain::common::normalize::reconcile_alias;
use crate::domain::common::{add_months, parse_iso_date, EntityId, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Days before the end date when a warranty is flagged as expiring
pub const EXPIRY_WARNING_DAYS: i64 = 30;

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarrantyStatus {
    Vigente,
    AVencer,
    Vencida,
}

impl WarrantyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WarrantyStatus::Vigente => "Vigente",
            WarrantyStatus::AVencer => "A vencer",
            WarrantyStatus::Vencida => "Vencida",
        }
    }

    /// BEM modifier used by the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            WarrantyStatus::Vigente => "badge badge--success",
            WarrantyStatus::AVencer => "badge badge--warning",
            WarrantyStatus::Vencida => "badge badge--error",
        }
    }
}

/// Status of a warranty ending on `end` as seen on `today`.
pub fn warranty_status(end: NaiveDate, today: NaiveDate) -> WarrantyStatus {
    if end < today {
        WarrantyStatus::Vencida
    } else if (end - today).num_days() <= EXPIRY_WARNING_DAYS {
        WarrantyStatus::AVencer
    } else {
        WarrantyStatus::Vigente
    }
}

// ============================================================================
// Record
// ============================================================================

/// Warranty of one product installed in one unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Warranty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "produto_id")]
    pub product_id: Option<EntityId>,

    #[serde(rename = "unidade_id")]
    pub unit_id: Option<EntityId>,

    #[serde(rename = "empreendimento_id")]
    pub development_id: Option<EntityId>,

    #[serde(rename = "descricao")]
    pub description: Option<String>,

    #[serde(rename = "data_inicio")]
    pub start_date: Option<String>,

    #[serde(rename = "data_fim")]
    pub end_date: Option<String>,

    #[serde(rename = "prazo_meses")]
    pub months: Option<u32>,

    #[serde(rename = "condicoes")]
    pub terms: Option<String>,
}

pub fn normalize_warranty(raw: Value) -> Value {
    reconcile_alias(raw, "id", "id_garantia")
}

impl Warranty {
    /// `data_fim` when the backend sends it, otherwise start + months.
    pub fn effective_end_date(&self) -> Option<NaiveDate> {
        if let Some(end) = self.end_date.as_deref().and_then(parse_iso_date) {
            return Some(end);
        }
        let start = self.start_date.as_deref().and_then(parse_iso_date)?;
        add_months(start, self.months?)
    }

    pub fn status(&self, today: NaiveDate) -> Option<WarrantyStatus> {
        self.effective_end_date()
            .map(|end| warranty_status(end, today))
    }
}

impl Resource for Warranty {
    fn resource_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "garantias"
    }

    fn element_name() -> &'static str {
        "Garantia"
    }

    fn list_name() -> &'static str {
        "Garantias"
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn label(&self) -> String {
        self.description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("Garantia #{}", self.id.unwrap_or_default()))
    }

    fn normalize(raw: Value) -> Value {
        normalize_warranty(raw)
    }

    fn validate(&self) -> Result<(), String> {
        if self.product_id.is_none() {
            return Err("Selecione o produto".into());
        }
        let start = match self.start_date.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(value) => parse_iso_date(value).ok_or("Data de início inválida")?,
            None => return Err("Data de início é obrigatória".into()),
        };
        match self.end_date.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(value) => {
                let end = parse_iso_date(value).ok_or("Data de término inválida")?;
                if end < start {
                    return Err("Data de término anterior à data de início".into());
                }
            }
            None => {
                if self.months.unwrap_or(0) == 0 {
                    return Err("Informe a data de término ou o prazo em meses".into());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_warranty() {
        let out = normalize_warranty(json!({"id_garantia": 10}));
        assert_eq!(out["id"], out["id_garantia"]);
    }

    #[test]
    fn test_warranty_status_thresholds() {
        let today = date(2024, 6, 1);
        assert_eq!(warranty_status(date(2024, 5, 31), today), WarrantyStatus::Vencida);
        assert_eq!(warranty_status(today, today), WarrantyStatus::AVencer);
        assert_eq!(warranty_status(date(2024, 7, 1), today), WarrantyStatus::AVencer);
        assert_eq!(warranty_status(date(2024, 7, 2), today), WarrantyStatus::Vigente);
    }

    #[test]
    fn test_effective_end_date_from_months() {
        let warranty = Warranty {
            start_date: Some("2023-01-31".into()),
            months: Some(13),
            ..Default::default()
        };
        assert_eq!(warranty.effective_end_date(), Some(date(2024, 2, 29)));

        let explicit = Warranty {
            end_date: Some("2025-12-31T00:00:00Z".into()),
            ..warranty
        };
        assert_eq!(explicit.effective_end_date(), Some(date(2025, 12, 31)));
        assert_eq!(explicit.status(date(2024, 1, 1)), Some(WarrantyStatus::Vigente));
    }

    #[test]
    fn test_status_unknown_without_dates() {
        assert_eq!(Warranty::default().status(date(2024, 1, 1)), None);
    }

    #[test]
    fn test_validate_warranty() {
        let mut warranty = Warranty {
            product_id: Some(1),
            start_date: Some("2024-01-10".into()),
            ..Default::default()
        };
        assert_eq!(
            warranty.validate(),
            Err("Informe a data de término ou o prazo em meses".to_string())
        );
        warranty.end_date = Some("2023-01-10".into());
        assert_eq!(
            warranty.validate(),
            Err("Data de término anterior à data de início".to_string())
        );
        warranty.end_date = None;
        warranty.months = Some(12);
        assert!(warranty.validate().is_ok());
    }
}
