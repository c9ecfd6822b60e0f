//! Warranties-by-lot catalog backed by a static demo dataset.
//!
//! The dataset lives only in memory; nothing here is sent to the backend.
//! Each catalog item belongs to a delivery lot and its warranty runs from
//! the lot delivery date for a fixed number of months.

use crate::domain::a006_warranty::aggregate::{warranty_status, WarrantyStatus};
use crate::domain::common::{add_months, parse_iso_date};
use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLot {
    pub id: u32,
    pub code: &'static str,
    pub development: &'static str,
    pub tower: &'static str,
    pub delivery_date: &'static str,
}

impl CatalogLot {
    pub fn delivery(&self) -> anyhow::Result<NaiveDate> {
        parse_iso_date(self.delivery_date)
            .with_context(|| format!("lote {}: data de entrega inválida", self.code))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u32,
    pub lot_id: u32,
    pub building_system: &'static str,
    pub component: &'static str,
    pub supplier: &'static str,
    pub warranty_months: u32,
}

pub const CATALOG_LOTS: &[CatalogLot] = &[
    CatalogLot { id: 1, code: "L-01", development: "Residencial Aurora", tower: "Torre A", delivery_date: "2021-03-15" },
    CatalogLot { id: 2, code: "L-02", development: "Residencial Aurora", tower: "Torre B", delivery_date: "2022-08-30" },
    CatalogLot { id: 3, code: "L-03", development: "Jardim das Palmeiras", tower: "Bloco Único", delivery_date: "2024-11-20" },
];

pub const CATALOG_ITEMS: &[CatalogItem] = &[
    CatalogItem { id: 1, lot_id: 1, building_system: "Estrutura", component: "Fundações e estrutura de concreto", supplier: "Construtora Horizonte", warranty_months: 60 },
    CatalogItem { id: 2, lot_id: 1, building_system: "Impermeabilização", component: "Lajes e áreas molhadas", supplier: "ImperTec", warranty_months: 60 },
    CatalogItem { id: 3, lot_id: 1, building_system: "Instalações hidráulicas", component: "Tubulações de água fria e quente", supplier: "Hidro Sul", warranty_months: 36 },
    CatalogItem { id: 4, lot_id: 1, building_system: "Revestimentos", component: "Revestimento cerâmico de fachada", supplier: "Cerâmica Paulista", warranty_months: 24 },
    CatalogItem { id: 5, lot_id: 1, building_system: "Elevadores", component: "Elevadores sociais e de serviço", supplier: "Elevare", warranty_months: 12 },
    CatalogItem { id: 6, lot_id: 2, building_system: "Estrutura", component: "Fundações e estrutura de concreto", supplier: "Construtora Horizonte", warranty_months: 60 },
    CatalogItem { id: 7, lot_id: 2, building_system: "Instalações elétricas", component: "Quadros de distribuição e cabeamento", supplier: "Eletro Forte", warranty_months: 36 },
    CatalogItem { id: 8, lot_id: 2, building_system: "Esquadrias", component: "Esquadrias de alumínio", supplier: "Alumax", warranty_months: 60 },
    CatalogItem { id: 9, lot_id: 2, building_system: "Pintura", component: "Pintura interna de áreas comuns", supplier: "Cores & Cia", warranty_months: 24 },
    CatalogItem { id: 10, lot_id: 2, building_system: "Sistema de incêndio", component: "Bombas e hidrantes", supplier: "FireSafe", warranty_months: 12 },
    CatalogItem { id: 11, lot_id: 3, building_system: "Estrutura", component: "Fundações e estrutura de concreto", supplier: "Construtora Horizonte", warranty_months: 60 },
    CatalogItem { id: 12, lot_id: 3, building_system: "Impermeabilização", component: "Cobertura e reservatórios", supplier: "ImperTec", warranty_months: 60 },
    CatalogItem { id: 13, lot_id: 3, building_system: "Instalações hidráulicas", component: "Louças e metais", supplier: "Hidro Sul", warranty_months: 12 },
    CatalogItem { id: 14, lot_id: 3, building_system: "Portões automáticos", component: "Motores e automação de portões", supplier: "Automatiza", warranty_months: 12 },
];

/// Distinct building systems of the catalog, sorted.
pub static BUILDING_SYSTEMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    CATALOG_ITEMS
        .iter()
        .map(|item| item.building_system)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub lot_id: Option<u32>,
    pub building_system: Option<String>,
    /// Case-insensitive match on component, supplier and system
    pub text: String,
    pub only_active: bool,
}

impl CatalogFilter {
    fn matches(&self, lot: &CatalogLot, item: &CatalogItem) -> bool {
        if self.lot_id.is_some_and(|id| id != lot.id) {
            return false;
        }
        if let Some(system) = self.building_system.as_deref().filter(|s| !s.is_empty()) {
            if item.building_system != system {
                return false;
            }
        }
        let text = self.text.trim().to_lowercase();
        if text.is_empty() {
            return true;
        }
        [item.component, item.supplier, item.building_system]
            .iter()
            .any(|field| field.to_lowercase().contains(&text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub lot: CatalogLot,
    pub item: CatalogItem,
    pub end_date: NaiveDate,
    pub status: WarrantyStatus,
}

pub fn find_lot(id: u32) -> Option<&'static CatalogLot> {
    CATALOG_LOTS.iter().find(|lot| lot.id == id)
}

/// Join catalog items with their lot, compute end date and status, filter.
///
/// Entries are ordered by lot, then by end date, then by item id.
pub fn catalog_entries(filter: &CatalogFilter, today: NaiveDate) -> anyhow::Result<Vec<CatalogEntry>> {
    let mut entries = Vec::new();
    for item in CATALOG_ITEMS {
        let lot = find_lot(item.lot_id)
            .ok_or_else(|| anyhow!("item {} aponta para lote inexistente {}", item.id, item.lot_id))?;
        if !filter.matches(lot, item) {
            continue;
        }
        let delivery = lot.delivery()?;
        let end_date = add_months(delivery, item.warranty_months)
            .with_context(|| format!("item {}: prazo fora do intervalo de datas", item.id))?;
        let status = warranty_status(end_date, today);
        if filter.only_active && status == WarrantyStatus::Vencida {
            continue;
        }
        entries.push(CatalogEntry {
            lot: lot.clone(),
            item: item.clone(),
            end_date,
            status,
        });
    }
    entries.sort_by(|a, b| {
        a.lot
            .id
            .cmp(&b.lot.id)
            .then(a.end_date.cmp(&b.end_date))
            .then(a.item.id.cmp(&b.item.id))
    });
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_every_item_has_a_lot_and_valid_delivery() {
        for lot in CATALOG_LOTS {
            assert!(lot.delivery().is_ok(), "lot {}", lot.code);
        }
        for item in CATALOG_ITEMS {
            assert!(find_lot(item.lot_id).is_some(), "item {}", item.id);
        }
    }

    #[test]
    fn test_unfiltered_returns_all_sorted() {
        let entries = catalog_entries(&CatalogFilter::default(), today()).unwrap();
        assert_eq!(entries.len(), CATALOG_ITEMS.len());
        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.lot.id < b.lot.id || (a.lot.id == b.lot.id && a.end_date <= b.end_date));
        }
    }

    #[test]
    fn test_end_date_is_delivery_plus_months() {
        let filter = CatalogFilter {
            lot_id: Some(1),
            text: "elevadores".into(),
            ..Default::default()
        };
        let entries = catalog_entries(&filter, today()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].end_date, NaiveDate::from_ymd_opt(2022, 3, 15).unwrap());
        assert_eq!(entries[0].status, WarrantyStatus::Vencida);
    }

    #[test]
    fn test_filter_by_system_and_text() {
        let filter = CatalogFilter {
            building_system: Some("Estrutura".into()),
            ..Default::default()
        };
        let entries = catalog_entries(&filter, today()).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.item.building_system == "Estrutura"));

        let filter = CatalogFilter {
            text: "IMPERTEC".into(),
            ..Default::default()
        };
        let entries = catalog_entries(&filter, today()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_only_active_drops_expired() {
        let filter = CatalogFilter {
            only_active: true,
            ..Default::default()
        };
        let entries = catalog_entries(&filter, today()).unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.status != WarrantyStatus::Vencida));
        assert!(entries.len() < CATALOG_ITEMS.len());
    }

    #[test]
    fn test_building_systems_are_distinct_and_sorted() {
        let systems = &*BUILDING_SYSTEMS;
        let mut sorted = systems.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(systems, &sorted);
        assert!(systems.contains(&"Elevadores"));
    }
}
