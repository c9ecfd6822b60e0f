//! Tab titles. Resource pages take `list_name` from contracts; the other
//! pages are listed by hand.

use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_contact::aggregate::Contact;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a005_unit::aggregate::Unit;
use contracts::domain::a006_warranty::aggregate::Warranty;
use contracts::domain::a007_warranty_lot::aggregate::WarrantyLot;
use contracts::domain::a008_preventive::aggregate::Preventive;
use contracts::domain::a009_building_system::aggregate::BuildingSystem;
use contracts::domain::a010_document::aggregate::Document;
use contracts::domain::a011_faq::aggregate::Faq;
use contracts::domain::a012_bulletin::aggregate::Bulletin;
use contracts::domain::common::Resource;

/// Readable tab title for a key; unknown keys get a generic title.
pub fn tab_label(key: &str) -> &'static str {
    match key {
        "d400_summary" => "Painel",

        "a001_product" => Product::list_name(),
        "a002_supplier" => Supplier::list_name(),
        "a003_contact" => Contact::list_name(),
        "a004_development" => Development::list_name(),
        "a005_unit" => Unit::list_name(),
        "a006_warranty" => Warranty::list_name(),
        "a007_warranty_lot" => WarrantyLot::list_name(),
        "a007_warranty_catalog" => "Catálogo de garantias",
        "a008_preventive" => Preventive::list_name(),
        "a008_preventive_calendar" => "Calendário de manutenção",
        "a009_building_system" => BuildingSystem::list_name(),
        "a010_document" => Document::list_name(),
        "a011_faq" => Faq::list_name(),
        "a012_bulletin" => Bulletin::list_name(),

        "sys_users" => "Usuários",

        _ => "Página",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_keys_use_list_names() {
        assert_eq!(tab_label("a011_faq"), Faq::list_name());
        assert_eq!(tab_label("a005_unit"), Unit::list_name());
    }

    #[test]
    fn test_fixed_and_unknown_keys() {
        assert_eq!(tab_label("d400_summary"), "Painel");
        assert_eq!(tab_label("sys_users"), "Usuários");
        assert_eq!(tab_label("nope"), "Página");
    }
}
