pub mod common;

pub mod a001_product;
pub mod a002_supplier;
pub mod a003_contact;
pub mod a004_development;
pub mod a005_unit;
pub mod a006_warranty;
pub mod a007_warranty_lot;
pub mod a008_preventive;
pub mod a009_building_system;
pub mod a010_document;
pub mod a011_faq;
pub mod a012_bulletin;
pub mod a013_ticket;
