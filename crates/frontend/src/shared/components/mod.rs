pub mod page_header;
pub mod resource_select;
pub mod stat_card;
pub mod table_checkbox;
pub mod ui;
