//! Tabs: key → title (`tab_labels`), key → page (`registry`) and the
//! wrapper that shows/hides a tab's page (`page`).

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label;
