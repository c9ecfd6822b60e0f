//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a005_unit--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records with search and sorting.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Summary / calendar / catalog views.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a005_unit--list"));
        assert!(is_valid_page_id("d400_summary--dashboard"));
        assert!(!is_valid_page_id("a005_unit"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a005_unit--popup"));
    }
}
