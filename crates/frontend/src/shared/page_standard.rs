//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a004_notice--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity half of the id is the `domain/` or `system/` directory that
//! renders the page.

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view or form.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// One step of the reservation workflow.
pub const PAGE_CAT_STEP: &str = "step";

/// Public landing content (home, notice board).
pub const PAGE_CAT_PUBLIC: &str = "public";

/// Login and other system pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_STEP,
    PAGE_CAT_PUBLIC,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a004_notice--list"));
        assert!(is_valid_page_id("a002_reservation--step"));
        assert!(!is_valid_page_id("a004_notice"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_notice--chart"));
    }
}
