use serde::{Deserialize, Serialize};

// ============================================================================
// Node
// ============================================================================

/// One node of the service-category tree.
///
/// Depth 0 is a main service; deeper nodes are add-ons of their parent.
/// Prices are whole currency units, durations whole hours.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategoryNode {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub price: u64,
    #[serde(default, alias = "time")]
    pub duration: u32,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub children: Vec<ServiceCategoryNode>,
}

impl ServiceCategoryNode {
    pub fn is_main(&self) -> bool {
        self.depth == 0
    }

    /// Depth-0 node with price 0: the UI treats it as "nothing chosen yet"
    pub fn is_free_main(&self) -> bool {
        self.is_main() && self.price == 0
    }

    /// Children that come with the main service at no cost
    pub fn included_items(&self) -> impl Iterator<Item = &ServiceCategoryNode> {
        self.children.iter().filter(|c| c.price == 0)
    }

    /// Children the customer can add for an extra charge
    pub fn paid_add_ons(&self) -> impl Iterator<Item = &ServiceCategoryNode> {
        self.children.iter().filter(|c| c.price > 0)
    }

    pub fn has_child(&self, id: i64) -> bool {
        self.children.iter().any(|c| c.id == id)
    }

    fn find(&self, id: i64) -> Option<&ServiceCategoryNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only view over the fetched category tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    roots: Vec<ServiceCategoryNode>,
}

impl ServiceCatalog {
    pub fn new(roots: Vec<ServiceCategoryNode>) -> Self {
        Self { roots }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn main_services(&self) -> impl Iterator<Item = &ServiceCategoryNode> {
        self.roots.iter().filter(|n| n.is_main())
    }

    pub fn find_main(&self, id: i64) -> Option<&ServiceCategoryNode> {
        self.main_services().find(|n| n.id == id)
    }

    /// Any node of the tree by id
    pub fn find(&self, id: i64) -> Option<&ServiceCategoryNode> {
        self.roots.iter().find_map(|n| n.find(id))
    }

    /// Add-ons selectable under the given main service; empty when unknown
    pub fn eligible_add_ons(&self, main_id: i64) -> &[ServiceCategoryNode] {
        self.find_main(main_id)
            .map(|m| m.children.as_slice())
            .unwrap_or(&[])
    }

    /// Initial selection: the free placeholder when the tree has one, so the
    /// customer has to pick a concrete service; otherwise the first main service
    pub fn default_main(&self) -> Option<&ServiceCategoryNode> {
        self.main_services()
            .find(|n| n.is_free_main())
            .or_else(|| self.main_services().next())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn node(id: i64, name: &str, price: u64, duration: u32, depth: u32) -> ServiceCategoryNode {
        ServiceCategoryNode {
            id,
            name: name.to_string(),
            description: None,
            price,
            duration,
            depth,
            children: Vec::new(),
        }
    }

    /// 기본청소 (30000 / 3h) with one included item and one paid add-on,
    /// plus 이사청소 (80000 / 6h) with its own add-on.
    pub fn catalog() -> ServiceCatalog {
        let mut basic = node(1, "기본청소", 30000, 3, 0);
        basic.children = vec![
            node(11, "분리수거", 0, 0, 1),
            node(12, "냉장고청소", 10000, 1, 1),
        ];
        let mut moving = node(2, "이사청소", 80000, 6, 0);
        moving.children = vec![node(21, "베란다청소", 20000, 2, 1)];
        ServiceCatalog::new(vec![basic, moving])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_split_children() {
        let catalog = catalog();
        let basic = catalog.find_main(1).unwrap();
        let included: Vec<i64> = basic.included_items().map(|n| n.id).collect();
        let paid: Vec<i64> = basic.paid_add_ons().map(|n| n.id).collect();
        assert_eq!(included, vec![11]);
        assert_eq!(paid, vec![12]);
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.find(21).map(|n| n.name.as_str()), Some("베란다청소"));
        assert!(catalog.find_main(12).is_none());
        assert_eq!(catalog.eligible_add_ons(2).len(), 1);
        assert!(catalog.eligible_add_ons(99).is_empty());
    }

    #[test]
    fn test_free_placeholder_is_default() {
        let mut free = node(0, "서비스 선택", 0, 0, 0);
        free.children = vec![node(5, "기본 점검", 0, 1, 1)];
        let catalog = ServiceCatalog::new(vec![node(3, "에어컨청소", 50000, 2, 0), free]);
        assert!(catalog.find_main(0).unwrap().is_free_main());
        assert_eq!(catalog.default_main().map(|n| n.id), Some(0));
    }

    #[test]
    fn test_default_without_placeholder_is_first_main() {
        assert_eq!(catalog().default_main().map(|n| n.id), Some(1));
        assert_eq!(ServiceCatalog::default().default_main(), None);
    }

    #[test]
    fn test_deserialize_tree() {
        let raw = r#"[{"id":1,"name":"기본청소","price":30000,"time":3,"depth":0,
            "children":[{"id":12,"name":"냉장고청소","price":10000,"duration":1,"depth":1}]}]"#;
        let roots: Vec<ServiceCategoryNode> = serde_json::from_str(raw).unwrap();
        assert_eq!(roots[0].duration, 3);
        assert_eq!(roots[0].children[0].duration, 1);
        assert!(roots[0].children[0].children.is_empty());
    }
}
