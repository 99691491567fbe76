pub mod aggregate;

pub use aggregate::{ServiceCatalog, ServiceCategoryNode};
