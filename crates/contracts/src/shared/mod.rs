pub mod error;
pub mod page;
pub mod phone;
pub mod validation;
