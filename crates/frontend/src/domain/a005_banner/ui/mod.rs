pub mod admin;
pub mod carousel;
