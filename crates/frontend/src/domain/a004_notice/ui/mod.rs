pub mod admin;
pub mod board;
