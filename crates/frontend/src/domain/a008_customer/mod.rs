pub mod list;
pub mod ui;
