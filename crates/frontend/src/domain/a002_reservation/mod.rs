pub mod api;
pub mod flow;
pub mod list;
pub mod ui;
