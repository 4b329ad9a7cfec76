pub mod api;
pub mod cli;
pub mod page;
pub mod ui;
pub mod views;
