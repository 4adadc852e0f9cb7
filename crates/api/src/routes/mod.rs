pub mod calendar;
pub mod catalog;
pub mod filter;
pub mod proxy;
pub mod ui;
