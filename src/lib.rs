pub mod api;
pub mod core;
pub mod gui;
pub mod logging;
pub mod persistence;
pub mod store;
