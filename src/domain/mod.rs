pub mod catalog;
pub mod models;
pub mod navigation;
pub mod search;
