pub mod footer;
pub mod modals;
pub mod navbar;
pub mod page_view;
