pub mod action;
pub mod command;
pub mod command_palette;
pub mod config;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod navigation;
pub mod recovery;
pub mod reducer;
pub mod state;
pub mod ui;
