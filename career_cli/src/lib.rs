pub mod commands;
pub mod components;
pub mod keymap;
pub mod report;
pub mod screens;
pub mod ui;
