pub mod clear;
pub mod config;
pub mod list;
pub mod prefs;
pub mod rm;
pub mod save;
pub mod show;
