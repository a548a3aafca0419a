pub mod clipboard;
pub mod controller;
pub mod draft;
pub mod gui;
pub mod help_window;
pub mod history;
pub mod logging;
pub mod message;
pub mod settings;
pub mod settings_dialog;
pub mod toast_log;
