pub mod checker;
pub mod config;
pub mod event;
pub mod host;
pub mod output;
