pub mod activity;
pub mod controls;
pub mod file_log;
pub mod settings;

pub use controls::Action;
